//! The maze grid: [`Tile`] and [`Maze`].
//!
//! A [`Maze`] is an owned width×height grid of tiles stored row-major in a
//! flat `Vec`, so per-cell metadata elsewhere in the engine can use the same
//! `y * width + x` indexing without hashing composite keys.

use crate::error::ConfigError;
use crate::geom::Point;

/// A maze cell state.
///
/// Freshly created mazes are solid [`Tile::Wall`]; generation carves
/// [`Tile::Floor`] corridors into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Wall,
    Floor,
}

/// A 2D grid of [`Tile`] values.
///
/// `width` counts columns (x axis), `height` counts rows (y axis). The
/// start cell is the top-left corner and the goal cell the bottom-right
/// corner; generation keeps both walkable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: i32,
    height: i32,
    cells: Vec<Tile>,
}

impl Maze {
    /// Create a maze of the given size, entirely [`Tile::Wall`].
    pub fn new(width: i32, height: i32) -> Result<Self, ConfigError> {
        if width <= 0 || height <= 0 {
            return Err(ConfigError::EmptyMaze { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Tile::default(); (width * height) as usize],
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the maze has zero cells. Never true for a constructed maze.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The fixed start cell (top-left corner).
    #[inline]
    pub fn start(&self) -> Point {
        Point::ZERO
    }

    /// The fixed goal cell (bottom-right corner).
    #[inline]
    pub fn goal(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }

    /// Whether the point lies within the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Convert a point to its flat row-major index, or `None` if out of
    /// bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Convert a flat index back to a point.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.width, idx as i32 / self.width)
    }

    /// The tile at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = tile;
        }
    }

    /// Whether the point is an in-bounds floor cell. Out-of-bounds points
    /// count as not walkable.
    #[inline]
    pub fn is_floor(&self, p: Point) -> bool {
        self.at(p) == Some(Tile::Floor)
    }

    /// Count how many cells equal the given tile.
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&c| c == tile).count()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &t)| (self.point(i), t))
    }
}
