use std::collections::VecDeque;

use mazo_core::{Maze, Point};

/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

/// A complete breadth-first distance map from a single source.
///
/// Unlike the steppers this runs to completion eagerly. It serves as the
/// independent shortest-distance reference in tests and lets hosts answer
/// reachability questions without animating a search.
pub struct DistanceMap {
    width: i32,
    height: i32,
    dist: Vec<i32>,
}

impl DistanceMap {
    /// Flood the maze from `source`. A source outside the grid yields a map
    /// with every cell unreachable.
    pub fn from_source(maze: &Maze, source: Point) -> Self {
        let mut dist = vec![UNREACHABLE; maze.len()];
        let mut queue: VecDeque<usize> = VecDeque::new();
        if let Some(si) = maze.idx(source) {
            dist[si] = 0;
            queue.push_back(si);
        }
        while let Some(ci) = queue.pop_front() {
            let cp = maze.point(ci);
            let d = dist[ci];
            for np in cp.neighbors_4() {
                if !maze.is_floor(np) {
                    continue;
                }
                let Some(ni) = maze.idx(np) else { continue };
                if dist[ni] != UNREACHABLE {
                    continue;
                }
                dist[ni] = d + 1;
                queue.push_back(ni);
            }
        }
        Self {
            width: maze.width(),
            height: maze.height(),
            dist,
        }
    }

    /// The hop distance from the source to `p`, or [`UNREACHABLE`].
    #[inline]
    pub fn at(&self, p: Point) -> i32 {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return UNREACHABLE;
        }
        self.dist[(p.y * self.width + p.x) as usize]
    }

    /// Whether `p` was reached by the flood.
    #[inline]
    pub fn reachable(&self, p: Point) -> bool {
        self.at(p) != UNREACHABLE
    }
}
