//! Randomized maze generation.
//!
//! [`MazeGen`] carves a *perfect* maze (a spanning tree: exactly one path
//! between any two cells) with a randomized depth-first backtracker, then
//! deliberately spoils it by scattering extra walls, which creates dead
//! ends and may lengthen or sever routes. The start and goal corners and
//! their orthogonal neighbors are protected so both endpoints always stay
//! escapable.
//!
//! Scattering does not re-verify start–goal connectivity afterwards; an
//! exhausted search is the defined outcome when a scatter happens to seal
//! the only corridor.

use mazo_core::{ConfigError, Maze, Point, Tile};
use rand::rngs::SmallRng;
use rand::{Rng, RngExt, SeedableRng};

/// Fraction of the cell count converted to extra walls after carving:
/// `cells / OBSTACLE_DIVISOR`.
const OBSTACLE_DIVISOR: usize = 4;

/// Maze generator owning an RNG and the maze under construction.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub maze: Maze,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator over an all-wall maze of the given size.
    pub fn new(width: i32, height: i32, rng: R) -> Result<Self, ConfigError> {
        Ok(Self {
            rng,
            maze: Maze::new(width, height)?,
        })
    }

    /// Carve a perfect maze with the randomized backtracker.
    ///
    /// Starting from the start corner, repeatedly pick a random unvisited
    /// in-bounds neighbor of the stack top, carve both cells to floor and
    /// descend; pop when no unvisited neighbor remains. Every cell is
    /// visited, so the carved floor spans the whole grid.
    pub fn carve_backtracker(&mut self) {
        let start = self.maze.start();
        let mut visited = vec![false; self.maze.len()];
        let mut stack = vec![start];
        if let Some(si) = self.maze.idx(start) {
            visited[si] = true;
        }
        let mut nbuf: Vec<(Point, usize)> = Vec::with_capacity(4);

        while let Some(&cur) = stack.last() {
            nbuf.clear();
            for np in cur.neighbors_4() {
                if let Some(ni) = self.maze.idx(np) {
                    if !visited[ni] {
                        nbuf.push((np, ni));
                    }
                }
            }
            if nbuf.is_empty() {
                stack.pop();
                continue;
            }
            let (next, ni) = nbuf[self.rng.random_range(0..nbuf.len())];
            self.maze.set(cur, Tile::Floor);
            self.maze.set(next, Tile::Floor);
            visited[ni] = true;
            stack.push(next);
        }
    }

    /// Convert `count` randomly drawn cells to wall, re-drawing until an
    /// unprotected cell comes up. Drawing a cell that is already wall is a
    /// no-op placement, exactly like the reference behavior.
    ///
    /// Skipped entirely when the grid is so small that no unprotected cell
    /// exists (the draw loop could never finish).
    pub fn scatter_walls(&mut self, count: usize) {
        let protected = self.protected_mask();
        if protected.iter().all(|&p| p) {
            return;
        }
        let w = self.maze.width();
        let h = self.maze.height();
        for _ in 0..count {
            loop {
                let p = Point::new(self.rng.random_range(0..w), self.rng.random_range(0..h));
                let Some(i) = self.maze.idx(p) else { continue };
                if protected[i] {
                    continue;
                }
                self.maze.set(p, Tile::Wall);
                break;
            }
        }
    }

    /// Cells that scattering must never wall: start, goal, and their
    /// in-bounds orthogonal neighbors.
    fn protected_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.maze.len()];
        for anchor in [self.maze.start(), self.maze.goal()] {
            if let Some(i) = self.maze.idx(anchor) {
                mask[i] = true;
            }
            for np in anchor.neighbors_4() {
                if let Some(i) = self.maze.idx(np) {
                    mask[i] = true;
                }
            }
        }
        mask
    }

    /// Run the full pipeline and hand back the finished maze.
    pub fn generate(mut self) -> Maze {
        self.carve_backtracker();
        let count = self.maze.len() / OBSTACLE_DIVISOR;
        self.scatter_walls(count);
        self.maze
    }
}

/// Generate a maze with a caller-supplied RNG.
pub fn generate<R: Rng>(width: i32, height: i32, rng: R) -> Result<Maze, ConfigError> {
    Ok(MazeGen::new(width, height, rng)?.generate())
}

/// Generate a maze from a seed. The same seed always reproduces the same
/// maze, which is what makes restarting a session deterministic.
pub fn generate_maze(width: i32, height: i32, seed: u64) -> Result<Maze, ConfigError> {
    generate(width, height, SmallRng::seed_from_u64(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazo_paths::DistanceMap;

    const SEEDS: [u64; 8] = [0, 1, 2, 7, 42, 1234, 0xdead_beef, u64::MAX];

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(generate_maze(0, 10, 1).is_err());
        assert!(generate_maze(10, -3, 1).is_err());
    }

    #[test]
    fn endpoints_and_their_exits_stay_floor() {
        for seed in SEEDS {
            let maze = generate_maze(14, 15, seed).unwrap();
            for anchor in [maze.start(), maze.goal()] {
                assert!(maze.is_floor(anchor), "seed {seed}: {anchor} walled");
                for np in anchor.neighbors_4() {
                    if maze.contains(np) {
                        assert!(maze.is_floor(np), "seed {seed}: exit {np} walled");
                    }
                }
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_maze() {
        for seed in SEEDS {
            let a = generate_maze(14, 15, seed).unwrap();
            let b = generate_maze(14, 15, seed).unwrap();
            assert_eq!(a, b, "seed {seed} not deterministic");
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_maze(14, 15, 1).unwrap();
        let b = generate_maze(14, 15, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn scatter_adds_a_bounded_number_of_walls() {
        for seed in SEEDS {
            let maze = generate_maze(14, 15, seed).unwrap();
            let walls = maze.count(Tile::Wall);
            // Carving leaves the grid all floor, so every wall comes from
            // scattering: at most cells/4, at least one (draws can repeat
            // a cell but 52 draws cannot all collide away to zero).
            assert!(walls >= 1, "seed {seed}: no obstacle placed");
            assert!(walls <= maze.len() / 4, "seed {seed}: too many walls");
        }
    }

    #[test]
    fn goal_usually_reachable_from_start() {
        // Scattering may legitimately sever the corridor (documented gap),
        // so this samples seeds and requires reachability on a known-good
        // majority rather than universally.
        let mut reachable = 0;
        for seed in 0..32u64 {
            let maze = generate_maze(14, 15, seed).unwrap();
            let dmap = DistanceMap::from_source(&maze, maze.start());
            if dmap.reachable(maze.goal()) {
                reachable += 1;
            }
        }
        assert!(
            reachable >= 24,
            "only {reachable}/32 seeds kept the goal reachable"
        );
    }

    #[test]
    fn carve_alone_spans_the_grid() {
        let rng = SmallRng::seed_from_u64(5);
        let mut mg = MazeGen::new(9, 7, rng).unwrap();
        mg.carve_backtracker();
        assert_eq!(mg.maze.count(Tile::Floor), mg.maze.len());
    }

    #[test]
    fn tiny_grid_skips_scattering() {
        // On 2x2 every cell is protected; generation must still terminate.
        let maze = generate_maze(2, 2, 3).unwrap();
        assert_eq!(maze.count(Tile::Floor), 4);
    }

    #[test]
    fn single_cell_grid_generates() {
        // Start == goal here; sessions reject it, generation does not.
        let maze = generate_maze(1, 1, 0).unwrap();
        assert_eq!(maze.len(), 1);
    }
}
