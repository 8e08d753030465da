use std::collections::BinaryHeap;

use mazo_core::{ConfigError, Maze, Point};

use crate::UNREACHABLE;
use crate::distance::manhattan;
use crate::search::{Search, StepResult, validate_endpoints};

/// Entry in the open heap, ordered by `f` (then flat index, so ordering is
/// deterministic). Comparison is reversed so `BinaryHeap` (a max-heap) pops
/// the smallest `f` first.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    f: i32,
    idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search stepper with the Manhattan heuristic.
///
/// Per-cell g-scores, predecessors and closed flags live in flat arrays.
/// Relaxing a cell pushes a fresh heap entry instead of decreasing a key,
/// so superseded entries linger in the heap; the closed check at pop time
/// discards them. The heuristic is admissible and consistent on a
/// 4-connected uniform-cost grid, so the returned path is shortest.
pub struct AStar {
    start: Point,
    start_idx: usize,
    goal: Point,
    g: Vec<i32>,
    parent: Vec<usize>,
    closed: Vec<bool>,
    open: BinaryHeap<OpenEntry>,
    order: Vec<Point>,
}

impl AStar {
    /// Create a stepper for the given maze and endpoints.
    pub fn new(maze: &Maze, start: Point, goal: Point) -> Result<Self, ConfigError> {
        let (start_idx, _) = validate_endpoints(maze, start, goal)?;
        let mut s = Self {
            start,
            start_idx,
            goal,
            g: vec![UNREACHABLE; maze.len()],
            parent: vec![usize::MAX; maze.len()],
            closed: vec![false; maze.len()],
            open: BinaryHeap::new(),
            order: Vec::new(),
        };
        s.seed();
        Ok(s)
    }

    fn seed(&mut self) {
        self.g[self.start_idx] = 0;
        self.open.push(OpenEntry {
            f: manhattan(self.start, self.goal),
            idx: self.start_idx,
        });
    }

    /// Walk predecessor links back from `idx` and reverse into a
    /// start-to-goal path.
    fn reconstruct(&self, maze: &Maze, idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = idx;
        while ci != usize::MAX {
            path.push(maze.point(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        path
    }
}

impl Search for AStar {
    fn step(&mut self, maze: &Maze) -> StepResult {
        let Some(OpenEntry { idx: ci, .. }) = self.open.pop() else {
            return StepResult::Exhausted;
        };
        if self.closed[ci] {
            // Stale duplicate from a later relaxation; discarding it is this
            // call's unit of work.
            return StepResult::Continue;
        }
        self.closed[ci] = true;
        let cp = maze.point(ci);
        self.order.push(cp);
        if cp == self.goal {
            return StepResult::Found(self.reconstruct(maze, ci));
        }
        let current_g = self.g[ci];
        for np in cp.neighbors_4() {
            if !maze.is_floor(np) {
                continue;
            }
            let Some(ni) = maze.idx(np) else { continue };
            if self.closed[ni] {
                continue;
            }
            let tentative = current_g + 1;
            if self.g[ni] == UNREACHABLE || tentative < self.g[ni] {
                self.g[ni] = tentative;
                self.parent[ni] = ci;
                self.open.push(OpenEntry {
                    f: tentative + manhattan(np, self.goal),
                    idx: ni,
                });
            }
        }
        StepResult::Continue
    }

    fn visited(&self) -> &[Point] {
        &self.order
    }

    fn reset(&mut self) {
        self.g.fill(UNREACHABLE);
        self.parent.fill(usize::MAX);
        self.closed.fill(false);
        self.open.clear();
        self.order.clear();
        self.seed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::maze_of;
    use crate::{BreadthFirst, DistanceMap};

    fn run(search: &mut impl Search, maze: &Maze) -> (StepResult, usize) {
        let mut steps = 0;
        loop {
            let r = search.step(maze);
            steps += 1;
            if r.is_terminal() {
                return (r, steps);
            }
            // Duplicate heap entries are bounded by the number of pushes,
            // itself bounded by 4 per expanded cell.
            assert!(steps <= 5 * maze.len(), "search did not terminate");
        }
    }

    #[test]
    fn straight_line_in_open_grid() {
        let maze = maze_of(&[".....", ".....", "....."]);
        let mut astar = AStar::new(&maze, maze.start(), maze.goal()).unwrap();
        let (r, _) = run(&mut astar, &maze);
        let StepResult::Found(path) = r else {
            panic!("expected Found");
        };
        assert_eq!(path.len(), 7); // manhattan 6 + start
        assert_eq!(path[0], maze.start());
        assert_eq!(*path.last().unwrap(), maze.goal());
    }

    #[test]
    fn matches_bfs_length_with_walls() {
        let maze = maze_of(&[
            "...#...", //
            ".#.#.#.",
            ".#.#.#.",
            ".#...#.",
            ".#####.",
            ".......",
        ]);
        let start = maze.start();
        let goal = maze.goal();
        let mut astar = AStar::new(&maze, start, goal).unwrap();
        let mut bfs = BreadthFirst::new(&maze, start, goal).unwrap();
        let (ra, _) = run(&mut astar, &maze);
        let (rb, _) = run(&mut bfs, &maze);
        let (StepResult::Found(pa), StepResult::Found(pb)) = (ra, rb) else {
            panic!("both searches should find a path");
        };
        assert_eq!(pa.len(), pb.len());
        // And both agree with the flood-fill reference.
        let dmap = DistanceMap::from_source(&maze, start);
        assert_eq!(pa.len() as i32, dmap.at(goal) + 1);
    }

    #[test]
    fn path_is_4_connected_floor() {
        let maze = maze_of(&[
            ".#...", //
            ".#.#.",
            "...#.",
        ]);
        let mut astar = AStar::new(&maze, maze.start(), maze.goal()).unwrap();
        let (r, _) = run(&mut astar, &maze);
        let StepResult::Found(path) = r else {
            panic!("expected Found");
        };
        for p in &path {
            assert!(maze.is_floor(*p));
        }
        for w in path.windows(2) {
            let d = w[1] - w[0];
            assert_eq!(d.x.abs() + d.y.abs(), 1);
        }
    }

    #[test]
    fn exhausts_when_goal_sealed() {
        let maze = maze_of(&[
            "..#.", //
            "..#.",
            "..#.",
        ]);
        let mut astar = AStar::new(&maze, maze.start(), maze.goal()).unwrap();
        let (r, _) = run(&mut astar, &maze);
        assert_eq!(r, StepResult::Exhausted);
    }

    #[test]
    fn expands_fewer_cells_than_bfs_in_open_grid() {
        // The heuristic steers expansion toward the goal; in an open grid
        // A* should finalize no more cells than BFS dequeues.
        let maze = maze_of(&[
            ".......", //
            ".......",
            ".......",
            ".......",
        ]);
        let mut astar = AStar::new(&maze, maze.start(), maze.goal()).unwrap();
        let mut bfs = BreadthFirst::new(&maze, maze.start(), maze.goal()).unwrap();
        let (_, _) = run(&mut astar, &maze);
        let (_, bfs_steps) = run(&mut bfs, &maze);
        assert!(astar.visited().len() <= bfs_steps);
    }

    #[test]
    fn reset_allows_reuse() {
        let maze = maze_of(&["....", "....", "...."]);
        let mut astar = AStar::new(&maze, maze.start(), maze.goal()).unwrap();
        let (first, _) = run(&mut astar, &maze);
        astar.reset();
        assert!(astar.visited().is_empty());
        let (second, _) = run(&mut astar, &maze);
        assert_eq!(first, second);
    }
}
