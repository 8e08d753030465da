use mazo_core::{ConfigError, Maze, Point};

use crate::search::{Footprints, Search, StepResult, validate_endpoints};

/// Depth-first search stepper.
///
/// Identical to [`BreadthFirst`](crate::BreadthFirst) except that the
/// frontier is a LIFO stack, so the search dives along one corridor before
/// backing up. The returned path is valid but carries no shortest-path
/// guarantee.
pub struct DepthFirst {
    start: Point,
    start_idx: usize,
    goal: Point,
    frontier: Vec<(Point, Vec<Point>)>,
    visited: Footprints,
}

impl DepthFirst {
    /// Create a stepper for the given maze and endpoints.
    pub fn new(maze: &Maze, start: Point, goal: Point) -> Result<Self, ConfigError> {
        let (start_idx, _) = validate_endpoints(maze, start, goal)?;
        let mut s = Self {
            start,
            start_idx,
            goal,
            frontier: Vec::new(),
            visited: Footprints::new(maze.len()),
        };
        s.seed();
        Ok(s)
    }

    fn seed(&mut self) {
        self.visited.mark(self.start_idx, self.start);
        self.frontier.push((self.start, vec![self.start]));
    }
}

impl Search for DepthFirst {
    fn step(&mut self, maze: &Maze) -> StepResult {
        let Some((cur, path)) = self.frontier.pop() else {
            return StepResult::Exhausted;
        };
        if cur == self.goal {
            return StepResult::Found(path);
        }
        for np in cur.neighbors_4() {
            if !maze.is_floor(np) {
                continue;
            }
            let Some(ni) = maze.idx(np) else { continue };
            if !self.visited.mark(ni, np) {
                continue;
            }
            let mut npath = path.clone();
            npath.push(np);
            self.frontier.push((np, npath));
        }
        StepResult::Continue
    }

    fn visited(&self) -> &[Point] {
        self.visited.order()
    }

    fn reset(&mut self) {
        self.frontier.clear();
        self.visited.clear();
        self.seed();
    }
}
