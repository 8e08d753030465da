use std::collections::VecDeque;

use mazo_core::{ConfigError, Maze, Point};

use crate::search::{Footprints, Search, StepResult, validate_endpoints};

/// Breadth-first search stepper.
///
/// The frontier is a FIFO queue of `(cell, path-so-far)` entries; cells are
/// marked visited when enqueued, so each cell enters the queue at most once.
/// Because expansion proceeds in non-decreasing distance order, the returned
/// path is shortest by hop count.
///
/// Storing a path copy per entry is deliberate at maze scale; see
/// [`AStar`](crate::AStar) for the predecessor-map alternative.
pub struct BreadthFirst {
    start: Point,
    start_idx: usize,
    goal: Point,
    frontier: VecDeque<(Point, Vec<Point>)>,
    visited: Footprints,
}

impl BreadthFirst {
    /// Create a stepper for the given maze and endpoints.
    pub fn new(maze: &Maze, start: Point, goal: Point) -> Result<Self, ConfigError> {
        let (start_idx, _) = validate_endpoints(maze, start, goal)?;
        let mut s = Self {
            start,
            start_idx,
            goal,
            frontier: VecDeque::new(),
            visited: Footprints::new(maze.len()),
        };
        s.seed();
        Ok(s)
    }

    fn seed(&mut self) {
        self.visited.mark(self.start_idx, self.start);
        self.frontier.push_back((self.start, vec![self.start]));
    }
}

impl Search for BreadthFirst {
    fn step(&mut self, maze: &Maze) -> StepResult {
        let Some((cur, path)) = self.frontier.pop_front() else {
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
            self.frontier.push_back((np, npath));
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
