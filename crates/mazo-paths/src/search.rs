use mazo_core::{ConfigError, Maze, Point};

/// Outcome of one unit of search work.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepResult {
    /// The frontier is non-empty and the goal has not been reached yet.
    Continue,
    /// The goal was reached; the path runs from start to goal inclusive.
    Found(Vec<Point>),
    /// The frontier emptied without reaching the goal. A normal terminal
    /// state, not an error: the goal is unreachable in this maze.
    Exhausted,
}

impl StepResult {
    /// Whether the search is over, successfully or not.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, StepResult::Continue)
    }
}

/// A resumable search over a maze.
///
/// Implementations own their frontier and per-cell metadata; a stepper is
/// tied to the maze it was built for and must only be stepped with that
/// maze.
pub trait Search {
    /// Perform one bounded unit of work: at most one frontier pop.
    fn step(&mut self, maze: &Maze) -> StepResult;

    /// Cells discovered so far, in discovery order, for trail rendering.
    fn visited(&self) -> &[Point];

    /// Discard all progress and reseed from the start cell.
    fn reset(&mut self);
}

/// Validate a (start, goal) pair against a maze, returning their flat
/// indices.
pub(crate) fn validate_endpoints(
    maze: &Maze,
    start: Point,
    goal: Point,
) -> Result<(usize, usize), ConfigError> {
    let si = maze.idx(start).ok_or(ConfigError::OutOfBounds(start))?;
    let gi = maze.idx(goal).ok_or(ConfigError::OutOfBounds(goal))?;
    if si == gi {
        return Err(ConfigError::StartIsGoal(start));
    }
    Ok((si, gi))
}

/// Per-cell discovery bookkeeping shared by the queue/stack steppers:
/// a flat membership array plus the discovery-ordered cell list.
pub(crate) struct Footprints {
    seen: Vec<bool>,
    order: Vec<Point>,
}

impl Footprints {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            seen: vec![false; len],
            order: Vec::new(),
        }
    }

    /// Mark a cell as discovered. Returns `false` if it already was.
    pub(crate) fn mark(&mut self, idx: usize, p: Point) -> bool {
        if self.seen[idx] {
            return false;
        }
        self.seen[idx] = true;
        self.order.push(p);
        true
    }

    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.seen[idx]
    }

    pub(crate) fn order(&self) -> &[Point] {
        &self.order
    }

    pub(crate) fn clear(&mut self) {
        self.seen.fill(false);
        self.order.clear();
    }
}

#[cfg(test)]
pub(crate) fn maze_of(rows: &[&str]) -> Maze {
    use mazo_core::Tile;

    let height = rows.len() as i32;
    let width = rows[0].len() as i32;
    let mut maze = Maze::new(width, height).unwrap();
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len() as i32, width, "ragged test maze");
        for (x, ch) in row.chars().enumerate() {
            if ch == '.' {
                maze.set(Point::new(x as i32, y as i32), Tile::Floor);
            }
        }
    }
    maze
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn step_result_round_trip() {
        let r = StepResult::Found(vec![Point::ZERO, Point::new(1, 0)]);
        let json = serde_json::to_string(&r).unwrap();
        let back: StepResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
