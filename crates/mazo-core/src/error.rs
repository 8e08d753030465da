use std::fmt;

use crate::geom::Point;

/// Errors raised when a maze or session is configured with invalid
/// parameters.
///
/// These are caller mistakes, rejected at construction time; the engine has
/// no runtime I/O failures. An exhausted search is a normal terminal state,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Maze dimensions are not strictly positive.
    EmptyMaze { width: i32, height: i32 },
    /// A start or goal cell lies outside the grid.
    OutOfBounds(Point),
    /// Start and goal are the same cell.
    StartIsGoal(Point),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMaze { width, height } => {
                write!(f, "maze dimensions must be positive, got {width}x{height}")
            }
            Self::OutOfBounds(p) => write!(f, "cell {p} is outside the maze"),
            Self::StartIsGoal(p) => write!(f, "start and goal are both {p}"),
        }
    }
}

impl std::error::Error for ConfigError {}
