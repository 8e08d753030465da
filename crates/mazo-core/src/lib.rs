//! Core types for the mazometric engine: geometry, the maze grid, and
//! configuration errors.
//!
//! The engine is split in three layers:
//!
//! - this crate holds the plain data types shared by everything else;
//! - `mazo-gen` carves random mazes into a [`Maze`];
//! - `mazo-paths` runs resumable searches over a [`Maze`].
//!
//! Nothing here does I/O; rendering and input belong to the host
//! application.

mod error;
mod geom;
mod maze;

pub use error::ConfigError;
pub use geom::{Direction, Point};
pub use maze::{Maze, Tile};
