//! Resumable graph-search algorithms over a maze grid.
//!
//! Three interchangeable steppers implement the [`Search`] trait:
//!
//! - [`BreadthFirst`] — FIFO expansion, shortest path by hop count.
//! - [`DepthFirst`] — LIFO expansion, finds *a* path, not the shortest.
//! - [`AStar`] — best-first expansion under the Manhattan heuristic,
//!   shortest path on the uniform-cost 4-connected grid.
//!
//! Each call to [`Search::step`] pops at most one frontier item and returns
//! immediately, so a host loop can animate the search one frame at a time
//! without threads or coroutines. Per-cell bookkeeping lives in flat arrays
//! indexed by `y * width + x` rather than hash maps.
//!
//! [`DistanceMap`] is the non-incremental counterpart: a full breadth-first
//! flood from one source, useful as an independent shortest-distance
//! reference.

mod astar;
mod bfs;
mod dfs;
mod distance;
mod distmap;
mod search;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use distance::manhattan;
pub use distmap::{DistanceMap, UNREACHABLE};
pub use search::{Search, StepResult};
