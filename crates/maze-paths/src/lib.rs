//! A* shortest-path search over grid mazes.
//!
//! Build a [`MazeGrid`](maze_core::MazeGrid) once, then ask for paths:
//!
//! - [`find_path`] / [`SearchEngine::find_path`] validate the endpoints and
//!   return `Ok(Some(path))`, `Ok(None)` when the goal is unreachable, or a
//!   [`SearchError`] for an endpoint outside the maze or on a wall.
//! - [`SearchEngine::astar_path`] runs the same search over any
//!   [`AstarPather`].
//! - [`SearchEngine::cost_map`] computes multi-source cost maps in the
//!   maze's step-cost units.
//!
//! [`SearchEngine`] owns and reuses its node arena and heap, so repeated
//! queries incur no allocations after warm-up besides the returned path.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`AstarPather`] : [`Pather`] | A* |
//!
//! `MazeGrid` implements both, with a heuristic chosen from its
//! connectivity. Cost maps work on a `MazeGrid` directly.

mod astar;
mod costmap;
mod distance;
mod engine;
mod error;
mod maze;
mod path;
mod traits;

pub use astar::find_path;
pub use distance::{manhattan, octile};
pub use engine::{PathNode, SearchEngine, SearchStats, UNREACHABLE};
pub use error::{Endpoint, SearchError};
pub use path::Path;
pub use traits::{AstarPather, Pather};
