//! **maze-core**: the grid model for maze pathfinding.
//!
//! This crate provides the data side of the workspace: geometry primitives,
//! the [`CellState`] of a maze cell, the [`Connectivity`] movement rule and
//! the immutable [`MazeGrid`] with its adjacency, cost and traversability
//! queries. It contains no search logic; see `maze-paths` for that.

pub mod cell;
pub mod connectivity;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::CellState;
pub use connectivity::Connectivity;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::MazeGrid;
