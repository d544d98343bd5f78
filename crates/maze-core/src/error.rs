//! Errors raised while building or querying a [`MazeGrid`](crate::MazeGrid).

use std::fmt;

use crate::geom::Point;

/// Errors produced by the grid model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row does not have the same number of columns as the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat cell buffer does not match `width * height`.
    CellCount { expected: usize, found: usize },
    /// A dimension does not fit the `i32` coordinate space.
    TooLarge { width: usize, height: usize },
    /// A coordinate lies outside the grid.
    OutOfBounds(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} columns, expected {expected}"),
            Self::CellCount { expected, found } => {
                write!(f, "grid needs {expected} cells, got {found}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "grid of {width}x{height} exceeds the coordinate range")
            }
            Self::OutOfBounds(p) => write!(f, "coordinate {p} is outside the grid"),
        }
    }
}

impl std::error::Error for GridError {}
