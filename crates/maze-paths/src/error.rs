//! Errors reported by [`find_path`](crate::find_path) before any search work.

use std::fmt;

use maze_core::Point;

/// Which end of a query a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Invalid search input.
///
/// An unreachable goal is not an error: it is reported as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The endpoint lies outside the grid.
    OutOfBounds { endpoint: Endpoint, point: Point },
    /// The endpoint is a blocked cell.
    InvalidEndpoint { endpoint: Endpoint, point: Point },
}

impl SearchError {
    /// The offending endpoint.
    pub fn endpoint(&self) -> Endpoint {
        match *self {
            Self::OutOfBounds { endpoint, .. } | Self::InvalidEndpoint { endpoint, .. } => endpoint,
        }
    }

    /// The offending coordinate.
    pub fn point(&self) -> Point {
        match *self {
            Self::OutOfBounds { point, .. } | Self::InvalidEndpoint { point, .. } => point,
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { endpoint, point } => {
                write!(f, "{endpoint} {point} is outside the maze")
            }
            Self::InvalidEndpoint { endpoint, point } => {
                write!(f, "{endpoint} {point} is a blocked cell")
            }
        }
    }
}

impl std::error::Error for SearchError {}
