//! The [`Path`] returned by a successful search.

use std::fmt;

use maze_core::{MazeGrid, Point};

/// A walk from start to goal, both inclusive, with its total step cost.
///
/// Serializable for result exchange; there is no deserializer because a path
/// is only ever produced by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    points: Vec<Point>,
    cost: i32,
}

impl Path {
    pub(crate) fn new(points: Vec<Point>, cost: i32) -> Self {
        debug_assert!(!points.is_empty());
        Self { points, cost }
    }

    /// The zero-cost path of a query whose start is its goal.
    pub(crate) fn single(p: Point) -> Self {
        Self::new(vec![p], 0)
    }

    /// The cells of the path, start first.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Sum of the step costs along the path.
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Number of cells, endpoints included.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Number of moves (cells minus one).
    #[inline]
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    /// First cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Last cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// The cells as `(x, y)` pairs.
    pub fn to_tuples(&self) -> Vec<(i32, i32)> {
        self.points.iter().map(|&p| p.into()).collect()
    }

    /// Whether this is a legal walk on `grid`: every cell open and in
    /// bounds, every step a move the grid allows, and the recorded cost
    /// equal to the sum of the step costs.
    pub fn is_valid_on(&self, grid: &MazeGrid) -> bool {
        if !self.points.iter().all(|&p| grid.is_passable(p)) {
            return false;
        }
        let mut total = 0;
        for w in self.points.windows(2) {
            let Some(&(_, cost)) = grid.neighbors(w[0]).iter().find(|(n, _)| *n == w[1]) else {
                return false;
            };
            total += cost;
        }
        total == self.cost
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}
