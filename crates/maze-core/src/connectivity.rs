//! Movement rules: which cells count as adjacent and what a step costs.

use crate::geom::Point;

/// Step cost of every move on a 4-connected grid.
pub const UNIT_COST: i32 = 1;

/// Orthogonal step cost on an 8-connected grid.
pub const ORTHOGONAL_COST: i32 = 10;

/// Diagonal step cost on an 8-connected grid (`10·√2` rounded down).
pub const DIAGONAL_COST: i32 = 14;

/// Up, down, left, right.
pub const ORTHOGONAL_DIRS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// Up-left, up-right, down-left, down-right.
pub const DIAGONAL_DIRS: [Point; 4] = [
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
];

/// How cells connect to each other.
///
/// The enumeration order of neighbours is fixed, which makes search
/// tie-breaking reproducible: orthogonal moves come first in the order of
/// [`ORTHOGONAL_DIRS`], followed (for [`Eight`](Connectivity::Eight)) by
/// the diagonals in the order of [`DIAGONAL_DIRS`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Up/down/left/right, cost [`UNIT_COST`] per step.
    #[default]
    Four,
    /// Orthogonal moves cost [`ORTHOGONAL_COST`], diagonal moves cost
    /// [`DIAGONAL_COST`]. Diagonals may not cut a blocked corner.
    Eight,
}

impl Connectivity {
    /// Cost of one orthogonal step.
    #[inline]
    pub const fn orthogonal_cost(self) -> i32 {
        match self {
            Self::Four => UNIT_COST,
            Self::Eight => ORTHOGONAL_COST,
        }
    }

    /// Cost of one diagonal step, if diagonals are allowed.
    #[inline]
    pub const fn diagonal_cost(self) -> Option<i32> {
        match self {
            Self::Four => None,
            Self::Eight => Some(DIAGONAL_COST),
        }
    }

    /// Cost of a single step between adjacent cells.
    #[inline]
    pub fn step_cost(self, from: Point, to: Point) -> i32 {
        match self.diagonal_cost() {
            Some(c) if from.is_diagonal_to(to) => c,
            _ => self.orthogonal_cost(),
        }
    }
}
