use maze_core::Point;
use maze_core::connectivity::{DIAGONAL_COST, ORTHOGONAL_COST};

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Octile distance in 8-connected step costs: the cheapest walk on an open
/// grid using diagonal steps of [`DIAGONAL_COST`] and straight steps of
/// [`ORTHOGONAL_COST`].
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    DIAGONAL_COST * lo + ORTHOGONAL_COST * (hi - lo)
}
