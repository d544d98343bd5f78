use maze_core::Point;

/// Minimal pathfinding interface: weighted neighbour enumeration.
pub trait Pather {
    /// Append the reachable neighbours of `p`, each with the positive cost of
    /// stepping there, into `buf`. The caller clears `buf` before calling.
    ///
    /// The order of the appended neighbours decides which of several equally
    /// short paths a search returns, so it must be deterministic.
    fn neighbors(&self, p: Point, buf: &mut Vec<(Point, i32)>);
}

/// Pather with an admissible heuristic, as required by A*.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible), and should not
    /// drop by more than a step's cost across any edge (consistent).
    fn estimate(&self, from: Point, to: Point) -> i32;
}
