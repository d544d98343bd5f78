//! [`MazeGrid`] as a pather.

use maze_core::{Connectivity, MazeGrid, Point};

use crate::distance::{manhattan, octile};
use crate::traits::{AstarPather, Pather};

impl Pather for MazeGrid {
    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<(Point, i32)>) {
        self.neighbors_into(p, buf);
    }
}

impl AstarPather for MazeGrid {
    /// Manhattan distance on 4-connected grids, octile distance on
    /// 8-connected ones; both exact on an empty grid.
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        match self.connectivity() {
            Connectivity::Four => manhattan(from, to),
            Connectivity::Eight => octile(from, to),
        }
    }
}
