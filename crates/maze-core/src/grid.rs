//! The [`MazeGrid`] type, an immutable 2D grid of [`CellState`]s.
//!
//! A `MazeGrid` owns its cells in a flat row-major buffer. It has no
//! interior mutability, so a shared `&MazeGrid` can be handed to any number
//! of concurrent searches.

use crate::cell::CellState;
use crate::connectivity::{Connectivity, DIAGONAL_DIRS, ORTHOGONAL_DIRS};
use crate::error::GridError;
use crate::geom::{Point, Range};

/// A rectangular maze of open and blocked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    cells: Vec<CellState>,
    width: i32,
    height: i32,
    connectivity: Connectivity,
}

impl MazeGrid {
    /// Create a grid of the given dimensions with every cell open.
    ///
    /// A negative dimension is clamped to zero, so `MazeGrid::new(-3, 4)` is
    /// an empty grid on which every query is out of bounds.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![CellState::Open; (w as usize) * (h as usize)],
            width: w,
            height: h,
            connectivity: Connectivity::default(),
        }
    }

    /// Build a grid from a flat row-major buffer of cell states.
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<CellState>,
    ) -> Result<Self, GridError> {
        let (w, h) = check_dims(width, height)?;
        let expected = width * height;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width: w,
            height: h,
            connectivity: Connectivity::default(),
        })
    }

    /// Build a grid from rows of raw values.
    ///
    /// The zero value of `T` is an open cell, every other value a wall. The
    /// width is taken from the first row; every later row must match it.
    pub fn from_rows<R, T>(rows: R) -> Result<Self, GridError>
    where
        R: IntoIterator,
        R::Item: AsRef<[T]>,
        T: Copy + Default + PartialEq,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0usize;
        for (y, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().map(|&v| CellState::from_raw(v)));
            height += 1;
        }
        Self::from_cells(width.unwrap_or(0), height, cells)
    }

    /// Set the movement rule (builder).
    #[must_use]
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Mark the given cells as blocked (builder). Points outside the grid
    /// are ignored.
    #[must_use]
    pub fn with_blocked(mut self, blocked: impl IntoIterator<Item = Point>) -> Self {
        for p in blocked {
            if let Some(i) = self.index(p) {
                self.cells[i] = CellState::Blocked;
            }
        }
        self
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The bounding range `[0, W) x [0, H)`.
    #[inline]
    pub fn range(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The movement rule used for adjacency and costs.
    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn is_in_bounds(&self, c: Point) -> bool {
        c.x >= 0 && c.x < self.width && c.y >= 0 && c.y < self.height
    }

    #[inline]
    fn index(&self, c: Point) -> Option<usize> {
        if !self.is_in_bounds(c) {
            return None;
        }
        Some((c.y as usize) * (self.width as usize) + (c.x as usize))
    }

    /// The state of the cell at `c`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, c: Point) -> Option<CellState> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether the cell at `c` is open.
    ///
    /// Fails with [`GridError::OutOfBounds`] if `c` is outside the grid.
    #[inline]
    pub fn is_open(&self, c: Point) -> Result<bool, GridError> {
        self.get(c)
            .map(CellState::is_open)
            .ok_or(GridError::OutOfBounds(c))
    }

    /// Whether `c` is in bounds and open. Never fails.
    #[inline]
    pub fn is_passable(&self, c: Point) -> bool {
        self.get(c).is_some_and(CellState::is_open)
    }

    /// Cost of a step between two adjacent cells under this grid's
    /// connectivity.
    #[inline]
    pub fn step_cost(&self, from: Point, to: Point) -> i32 {
        self.connectivity.step_cost(from, to)
    }

    /// Open, in-bounds neighbours of `c` with the cost of stepping there.
    pub fn neighbors(&self, c: Point) -> Vec<(Point, i32)> {
        let mut buf = Vec::with_capacity(8);
        self.neighbors_into(c, &mut buf);
        buf
    }

    /// Append the open, in-bounds neighbours of `c` to `buf`, in the fixed
    /// order documented on [`Connectivity`]. The caller clears `buf`.
    ///
    /// `c` itself may lie anywhere, even outside the grid; directions whose
    /// coordinates would overflow `i32` are skipped.
    pub fn neighbors_into(&self, c: Point, buf: &mut Vec<(Point, i32)>) {
        let ortho = self.connectivity.orthogonal_cost();
        for d in ORTHOGONAL_DIRS {
            if let Some(n) = c.checked_add(d).filter(|&n| self.is_passable(n)) {
                buf.push((n, ortho));
            }
        }
        let Some(diag) = self.connectivity.diagonal_cost() else {
            return;
        };
        let passable = |d: Point| c.checked_add(d).is_some_and(|n| self.is_passable(n));
        for d in DIAGONAL_DIRS {
            // No squeezing between two walls or around a corner.
            if passable(d) && passable(Point::new(d.x, 0)) && passable(Point::new(0, d.y)) {
                buf.push((c + d, diag));
            }
        }
    }

    /// Row-major iterator over `(Point, CellState)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.range().iter().zip(self.cells.iter().copied())
    }

    /// Row-major iterator over the open cells.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter()
            .filter_map(|(p, s)| if s.is_open() { Some(p) } else { None })
    }
}

fn check_dims(width: usize, height: usize) -> Result<(i32, i32), GridError> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) if width.checked_mul(height).is_some() => Ok((w, h)),
        _ => Err(GridError::TooLarge { width, height }),
    }
}
