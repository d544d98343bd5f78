//! The [`CellState`] type: whether a maze cell can be walked through.

/// State of a single maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Open,
    Blocked,
}

impl CellState {
    /// Convert a raw cell value: the zero (default) value is open, anything
    /// else is blocked.
    #[inline]
    pub fn from_raw<T: Default + PartialEq>(v: T) -> Self {
        if v == T::default() {
            Self::Open
        } else {
            Self::Blocked
        }
    }

    /// Whether the cell can be entered.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether the cell is a wall.
    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }
}

impl From<bool> for CellState {
    /// `true` means blocked, matching the "nonzero is a wall" convention.
    #[inline]
    fn from(blocked: bool) -> Self {
        Self::from_raw(blocked)
    }
}
