//! The [`Cell`] type: wall flag, start/end markers and per-search state.

use crate::geom::Coordinates;

/// Sentinel distance meaning "not reached by the current search".
pub const UNREACHABLE: u32 = u32::MAX;

/// A single grid cell.
///
/// `is_wall`, `is_start` and `is_end` describe the layout; the remaining
/// fields are search state and are cleared by
/// [`Grid::reset_search_state`](crate::Grid::reset_search_state).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub is_wall: bool,
    pub is_start: bool,
    pub is_end: bool,
    /// Set once, when a search finalizes the cell.
    pub is_traversed: bool,
    /// Set during path reconstruction.
    pub is_path: bool,
    /// Tentative path length from the start, [`UNREACHABLE`] until reached.
    pub distance: u32,
    /// Predecessor on the best known path. Navigation only.
    pub parent: Option<Coordinates>,
}

impl Cell {
    /// An open cell with fresh search state.
    pub const OPEN: Self = Self {
        is_wall: false,
        is_start: false,
        is_end: false,
        is_traversed: false,
        is_path: false,
        distance: UNREACHABLE,
        parent: None,
    };

    /// A wall cell with fresh search state.
    pub const WALL: Self = Self {
        is_wall: true,
        ..Self::OPEN
    };

    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_walkable(&self) -> bool {
        !self.is_wall
    }

    /// Whether the current search assigned a finite distance.
    #[inline]
    pub const fn is_reached(&self) -> bool {
        self.distance != UNREACHABLE
    }

    /// Clear the search state, keeping the layout flags.
    #[inline]
    pub fn reset_search_state(&mut self) {
        self.is_traversed = false;
        self.is_path = false;
        self.distance = UNREACHABLE;
        self.parent = None;
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::OPEN
    }
}
