use std::fmt;

use crate::geom::{Coordinates, Range};

/// Errors raised when building or addressing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one row and one column.
    Empty,
    /// Dimensions do not fit the coordinate type or the cell count overflows.
    TooLarge { rows: usize, cols: usize },
    /// Coordinates fall outside the grid.
    OutOfBounds { pos: Coordinates, bounds: Range },
    /// Rows (or layout lines) have different lengths.
    InconsistentSize { row: usize, expected: usize, found: usize },
    /// A layout contains a character with no meaning.
    InvalidRune { ch: char, pos: Coordinates },
    /// A layout contains more than one start or end marker.
    DuplicateMarker { ch: char, pos: Coordinates },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: zero rows or columns"),
            Self::TooLarge { rows, cols } => write!(f, "grid: {rows}x{cols} is too large"),
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "grid: coordinates {pos} outside {bounds}")
            }
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "grid layout has a second \u{201c}{ch}\u{201d} marker at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
