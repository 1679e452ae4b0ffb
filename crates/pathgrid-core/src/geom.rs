//! Geometry primitives: [`Coordinates`] and [`Range`].
//!
//! Coordinates are `(row, col)` pairs, rows growing downward and columns
//! growing right.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// A `(row, col)` pair identifying a grid cell.
///
/// This is the lightweight handle stored in search frontiers and in parent
/// links, distinct from the full [`Cell`](crate::Cell) state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub row: i32,
    pub col: i32,
}

impl Coordinates {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create new coordinates.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return coordinates shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours, in order up, down, left, right.
    ///
    /// No bounds checking is done here; callers filter against a [`Range`].
    #[inline]
    pub const fn neighbors_4(self) -> [Coordinates; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// Sum of row and column, handy for checking monotone paths.
    #[inline]
    pub const fn diagonal_index(self) -> i32 {
        self.row + self.col
    }
}

impl PartialOrd for Coordinates {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinates {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coordinates {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coordinates {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<(i32, i32)> for Coordinates {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Coordinates,
    pub max: Coordinates,
}

impl Range {
    /// Create a new range from two corners and canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Coordinates::new(row0.min(row1), col0.min(col1)),
            max: Coordinates::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// Number of columns covered.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Number of rows covered.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Coordinates) -> bool {
        p.row >= self.min.row && p.row < self.max.row && p.col >= self.min.col && p.col < self.max.col
    }

    /// Shrink the range by `n` cells on every side. Collapses to the empty
    /// range when nothing is left.
    #[inline]
    pub fn inset(self, n: i32) -> Self {
        let r = Self {
            min: self.min.shift(n, n),
            max: self.max.shift(-n, -n),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Row-major iterator over every cell in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Coordinates;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Coordinates,
}

impl Iterator for RangeIter {
    type Item = Coordinates;

    fn next(&mut self) -> Option<Coordinates> {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let full_rows = (self.range.max.row - self.cur.row - 1) as usize;
        let rest = (self.range.max.col - self.cur.col) as usize;
        let n = full_rows * w + rest;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_arithmetic() {
        let a = Coordinates::new(1, 2);
        let b = Coordinates::new(3, 4);
        assert_eq!(a + b, Coordinates::new(4, 6));
        assert_eq!(b - a, Coordinates::new(2, 2));
        assert_eq!(a.shift(-1, 1), Coordinates::new(0, 3));
    }

    #[test]
    fn neighbors_order_is_up_down_left_right() {
        let n = Coordinates::new(5, 5).neighbors_4();
        assert_eq!(
            n,
            [
                Coordinates::new(4, 5),
                Coordinates::new(6, 5),
                Coordinates::new(5, 4),
                Coordinates::new(5, 6),
            ]
        );
    }

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 3, 5);
        assert_eq!(r.height(), 3);
        assert_eq!(r.width(), 5);
        assert_eq!(r.len(), 15);
        assert!(r.contains(Coordinates::new(2, 4)));
        assert!(!r.contains(Coordinates::new(3, 0)));
        assert!(!r.contains(Coordinates::new(0, -1)));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(4, 6, 1, 2);
        assert_eq!(r.min, Coordinates::new(1, 2));
        assert_eq!(r.max, Coordinates::new(4, 6));
    }

    #[test]
    fn range_iter_is_row_major() {
        let r = Range::new(0, 0, 2, 3);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Coordinates::new(0, 0));
        assert_eq!(pts[2], Coordinates::new(0, 2));
        assert_eq!(pts[3], Coordinates::new(1, 0));
        assert_eq!(r.iter().len(), 6);
    }

    #[test]
    fn empty_range_iter() {
        let r = Range::new(2, 2, 2, 5);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
    }

    #[test]
    fn inset_collapses() {
        let r = Range::new(0, 0, 5, 7);
        assert_eq!(r.inset(1), Range::new(1, 1, 4, 6));
        assert!(r.inset(3).is_empty());
    }
}
