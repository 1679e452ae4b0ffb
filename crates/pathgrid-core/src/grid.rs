//! The [`Grid`] type: a rectangular, row-major mapping from
//! [`Coordinates`] to [`Cell`].
//!
//! A grid is exclusively owned. Searches and maze generators borrow it
//! mutably for the duration of a call, so two of them can never observe
//! each other's half-written search state.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Coordinates, Range};

/// A rectangular grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Option<Coordinates>,
    end: Option<Coordinates>,
}

impl Grid {
    /// Create an open grid with `rows` × `cols` cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        let too_large = GridError::TooLarge { rows, cols };
        let (r, c) = match (i32::try_from(rows), i32::try_from(cols)) {
            (Ok(r), Ok(c)) => (r, c),
            _ => return Err(too_large),
        };
        let len = rows.checked_mul(cols).ok_or(too_large)?;
        Ok(Self {
            cells: vec![Cell::OPEN; len],
            bounds: Range::new(0, 0, r, c),
            start: None,
            end: None,
        })
    }

    /// Build a grid from per-row wall flags (`true` = wall).
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        for (row, flags) in rows.iter().enumerate() {
            if flags.len() != width {
                return Err(GridError::InconsistentSize {
                    row,
                    expected: width,
                    found: flags.len(),
                });
            }
        }
        let mut grid = Self::new(rows.len(), width)?;
        for (cell, &wall) in grid.cells.iter_mut().zip(rows.iter().flatten()) {
            cell.is_wall = wall;
        }
        Ok(grid)
    }

    /// Parse an ASCII layout.
    ///
    /// `#` is a wall, `.` an open cell, `S` the start and `E` the end. The
    /// whole string is trimmed, individual lines are not, and all lines must
    /// have the same width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        let mut grid = Self::new(lines.len(), width)?;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentSize {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Coordinates::new(row as i32, col as i32);
                match ch {
                    '#' => grid[pos].is_wall = true,
                    '.' => {}
                    'S' if grid.start.is_some() => {
                        return Err(GridError::DuplicateMarker { ch, pos });
                    }
                    'E' if grid.end.is_some() => {
                        return Err(GridError::DuplicateMarker { ch, pos });
                    }
                    'S' => grid.set_start(pos)?,
                    'E' => grid.set_end(pos)?,
                    _ => return Err(GridError::InvalidRune { ch, pos }),
                }
            }
        }
        Ok(grid)
    }

    /// The bounding range, always anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.height() as usize
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.width() as usize
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: empty grids are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Coordinates) -> bool {
        self.bounds.contains(p)
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, p: Coordinates) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols() + p.col as usize)
    }

    /// Coordinates of a flat index.
    #[inline]
    pub fn coordinates_of(&self, idx: usize) -> Coordinates {
        let cols = self.cols();
        Coordinates::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Like [`index_of`](Self::index_of), but reports out-of-bounds
    /// coordinates as an error.
    #[inline]
    pub fn check(&self, p: Coordinates) -> Result<usize, GridError> {
        self.index_of(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })
    }

    /// The cell at `p`, if in bounds.
    #[inline]
    pub fn at(&self, p: Coordinates) -> Option<&Cell> {
        self.index_of(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, if in bounds.
    #[inline]
    pub fn at_mut(&mut self, p: Coordinates) -> Option<&mut Cell> {
        self.index_of(p).map(|i| &mut self.cells[i])
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_walkable(&self, p: Coordinates) -> bool {
        self.at(p).is_some_and(Cell::is_walkable)
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over `(Coordinates, &Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinates, &Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter())
    }

    // -----------------------------------------------------------------------
    // Layout
    // -----------------------------------------------------------------------

    /// Make `p` a wall (or open it again).
    ///
    /// Start and end cells cannot become walls; the call leaves them open.
    pub fn set_wall(&mut self, p: Coordinates, wall: bool) -> Result<(), GridError> {
        let i = self.check(p)?;
        let cell = &mut self.cells[i];
        if cell.is_start || cell.is_end {
            return Ok(());
        }
        cell.is_wall = wall;
        Ok(())
    }

    /// Flip the wall flag of `p`. Start and end cells are left untouched.
    pub fn toggle_wall(&mut self, p: Coordinates) -> Result<(), GridError> {
        let i = self.check(p)?;
        let wall = !self.cells[i].is_wall;
        self.set_wall(p, wall)
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for cell in &mut self.cells {
            cell.is_wall = false;
        }
    }

    /// Turn every cell except the start and end into a wall.
    pub fn fill_walls(&mut self) {
        for cell in &mut self.cells {
            cell.is_wall = !(cell.is_start || cell.is_end);
        }
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall).count()
    }

    /// Place the start marker at `p`, removing it from its previous cell.
    pub fn set_start(&mut self, p: Coordinates) -> Result<(), GridError> {
        let i = self.check(p)?;
        if let Some(old) = self.start.take() {
            self[old].is_start = false;
        }
        let cell = &mut self.cells[i];
        cell.is_start = true;
        cell.is_wall = false;
        self.start = Some(p);
        Ok(())
    }

    /// Place the end marker at `p`, removing it from its previous cell.
    pub fn set_end(&mut self, p: Coordinates) -> Result<(), GridError> {
        let i = self.check(p)?;
        if let Some(old) = self.end.take() {
            self[old].is_end = false;
        }
        let cell = &mut self.cells[i];
        cell.is_end = true;
        cell.is_wall = false;
        self.end = Some(p);
        Ok(())
    }

    /// The start marker, if placed.
    #[inline]
    pub fn start(&self) -> Option<Coordinates> {
        self.start
    }

    /// The end marker, if placed.
    #[inline]
    pub fn end(&self) -> Option<Coordinates> {
        self.end
    }

    // -----------------------------------------------------------------------
    // Search state
    // -----------------------------------------------------------------------

    /// Clear distance, traversal, path and parent state on every cell, then
    /// set the distance of `start` to 0.
    ///
    /// Walls and markers are left as they are. `end` is only bounds-checked.
    pub fn reset_search_state(
        &mut self,
        start: Coordinates,
        end: Coordinates,
    ) -> Result<(), GridError> {
        let si = self.check(start)?;
        self.check(end)?;
        for cell in &mut self.cells {
            cell.reset_search_state();
        }
        let origin = &mut self.cells[si];
        if !origin.is_wall {
            origin.distance = 0;
        }
        Ok(())
    }
}

impl Index<Coordinates> for Grid {
    type Output = Cell;

    /// # Panics
    ///
    /// Panics if `p` is out of bounds.
    fn index(&self, p: Coordinates) -> &Cell {
        match self.index_of(p) {
            Some(i) => &self.cells[i],
            None => panic!("coordinates {p} outside grid {}", self.bounds),
        }
    }
}

impl IndexMut<Coordinates> for Grid {
    fn index_mut(&mut self, p: Coordinates) -> &mut Cell {
        match self.index_of(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("coordinates {p} outside grid {}", self.bounds),
        }
    }
}

impl fmt::Display for Grid {
    /// Renders `#` walls, `S`/`E` markers, `*` path cells, `o` traversed
    /// cells and `.` for everything else.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % self.cols() == 0 {
                writeln!(f)?;
            }
            let ch = if cell.is_wall {
                '#'
            } else if cell.is_start {
                'S'
            } else if cell.is_end {
                'E'
            } else if cell.is_path {
                '*'
            } else if cell.is_traversed {
                'o'
            } else {
                '.'
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
