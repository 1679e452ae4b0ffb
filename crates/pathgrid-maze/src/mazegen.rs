//! Maze generation over a [`Grid`].
//!
//! Both generators work on a lattice: cells with an odd row and an odd
//! column are "rooms" and are never walled, walls run along even rows and
//! columns, and the outer border is solid. Any start or end cell off the
//! lattice is joined to its nearest room by a short corridor, so the end is
//! always reachable from the start.

use std::cmp::Ordering;

use pathgrid_core::{Coordinates, Grid, GridError, Range};
use rand::Rng;

use crate::kind::MazeKind;

/// Maze generator owning its random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Reset `grid` and lay out a maze of the given kind.
    ///
    /// Search state and previous walls are cleared first. `start` and `end`
    /// are left open and connected. Grids smaller than 3×3 stay open.
    pub fn generate(
        &mut self,
        kind: MazeKind,
        grid: &mut Grid,
        start: Coordinates,
        end: Coordinates,
    ) -> Result<(), GridError> {
        grid.reset_search_state(start, end)?;
        grid.clear_walls();

        let bounds = grid.bounds();
        if kind == MazeKind::None {
            return Ok(());
        }
        if bounds.height() < 3 || bounds.width() < 3 {
            log::debug!("{kind}: grid {bounds} too small for a maze, left open");
            return Ok(());
        }

        match kind {
            MazeKind::None => {}
            MazeKind::BinaryTree => self.binary_tree_walls(grid),
            MazeKind::RecursiveDivision => {
                border_walls(grid);
                self.divide(grid, bounds.inset(1));
            }
        }

        connect_to_lattice(grid, start);
        connect_to_lattice(grid, end);
        log::debug!("{kind}: {} walls on {bounds}", grid.wall_count());
        Ok(())
    }

    /// Binary-tree maze: every room opens the passage north or west of it.
    pub fn binary_tree(&mut self, grid: &mut Grid, start: Coordinates, end: Coordinates) -> Result<(), GridError> {
        self.generate(MazeKind::BinaryTree, grid, start, end)
    }

    /// Recursive-division maze.
    pub fn recursive_division(
        &mut self,
        grid: &mut Grid,
        start: Coordinates,
        end: Coordinates,
    ) -> Result<(), GridError> {
        self.generate(MazeKind::RecursiveDivision, grid, start, end)
    }

    fn binary_tree_walls(&mut self, grid: &mut Grid) {
        grid.fill_walls();
        let rooms = grid.bounds().inset(1);
        for p in rooms.iter().filter(|p| is_room(*p)) {
            open(grid, p);
            // Rooms on the first lattice row can only go west, rooms on the
            // first lattice column only north. (1, 1) is the tree root.
            let north = p.row > rooms.min.row;
            let west = p.col > rooms.min.col;
            let passage = match (north, west) {
                (true, true) => {
                    if self.rng.random_bool(0.5) {
                        p.shift(-1, 0)
                    } else {
                        p.shift(0, -1)
                    }
                }
                (true, false) => p.shift(-1, 0),
                (false, true) => p.shift(0, -1),
                (false, false) => continue,
            };
            open(grid, passage);
        }
    }

    /// Split `chamber` with a wall on an even row or column that has a single
    /// gap on an odd column or row, then recurse into both halves.
    ///
    /// Chambers always start on an odd row and column.
    fn divide(&mut self, grid: &mut Grid, chamber: Range) {
        let (min, max) = (chamber.min, chamber.max);
        let row_lines = wall_line_count(min.row, max.row);
        let col_lines = wall_line_count(min.col, max.col);

        let horizontal = match (row_lines > 0, col_lines > 0) {
            (false, false) => return,
            (true, false) => true,
            (false, true) => false,
            (true, true) => match chamber.height().cmp(&chamber.width()) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => self.rng.random_bool(0.5),
            },
        };

        if horizontal {
            let wall = min.row + 1 + 2 * self.rng.random_range(0..row_lines);
            let gap = min.col + 2 * self.rng.random_range(0..gap_count(min.col, max.col));
            for col in (min.col..max.col).filter(|&c| c != gap) {
                close(grid, Coordinates::new(wall, col));
            }
            self.divide(grid, Range::new(min.row, min.col, wall, max.col));
            self.divide(grid, Range::new(wall + 1, min.col, max.row, max.col));
        } else {
            let wall = min.col + 1 + 2 * self.rng.random_range(0..col_lines);
            let gap = min.row + 2 * self.rng.random_range(0..gap_count(min.row, max.row));
            for row in (min.row..max.row).filter(|&r| r != gap) {
                close(grid, Coordinates::new(row, wall));
            }
            self.divide(grid, Range::new(min.row, min.col, max.row, wall));
            self.divide(grid, Range::new(min.row, wall + 1, max.row, max.col));
        }
    }
}

/// Reset `grid` and lay out a maze of the given kind using `rng`.
pub fn generate_maze<R: Rng>(
    kind: MazeKind,
    grid: &mut Grid,
    start: Coordinates,
    end: Coordinates,
    rng: &mut R,
) -> Result<(), GridError> {
    MazeGen::new(rng).generate(kind, grid, start, end)
}

// ---------------------------------------------------------------------------
// Lattice helpers
// ---------------------------------------------------------------------------

#[inline]
fn is_room(p: Coordinates) -> bool {
    p.row % 2 == 1 && p.col % 2 == 1
}

/// Number of even lines strictly inside `[min, max)` that leave at least one
/// line on each side. `min` is odd.
#[inline]
fn wall_line_count(min: i32, max: i32) -> i32 {
    if max - min >= 3 { (max - min - 1) / 2 } else { 0 }
}

/// Number of odd lines in `[min, max)`. `min` is odd.
#[inline]
fn gap_count(min: i32, max: i32) -> i32 {
    (max - min + 1) / 2
}

// Callers pass in-bounds coordinates by construction.
fn open(grid: &mut Grid, p: Coordinates) {
    if let Some(cell) = grid.at_mut(p) {
        cell.is_wall = false;
    }
}

// Start and end markers are never walled.
fn close(grid: &mut Grid, p: Coordinates) {
    if let Some(cell) = grid.at_mut(p) {
        if !cell.is_start && !cell.is_end {
            cell.is_wall = true;
        }
    }
}

fn border_walls(grid: &mut Grid) {
    let bounds = grid.bounds();
    let inner = bounds.inset(1);
    for p in bounds.iter().filter(|&p| !inner.contains(p)) {
        close(grid, p);
    }
}

/// Nearest odd line to `v` that is not on the border of a `len`-wide axis.
#[inline]
fn nearest_odd(v: i32, len: i32) -> i32 {
    let v = v.clamp(1, len - 2);
    if v % 2 == 0 { v - 1 } else { v }
}

/// Open `p` and an L-shaped corridor from it to the nearest room.
fn connect_to_lattice(grid: &mut Grid, p: Coordinates) {
    let bounds = grid.bounds();
    let target = Coordinates::new(
        nearest_odd(p.row, bounds.height()),
        nearest_odd(p.col, bounds.width()),
    );
    let mut cur = p;
    open(grid, cur);
    while cur.row != target.row {
        cur.row += (target.row - cur.row).signum();
        open(grid, cur);
    }
    while cur.col != target.col {
        cur.col += (target.col - cur.col).signum();
        open(grid, cur);
    }
}
