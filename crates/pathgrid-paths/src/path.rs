use pathgrid_core::{Coordinates, Grid};

/// Rebuild the path from `start` to `end` by following parent links
/// backwards from `end`.
///
/// Walking stops at `start` or at a cell without a parent. Only a chain
/// that actually reaches `start` is a path: its cells are marked
/// `is_path` and returned in start→end order. Any other chain yields an
/// empty path and marks nothing.
pub fn reconstruct_path(grid: &mut Grid, start: Coordinates, end: Coordinates) -> Vec<Coordinates> {
    let mut path = Vec::new();
    let mut cursor = Some(end);

    while let Some(p) = cursor {
        let Some(cell) = grid.at(p) else {
            return Vec::new();
        };
        // A chain longer than the grid can only be a cycle.
        if cell.is_wall || path.len() >= grid.len() {
            return Vec::new();
        }
        path.push(p);
        if p == start {
            break;
        }
        cursor = cell.parent;
    }

    if path.last() != Some(&start) {
        return Vec::new();
    }
    path.reverse();
    for &p in &path {
        if let Some(cell) = grid.at_mut(p) {
            cell.is_path = true;
        }
    }
    path
}
