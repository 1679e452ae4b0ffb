use pathgrid_core::{Coordinates, Grid, GridError};

use crate::pathfinder::{Pathfinder, untraversed};
use crate::result::SearchResult;
use crate::strategy::Strategy;

impl Pathfinder {
    /// Depth-first search from `start` to `end`.
    ///
    /// Same bookkeeping as [`bfs`](Self::bfs) with a stack for a frontier:
    /// the last neighbor discovered is expanded first. The path it finds is
    /// valid but usually not the shortest.
    pub fn dfs(
        &mut self,
        grid: &mut Grid,
        start: Coordinates,
        end: Coordinates,
    ) -> Result<SearchResult, GridError> {
        self.search(Strategy::Dfs, grid, start, end, Self::dfs_traversal)
    }

    fn dfs_traversal(&mut self, grid: &mut Grid, start: Coordinates, end: Coordinates) -> Vec<Coordinates> {
        let mut traversed = Vec::new();
        let mut stack = vec![start];
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(cur) = stack.pop() {
            grid[cur].is_traversed = true;
            traversed.push(cur);
            if cur == end {
                break;
            }

            let next = grid[cur].distance + 1;
            // Cells already on the stack keep their first parent.
            let found = nbuf.cardinal(cur, |n| untraversed(grid, n) && !grid[n].is_reached());
            for &n in found {
                let cell = &mut grid[n];
                cell.parent = Some(cur);
                cell.distance = next;
                stack.push(n);
            }
        }

        self.nbuf = nbuf;
        traversed
    }
}
