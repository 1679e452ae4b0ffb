use pathgrid_core::{Coordinates, Grid, GridError};

use crate::pathfinder::{Pathfinder, untraversed};
use crate::queue::PriorityQueue;
use crate::result::SearchResult;
use crate::strategy::Strategy;

impl Pathfinder {
    /// Dijkstra search from `start` to `end`.
    ///
    /// The frontier is a min-queue keyed by tentative distance. A queued
    /// neighbor whose distance improves is re-prioritized in place rather
    /// than pushed twice.
    pub fn dijkstra(
        &mut self,
        grid: &mut Grid,
        start: Coordinates,
        end: Coordinates,
    ) -> Result<SearchResult, GridError> {
        self.search(Strategy::Dijkstra, grid, start, end, Self::dijkstra_traversal)
    }

    fn dijkstra_traversal(&mut self, grid: &mut Grid, start: Coordinates, end: Coordinates) -> Vec<Coordinates> {
        let mut traversed = Vec::new();
        let mut open = PriorityQueue::min();
        open.push(start, 0u32);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some((cur, _)) = open.pop() {
            grid[cur].is_traversed = true;
            traversed.push(cur);
            if cur == end {
                break;
            }

            let tentative = grid[cur].distance + 1;
            for &n in nbuf.cardinal(cur, |n| untraversed(grid, n)) {
                let cell = &mut grid[n];
                if tentative >= cell.distance {
                    continue;
                }
                cell.distance = tentative;
                cell.parent = Some(cur);
                if open.contains(&n) {
                    open.update_priority(&n, tentative);
                } else {
                    open.push(n, tentative);
                }
            }
        }

        self.nbuf = nbuf;
        traversed
    }
}
