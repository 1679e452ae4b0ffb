use std::time::Instant;

use pathgrid_core::{Coordinates, Grid, GridError};

use crate::neighbors::Neighbors;
use crate::path::reconstruct_path;
use crate::result::SearchResult;
use crate::strategy::Strategy;

/// Signature shared by the traversal routines: expand from `start` until
/// `end` is finalized or the frontier runs dry, returning the finalized
/// cells in order.
type Traversal = fn(&mut Pathfinder, &mut Grid, Coordinates, Coordinates) -> Vec<Coordinates>;

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Entry point for running searches on a [`Grid`].
///
/// A `Pathfinder` owns the scratch buffers the strategies share, so a
/// single instance can run many searches without reallocating them. Each
/// search borrows the grid mutably: the per-cell search state is reset,
/// rewritten by the strategy and left in place for the caller to inspect.
/// Walls are never modified.
pub struct Pathfinder {
    pub(crate) nbuf: Neighbors,
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Pathfinder {
    /// Create a new `Pathfinder`.
    pub fn new() -> Self {
        Self {
            nbuf: Neighbors::new(),
        }
    }

    /// Run `strategy` from `start` to `end`.
    ///
    /// Fails only when `start` or `end` lies outside the grid. An
    /// unreachable end is a normal outcome with an empty path.
    pub fn run(
        &mut self,
        strategy: Strategy,
        grid: &mut Grid,
        start: Coordinates,
        end: Coordinates,
    ) -> Result<SearchResult, GridError> {
        match strategy {
            Strategy::Bfs => self.bfs(grid, start, end),
            Strategy::Dfs => self.dfs(grid, start, end),
            Strategy::Dijkstra => self.dijkstra(grid, start, end),
            Strategy::AStar => self.astar(grid, start, end),
        }
    }

    /// Reset the grid, time `traverse`, then rebuild the path.
    pub(crate) fn search(
        &mut self,
        strategy: Strategy,
        grid: &mut Grid,
        start: Coordinates,
        end: Coordinates,
        traverse: Traversal,
    ) -> Result<SearchResult, GridError> {
        let started = Instant::now();
        grid.reset_search_state(start, end)?;

        // The start is marked before expansion so no neighbor lookup ever
        // rediscovers it. A walled-in start finalizes nothing.
        let traversed = if grid[start].is_walkable() {
            grid[start].is_traversed = true;
            traverse(self, grid, start, end)
        } else {
            Vec::new()
        };
        let path = reconstruct_path(grid, start, end);
        let elapsed = started.elapsed();

        log::debug!(
            "{strategy}: {start} -> {end}, {} nodes, path {} cells, {:?}",
            traversed.len(),
            path.len(),
            elapsed
        );

        Ok(SearchResult {
            strategy,
            node_count: traversed.len(),
            traversed,
            path,
            elapsed,
        })
    }
}

/// Whether a search may still expand into `p`: in bounds, not a wall and
/// not yet finalized.
#[inline]
pub(crate) fn untraversed(grid: &Grid, p: Coordinates) -> bool {
    grid.at(p).is_some_and(|c| c.is_walkable() && !c.is_traversed)
}

/// Run `strategy` on `grid` with a fresh [`Pathfinder`].
pub fn run_search(
    strategy: Strategy,
    grid: &mut Grid,
    start: Coordinates,
    end: Coordinates,
) -> Result<SearchResult, GridError> {
    Pathfinder::new().run(strategy, grid, start, end)
}
