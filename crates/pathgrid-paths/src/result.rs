use std::time::Duration;

use pathgrid_core::Coordinates;

use crate::strategy::Strategy;

/// Outcome of a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Strategy that produced the result.
    pub strategy: Strategy,
    /// Cells in the order they were finalized.
    pub traversed: Vec<Coordinates>,
    /// Start to end, empty when the end was not reached.
    pub path: Vec<Coordinates>,
    /// Number of finalized cells.
    pub node_count: usize,
    /// Wall-clock time spent in the search call.
    pub elapsed: Duration,
}

impl SearchResult {
    /// Whether a path to the end was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Path length in edges, or `None` without a path.
    #[inline]
    pub fn path_len(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Elapsed time in fractional milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}
