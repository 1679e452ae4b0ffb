use pathgrid_core::{Coordinates, Grid};

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Coordinates, b: Coordinates) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

/// Precomputed estimate of the remaining distance from every cell to a goal.
///
/// Uses Manhattan distance, which never overestimates the true cost for
/// 4-directional unit-cost movement.
#[derive(Debug, Clone)]
pub struct HeuristicMap {
    goal: Coordinates,
    cols: usize,
    costs: Vec<u32>,
}

impl HeuristicMap {
    /// The goal the estimates point towards.
    #[inline]
    pub fn goal(&self) -> Coordinates {
        self.goal
    }

    /// Estimated remaining distance from `p`. Falls back to computing it
    /// directly for coordinates outside the mapped grid.
    #[inline]
    pub fn at(&self, p: Coordinates) -> u32 {
        if p.row >= 0 && p.col >= 0 && (p.col as usize) < self.cols {
            if let Some(&c) = self.costs.get(p.row as usize * self.cols + p.col as usize) {
                return c;
            }
        }
        manhattan(p, self.goal)
    }
}

/// Build the heuristic map of `grid` towards `end`.
pub fn init_heuristic_costs(grid: &Grid, end: Coordinates) -> HeuristicMap {
    HeuristicMap {
        goal: end,
        cols: grid.cols(),
        costs: grid.bounds().iter().map(|p| manhattan(p, end)).collect(),
    }
}
