use pathgrid_core::{Coordinates, Grid, GridError};

use crate::heuristic::init_heuristic_costs;
use crate::pathfinder::{Pathfinder, untraversed};
use crate::queue::PriorityQueue;
use crate::result::SearchResult;
use crate::strategy::Strategy;

/// A* queue priority: estimated total cost and cost so far.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AstarCost {
    /// `distance + heuristic`.
    pub total: u32,
    /// Accumulated distance from the start.
    pub distance: u32,
}

impl AstarCost {
    /// Whether `self` leaves the queue before `other`: lower total first,
    /// and on equal totals the larger accumulated distance first.
    pub fn precedes(&self, other: &AstarCost) -> bool {
        if self.total == other.total {
            self.distance > other.distance
        } else {
            self.total < other.total
        }
    }
}

impl Pathfinder {
    /// A* search from `start` to `end` guided by Manhattan distance.
    ///
    /// Ties on estimated total cost go to the candidate that has travelled
    /// furthest, which keeps the search hugging the goal direction.
    pub fn astar(
        &mut self,
        grid: &mut Grid,
        start: Coordinates,
        end: Coordinates,
    ) -> Result<SearchResult, GridError> {
        self.search(Strategy::AStar, grid, start, end, Self::astar_traversal)
    }

    fn astar_traversal(&mut self, grid: &mut Grid, start: Coordinates, end: Coordinates) -> Vec<Coordinates> {
        let heuristic = init_heuristic_costs(grid, end);
        let mut traversed = Vec::new();
        let mut open = PriorityQueue::with_comparator(AstarCost::precedes);
        open.push(
            start,
            AstarCost {
                total: heuristic.at(start),
                distance: 0,
            },
        );
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
                let cost = AstarCost {
                    total: tentative + heuristic.at(n),
                    distance: tentative,
                };
                if open.contains(&n) {
                    open.update_priority(&n, cost);
                } else {
                    open.push(n, cost);
                }
            }
        }

        self.nbuf = nbuf;
        traversed
    }
}
