use std::collections::VecDeque;

use pathgrid_core::{Coordinates, Grid, GridError};

use crate::pathfinder::{Pathfinder, untraversed};
use crate::result::SearchResult;
use crate::strategy::Strategy;

impl Pathfinder {
    /// Breadth-first search from `start` to `end`.
    ///
    /// Each step has cost 1, so the frontier is ordered by distance and the
    /// path found is a shortest one in edge count.
    pub fn bfs(
        &mut self,
        grid: &mut Grid,
        start: Coordinates,
        end: Coordinates,
    ) -> Result<SearchResult, GridError> {
        self.search(Strategy::Bfs, grid, start, end, Self::bfs_traversal)
    }

    fn bfs_traversal(&mut self, grid: &mut Grid, start: Coordinates, end: Coordinates) -> Vec<Coordinates> {
        let mut traversed = Vec::new();
        let mut queue = VecDeque::from([start]);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(cur) = queue.pop_front() {
            grid[cur].is_traversed = true;
            traversed.push(cur);
            if cur == end {
                break;
            }

            let next = grid[cur].distance + 1;
            // An untraversed cell with a finite distance is sitting in the
            // queue already.
            let found = nbuf.cardinal(cur, |n| untraversed(grid, n) && !grid[n].is_reached());
            for &n in found {
                let cell = &mut grid[n];
                cell.parent = Some(cur);
                cell.distance = next;
                queue.push_back(n);
            }
        }

        self.nbuf = nbuf;
        traversed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::manhattan;

    #[test]
    fn open_grid_path_is_manhattan() {
        let mut g = Grid::new(5, 5).unwrap();
        let start = Coordinates::new(0, 0);
        let end = Coordinates::new(4, 4);
        let res = Pathfinder::new().bfs(&mut g, start, end).unwrap();

        assert_eq!(res.path_len(), Some(8));
        assert!(res.node_count <= 25);
        assert_eq!(res.node_count, res.traversed.len());
        assert_eq!(res.path.first(), Some(&start));
        assert_eq!(res.path.last(), Some(&end));
        for w in res.path.windows(2) {
            assert_eq!(w[1].diagonal_index(), w[0].diagonal_index() + 1);
        }
        assert_eq!(g[end].distance as usize, 8);
    }

    #[test]
    fn traversal_is_in_distance_order() {
        let mut g = Grid::new(6, 4).unwrap();
        let start = Coordinates::new(2, 1);
        let res = Pathfinder::new()
            .bfs(&mut g, start, Coordinates::new(5, 3))
            .unwrap();
        let dists: Vec<u32> = res.traversed.iter().map(|&p| manhattan(p, start)).collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(res.traversed[0], start);
    }

    #[test]
    fn each_cell_finalized_once() {
        let mut g = Grid::parse(
            "
....
.##.
....",
        )
        .unwrap();
        let res = Pathfinder::new()
            .bfs(&mut g, Coordinates::new(0, 0), Coordinates::new(9, 9))
            .err();
        assert!(res.is_some());

        let res = Pathfinder::new()
            .bfs(&mut g, Coordinates::new(0, 0), Coordinates::new(1, 0))
            .unwrap();
        let mut seen = res.traversed.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), res.traversed.len());
    }
}
