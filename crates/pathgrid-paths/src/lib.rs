//! Pathfinding strategies for walkable/blocked grids.
//!
//! This crate runs four interchangeable searches over a
//! [`Grid`](pathgrid_core::Grid), all with 4-directional unit-cost
//! movement:
//!
//! - **BFS** ([`Pathfinder::bfs`]): FIFO frontier, shortest path
//! - **DFS** ([`Pathfinder::dfs`]): LIFO frontier, any path
//! - **Dijkstra** ([`Pathfinder::dijkstra`]): min-queue on distance
//! - **A\*** ([`Pathfinder::astar`]): queue on distance plus Manhattan
//!   estimate, deeper candidates winning ties
//!
//! Every search returns a [`SearchResult`] with the finalization order, the
//! reconstructed path, the node count and the elapsed time. Strategies are
//! selected with the closed [`Strategy`] enum; [`Strategy::from_name`] maps
//! unknown names to BFS.
//!
//! The weighted strategies share [`PriorityQueue`], an indexed binary heap
//! with O(1) membership and O(log n) decrease-key.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod heuristic;
mod neighbors;
mod path;
mod pathfinder;
mod queue;
mod result;
mod strategy;

pub use astar::AstarCost;
pub use heuristic::{HeuristicMap, init_heuristic_costs, manhattan};
pub use neighbors::Neighbors;
pub use path::reconstruct_path;
pub use pathfinder::{Pathfinder, run_search};
pub use queue::{OrderFn, PriorityQueue};
pub use result::SearchResult;
pub use strategy::Strategy;

#[cfg(test)]
mod tests {
    use super::*;
    use pathgrid_core::{Coordinates, Grid};

    fn run_all(grid: &mut Grid, start: Coordinates, end: Coordinates) -> Vec<SearchResult> {
        let mut pf = Pathfinder::new();
        Strategy::ALL
            .iter()
            .map(|&s| pf.run(s, grid, start, end).unwrap())
            .collect()
    }

    fn result_of(results: &[SearchResult], s: Strategy) -> &SearchResult {
        results.iter().find(|r| r.strategy == s).unwrap()
    }

    const MAZE: &str = "
S.#.......
..#.####..
..#....#..
..####.#..
.......#.E
.#####.##.
......#...";

    #[test]
    fn open_grids_give_manhattan_paths() {
        let cases = [
            ((4, 6), (0, 0), (3, 5)),
            ((5, 5), (4, 0), (0, 4)),
            ((3, 8), (1, 7), (1, 0)),
            ((6, 2), (5, 1), (0, 0)),
        ];
        for ((rows, cols), s, e) in cases {
            let mut g = Grid::new(rows, cols).unwrap();
            let (start, end) = (Coordinates::from(s), Coordinates::from(e));
            let results = run_all(&mut g, start, end);
            for r in results.iter().filter(|r| r.strategy.is_optimal()) {
                assert_eq!(r.path_len(), Some(manhattan(start, end) as usize), "{}", r.strategy);
            }
        }
    }

    #[test]
    fn five_by_five_scenario() {
        let mut g = Grid::new(5, 5).unwrap();
        let res = run_search(Strategy::Bfs, &mut g, Coordinates::new(0, 0), Coordinates::new(4, 4)).unwrap();
        assert_eq!(res.path_len(), Some(8));
        assert!(res.node_count <= 25);
        assert!(res.path.windows(2).all(|w| w[0].diagonal_index() < w[1].diagonal_index()));
    }

    #[test]
    fn centre_wall_scenario() {
        let mut g = Grid::parse("...\n.#.\n...").unwrap();
        for r in run_all(&mut g, Coordinates::new(0, 0), Coordinates::new(2, 2)) {
            assert_eq!(r.path_len(), Some(4), "{}", r.strategy);
            assert!(!r.path.contains(&Coordinates::new(1, 1)));
        }
    }

    #[test]
    fn start_equals_end() {
        let mut g = Grid::new(4, 4).unwrap();
        let p = Coordinates::new(2, 1);
        for r in run_all(&mut g, p, p) {
            assert_eq!(r.node_count, 1, "{}", r.strategy);
            assert_eq!(r.path, vec![p]);
            assert_eq!(r.path_len(), Some(0));
        }
    }

    #[test]
    fn enclosed_end_is_unreachable() {
        let layout = "
S.....
......
...###
...#E#
...###";
        let mut g = Grid::parse(layout).unwrap();
        let start = g.start().unwrap();
        let end = g.end().unwrap();
        let reachable = g.len() - g.wall_count() - 1;
        for r in run_all(&mut g, start, end) {
            assert!(!r.found(), "{}", r.strategy);
            assert!(r.path.is_empty());
            assert_eq!(r.node_count, reachable);
            assert!(!r.traversed.contains(&end));
            assert!(g.cells().iter().all(|c| !c.is_path));
        }
    }

    #[test]
    fn walled_start_traverses_nothing() {
        let mut g = Grid::parse("#..\n...").unwrap();
        let start = Coordinates::new(0, 0);
        for r in run_all(&mut g, start, Coordinates::new(1, 2)) {
            assert_eq!(r.node_count, 0);
            assert!(r.path.is_empty());
        }
        assert!(!g[start].is_reached());
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut g = Grid::new(3, 3).unwrap();
        for s in Strategy::ALL {
            assert!(run_search(s, &mut g, Coordinates::new(0, 0), Coordinates::new(3, 0)).is_err());
            assert!(run_search(s, &mut g, Coordinates::new(-1, 0), Coordinates::new(0, 0)).is_err());
        }
    }

    #[test]
    fn optimal_strategies_agree_and_astar_is_cheaper() {
        let mut g = Grid::parse(MAZE).unwrap();
        let start = g.start().unwrap();
        let end = g.end().unwrap();
        let results = run_all(&mut g, start, end);

        let bfs = result_of(&results, Strategy::Bfs);
        let dfs = result_of(&results, Strategy::Dfs);
        let dijkstra = result_of(&results, Strategy::Dijkstra);
        let astar = result_of(&results, Strategy::AStar);

        assert!(bfs.found());
        assert_eq!(dijkstra.path_len(), bfs.path_len());
        assert_eq!(astar.path_len(), bfs.path_len());
        assert!(dfs.path_len() >= bfs.path_len());
        assert!(astar.node_count <= dijkstra.node_count);
    }

    #[test]
    fn walls_never_traversed_or_on_path() {
        let mut g = Grid::parse(MAZE).unwrap();
        let start = g.start().unwrap();
        let end = g.end().unwrap();
        let mut pf = Pathfinder::new();
        for s in Strategy::ALL {
            let r = pf.run(s, &mut g, start, end).unwrap();
            for p in r.traversed.iter().chain(&r.path) {
                assert!(!g[*p].is_wall, "{s} stepped on wall {p}");
            }
            assert!(g.cells().iter().filter(|c| c.is_wall).all(|c| {
                !c.is_traversed && !c.is_reached() && !c.is_path && c.parent.is_none()
            }));
        }
    }

    #[test]
    fn reset_and_rerun_is_deterministic() {
        let mut g = Grid::parse(MAZE).unwrap();
        let start = g.start().unwrap();
        let end = g.end().unwrap();
        let walls = g.wall_count();
        let mut pf = Pathfinder::new();
        for s in Strategy::ALL {
            let first = pf.run(s, &mut g, start, end).unwrap();
            g.reset_search_state(start, end).unwrap();
            let second = pf.run(s, &mut g, start, end).unwrap();
            assert_eq!(first.traversed, second.traversed, "{s}");
            assert_eq!(first.path, second.path, "{s}");
        }
        assert_eq!(g.wall_count(), walls);
    }

    #[test]
    fn path_cells_are_marked() {
        let mut g = Grid::parse(MAZE).unwrap();
        let start = g.start().unwrap();
        let end = g.end().unwrap();
        let r = run_search(Strategy::AStar, &mut g, start, end).unwrap();
        let marked = g.cells().iter().filter(|c| c.is_path).count();
        assert_eq!(marked, r.path.len());
        assert_eq!(g[end].distance as usize, r.path.len() - 1);
    }

    #[test]
    fn dispatch_by_name() {
        let mut g = Grid::new(3, 3).unwrap();
        let (s, e) = (Coordinates::new(0, 0), Coordinates::new(2, 2));
        let r = run_search(Strategy::from_name("nonsense"), &mut g, s, e).unwrap();
        assert_eq!(r.strategy, Strategy::Bfs);
        let r = run_search(Strategy::from_name("A_STAR"), &mut g, s, e).unwrap();
        assert_eq!(r.strategy, Strategy::AStar);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use pathgrid_core::{Coordinates, Grid};

    #[test]
    fn strategy_uses_upper_case_names() {
        assert_eq!(serde_json::to_string(&Strategy::AStar).unwrap(), "\"A_STAR\"");
        let back: Strategy = serde_json::from_str("\"DIJKSTRA\"").unwrap();
        assert_eq!(back, Strategy::Dijkstra);
    }

    #[test]
    fn search_result_round_trip() {
        let mut g = Grid::new(3, 3).unwrap();
        let r = run_search(Strategy::Bfs, &mut g, Coordinates::new(0, 0), Coordinates::new(2, 2)).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
