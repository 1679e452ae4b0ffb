//! Terminal pathfinding demo.
//!
//! Run: cargo run --bin pathgrid -- --maze BINARY_TREE --algorithm ALL --seed 7
//!
//! Set `RUST_LOG=debug` to see per-search and per-maze log lines.

use clap::Parser;
use pathgrid_core::{Coordinates, Grid};
use pathgrid_maze::{MazeKind, generate_maze};
use pathgrid_paths::{Pathfinder, SearchResult, Strategy};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generate a maze and run pathfinding strategies across it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid height
    #[arg(long, default_value_t = 21)]
    rows: usize,

    /// Grid width
    #[arg(long, default_value_t = 41)]
    cols: usize,

    /// Maze layout: NONE, BINARY_TREE or RECURSIVE_DIVISION
    #[arg(long, default_value = "RECURSIVE_DIVISION")]
    maze: String,

    /// Strategy: BFS, DFS, DIJKSTRA, A_STAR, or ALL to compare them
    #[arg(long, default_value = "A_STAR")]
    algorithm: String,

    /// Random seed for the maze
    #[arg(long)]
    seed: Option<u64>,

    /// Start cell as ROW,COL (default: top-left interior cell)
    #[arg(long, value_parser = parse_coordinates)]
    start: Option<Coordinates>,

    /// End cell as ROW,COL (default: bottom-right interior cell)
    #[arg(long, value_parser = parse_coordinates)]
    end: Option<Coordinates>,
}

fn parse_coordinates(s: &str) -> Result<Coordinates, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row: i32 = row.trim().parse().map_err(|e| format!("bad row {row:?}: {e}"))?;
    let col: i32 = col.trim().parse().map_err(|e| format!("bad column {col:?}: {e}"))?;
    Ok(Coordinates::new(row, col))
}

fn summary(result: &SearchResult) -> String {
    let path = match result.path_len() {
        Some(n) => n.to_string(),
        None => "none".to_string(),
    };
    format!(
        "{:<9} nodes {:>5}  path {:>5}  {:>8.3} ms",
        result.strategy.name(),
        result.node_count,
        path,
        result.elapsed_ms()
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut grid = Grid::new(args.rows, args.cols)?;
    let last = Coordinates::new(args.rows as i32 - 1, args.cols as i32 - 1);
    let start = args
        .start
        .unwrap_or(Coordinates::new(last.row.min(1), last.col.min(1)));
    let end = args
        .end
        .unwrap_or(Coordinates::new((last.row - 1).max(0), (last.col - 1).max(0)));
    grid.set_start(start)?;
    grid.set_end(end)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let kind = MazeKind::from_name(&args.maze);
    generate_maze(kind, &mut grid, start, end, &mut rng)?;
    log::info!("{kind} maze, {} walls, {start} -> {end}", grid.wall_count());

    let strategies = if args.algorithm.eq_ignore_ascii_case("all") {
        Strategy::ALL.to_vec()
    } else {
        vec![Strategy::from_name(&args.algorithm)]
    };

    let mut pathfinder = Pathfinder::new();
    let mut lines = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let result = pathfinder.run(strategy, &mut grid, start, end)?;
        println!("{strategy}\n{grid}\n");
        lines.push(summary(&result));
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinates() {
        assert_eq!(parse_coordinates("3,4"), Ok(Coordinates::new(3, 4)));
        assert_eq!(parse_coordinates(" 0 , 12"), Ok(Coordinates::new(0, 12)));
        assert!(parse_coordinates("3").is_err());
        assert!(parse_coordinates("a,1").is_err());
    }

    #[test]
    fn cli_defaults() {
        let args = Args::parse_from(["pathgrid"]);
        assert_eq!(args.rows, 21);
        assert_eq!(args.cols, 41);
        assert_eq!(args.maze, "RECURSIVE_DIVISION");
        assert!(args.start.is_none());
    }

    #[test]
    fn cli_start_and_end() {
        let args = Args::parse_from(["pathgrid", "--start", "2,3", "--end", "9,9", "--algorithm", "ALL"]);
        assert_eq!(args.start, Some(Coordinates::new(2, 3)));
        assert_eq!(args.end, Some(Coordinates::new(9, 9)));
    }
}
