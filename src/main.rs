//! CLI for maze solving

use std::{
    collections::HashSet,
    fs,
    io::{self, Read},
    path::PathBuf,
    time::Instant,
};

use clap::Parser;
use itertools::Itertools;
use maze_iddfs::{Cell, Grid};

/// Shortest path through a 0/1 grid with iterative-deepening depth-first search
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Start row
    #[arg(long, default_value_t = 0)]
    start_row: usize,

    /// Start column
    #[arg(long, default_value_t = 0)]
    start_col: usize,

    /// Goal row, defaults to the last row
    #[arg(long)]
    goal_row: Option<usize>,

    /// Goal column, defaults to the last column
    #[arg(long)]
    goal_col: Option<usize>,

    /// Depth cap for the search, defaults to rows * cols
    #[arg(long)]
    max_depth: Option<usize>,

    /// Render the solution on the grid
    #[arg(short, long)]
    overlay: bool,

    /// File, where to read the grid. Use `-` for stdin.
    file: PathBuf,
}

/// Read grid from file, print solve outcome
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let digits = if args.file.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(args.file)?
    };
    let mut grid = Grid::parse_digits(digits.trim())?;

    let start = Cell::new(args.start_row, args.start_col);
    let goal = Cell::new(
        args.goal_row.unwrap_or(grid.rows() - 1),
        args.goal_col.unwrap_or(grid.cols() - 1),
    );
    grid.force_passable(start)?;
    grid.force_passable(goal)?;
    let max_depth = args.max_depth.unwrap_or(grid.rows() * grid.cols());

    let clock = Instant::now();
    let result = grid.solve(start, goal, max_depth)?;
    let elapsed = clock.elapsed();

    match &result.path {
        Some(path) => {
            println!(
                "Path found: {} cells, depth used {}, {:.3} s",
                path.len(),
                result.depth_used,
                elapsed.as_secs_f64()
            );
            if args.overlay {
                print_overlay(&grid, path, start, goal);
            }
        }
        None => println!("No path found within depth {}.", result.depth_used),
    }
    Ok(())
}

/// Print the grid with the solution marked on it
fn print_overlay(grid: &Grid, path: &[Cell], start: Cell, goal: Cell) {
    let on_path: HashSet<Cell> = path.iter().copied().collect();
    let lines = (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| {
                    let cell = Cell::new(row, col);
                    if cell == start {
                        'S'
                    } else if cell == goal {
                        'G'
                    } else if on_path.contains(&cell) {
                        '*'
                    } else if grid.is_passable(cell) {
                        '.'
                    } else {
                        '#'
                    }
                })
                .collect::<String>()
        })
        .join("\n");
    println!("{lines}");
}
