//! CLI for maze generation

use clap::Parser;
use maze_iddfs::maze_generator::MazeGenerator;

/// Generate a connected maze, printed as rows of 0/1 digits
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generated grid rows
    #[arg(long, default_value_t = 8)]
    rows: usize,

    /// Generated grid columns
    #[arg(long, default_value_t = 8)]
    cols: usize,

    /// Probability that a discovered neighbor stays blocked
    #[arg(long, default_value_t = 0.3)]
    wall_probability: f64,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate a grid, print it to stdout
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut generator = MazeGenerator::new(args.seed);
    let grid = generator.generate(args.rows, args.cols, args.wall_probability)?;
    println!("{grid}");
    Ok(())
}
