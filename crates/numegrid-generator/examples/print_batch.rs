//! Example generating a printable batch of Sudoku puzzles.
//!
//! This example shows how to:
//! - Parse a difficulty leniently (unrecognized input falls back to the
//!   default flat-40 policy)
//! - Generate pages of numbered puzzles in parallel
//! - Render puzzles (and optionally their solutions) as text grids
//!
//! # Usage
//!
//! ```sh
//! cargo run --example print_batch
//! ```
//!
//! Four hard puzzles per page over three pages, numbered from 10:
//!
//! ```sh
//! cargo run --example print_batch -- --difficulty 4 --per-page 4 --pages 3 --start-index 10
//! ```
//!
//! Append an answer-key section:
//!
//! ```sh
//! cargo run --example print_batch -- --difficulty 5 --solutions
//! ```

use clap::Parser;
use numegrid_core::{Grid, Position};
use numegrid_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator};
use rayon::prelude::*;

/// Hard cap on pages, guarding against runaway batches.
const MAX_PAGES: usize = 20;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level 1-5 (anything else uses the default policy).
    #[arg(short, long, value_name = "LEVEL", default_value = "3")]
    difficulty: String,

    /// Puzzles per page.
    #[arg(long, value_name = "COUNT", default_value_t = 2)]
    per_page: usize,

    /// Number of pages (clamped to 1-20).
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    pages: usize,

    /// Number printed next to the first puzzle.
    #[arg(long, value_name = "INDEX", default_value_t = 1)]
    start_index: usize,

    /// Also print an answer-key section after the puzzles.
    #[arg(long)]
    solutions: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let difficulty = Difficulty::parse_lenient(&args.difficulty);
    let pages = args.pages.clamp(1, MAX_PAGES);
    let total = pages * args.per_page.max(1);

    let generator = PuzzleGenerator::new();
    let puzzles: Vec<GeneratedPuzzle> = (0..total)
        .into_par_iter()
        .map(|_| generator.generate(difficulty))
        .collect();

    for (i, puzzle) in puzzles.iter().enumerate() {
        let number = args.start_index + i;
        if i > 0 && i % args.per_page.max(1) == 0 {
            println!("--- page break ---");
            println!();
        }
        println!("Puzzle {number} (difficulty: {difficulty})");
        println!("Seed: {}", puzzle.seed);
        print_grid(&puzzle.problem);
        println!();
    }

    if args.solutions {
        println!("=== Solutions ===");
        println!();
        for (i, puzzle) in puzzles.iter().enumerate() {
            println!("Puzzle {}", args.start_index + i);
            print_grid(&puzzle.solution);
            println!();
        }
    }
}

fn print_grid(grid: &Grid) {
    for row in 0..9 {
        if row > 0 && row % 3 == 0 {
            println!("------+-------+------");
        }
        for col in 0..9 {
            if col > 0 && col % 3 == 0 {
                print!("| ");
            }
            let value = grid[Position::new(row, col)];
            if value == 0 {
                print!(". ");
            } else {
                print!("{value} ");
            }
        }
        println!();
    }
}
