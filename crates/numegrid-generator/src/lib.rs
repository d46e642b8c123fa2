//! Sudoku puzzle generation for numegrid.
//!
//! The engine produces a puzzle in two sequential steps:
//!
//! 1. **Solution generation** — the three 3×3 boxes on the main diagonal
//!    are seeded with random permutations (they share no row or column, so
//!    a box-local check suffices), then the remaining 54 cells are
//!    completed by exhaustive backtracking.
//! 2. **Masking** — a copy of the solution has cells zeroed according to
//!    the [`Difficulty`] policy; the untouched solution is kept as the
//!    answer key.
//!
//! Generation is deterministic per [`PuzzleSeed`]: the same seed and
//! difficulty always reproduce the same puzzle. The masked puzzle is not
//! checked for solution uniqueness; callers compare entries against the
//! stored solution.
//!
//! # Examples
//!
//! ```
//! use numegrid_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(Difficulty::Easy);
//!
//! assert!(puzzle.solution.is_solved());
//! assert_eq!(puzzle.problem.hole_count(), 30);
//! ```

pub mod difficulty;
mod generator;
mod mask;
pub mod seed;
mod solution;

pub use self::{
    difficulty::Difficulty,
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParsePuzzleSeedError, PuzzleSeed},
};

/// Upper bound on rejection-sampling draws before the engine falls back to
/// a deterministic scan. Keeps seeding and masking total even under a
/// pathologically biased random stream.
pub(crate) const MAX_REJECTION_DRAWS: usize = 1024;
