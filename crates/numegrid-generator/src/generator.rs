//! The puzzle generation pipeline.

use log::debug;
use numegrid_core::Grid;

use crate::{Difficulty, PuzzleSeed, mask, solution};

/// A generated puzzle together with its answer key.
///
/// `problem` is the masked grid handed to the player; `solution` is the
/// complete grid it was punched from. The two are independent values: edits
/// to one never affect the other. Non-empty cells of `problem` always equal
/// `solution` at the same position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The masked puzzle grid (0 = cell for the player to fill).
    pub problem: Grid,
    /// The complete grid the puzzle was masked from.
    pub solution: Grid,
    /// The difficulty the masking policy was applied at.
    pub difficulty: Difficulty,
    /// The seed that reproduces this puzzle exactly.
    pub seed: PuzzleSeed,
}

/// Sudoku puzzle generator.
///
/// The generator is stateless: every call returns fresh value objects and
/// no prior puzzle or solution is retained, so a single generator can be
/// shared freely across threads or calls.
///
/// # Examples
///
/// ```
/// use numegrid_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate(Difficulty::Guided);
///
/// assert_eq!(puzzle.problem.hole_count(), 20);
/// assert!(puzzle.solution.is_solved());
///
/// // The same seed reproduces the same puzzle.
/// let again = generator.generate_with_seed(puzzle.difficulty, puzzle.seed);
/// assert_eq!(again, puzzle);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a puzzle at the given difficulty from a fresh random seed.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed` at the given difficulty.
    ///
    /// Deterministic: the same seed and difficulty always produce the same
    /// [`GeneratedPuzzle`].
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: PuzzleSeed) -> GeneratedPuzzle {
        debug!("generating {difficulty} puzzle from seed {seed}");
        let mut rng = seed.rng();
        let solution = solution::generate_solution(&mut rng);
        let problem = mask::mask(&solution, difficulty, &mut rng);
        debug!("masked {} of 81 cells", problem.hole_count());
        GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed,
        }
    }

    /// Generates one complete valid grid from a fresh random seed, without
    /// masking.
    #[must_use]
    pub fn generate_solution(&self) -> Grid {
        self.generate_solution_with_seed(PuzzleSeed::random())
    }

    /// Generates the complete valid grid identified by `seed`, without
    /// masking.
    #[must_use]
    pub fn generate_solution_with_seed(&self, seed: PuzzleSeed) -> Grid {
        solution::generate_solution(&mut seed.rng())
    }
}
