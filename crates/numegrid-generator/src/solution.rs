//! Complete-grid construction: diagonal seeding plus backtracking.

use log::{debug, warn};
use numegrid_core::{DigitSet, Grid, Position};
use rand::{Rng, RngExt as _};

use crate::MAX_REJECTION_DRAWS;

/// The three boxes on the main diagonal. They share no row or column, so
/// each can be seeded independently with only a box-local check.
const DIAGONAL_BOXES: [u8; 3] = [0, 4, 8];

/// Builds one complete valid grid: seed the diagonal boxes with random
/// permutations, then complete the remaining 54 cells by backtracking.
///
/// A diagonal-seeded 9×9 grid has always been completable in practice;
/// top-level completion failure would be an internal invariant violation,
/// not an error path, so it is logged and asserted rather than returned.
pub(crate) fn generate_solution<R: Rng>(rng: &mut R) -> Grid {
    let mut grid = Grid::empty();
    seed_diagonal(&mut grid, rng);
    let completed = complete(&mut grid);
    debug_assert!(completed, "diagonal-seeded grid must be completable");
    if completed {
        debug!("completed solution grid");
    } else {
        warn!("backtracking failed to complete a diagonal-seeded grid");
    }
    grid
}

/// Seeds the three main-diagonal boxes with random permutations of 1-9.
pub(crate) fn seed_diagonal<R: Rng>(grid: &mut Grid, rng: &mut R) {
    for box_index in DIAGONAL_BOXES {
        fill_box(grid, box_index, rng);
    }
}

/// Fills one box with a random permutation of 1-9 by rejection sampling:
/// each cell draws uniform digits until one is unused in the box.
pub(crate) fn fill_box<R: Rng>(grid: &mut Grid, box_index: u8, rng: &mut R) {
    for pos in Position::box_positions(box_index) {
        let used = grid.box_digits(box_index);
        grid.set(pos, draw_unused_digit(used, rng));
    }
}

/// Draws a uniform digit 1-9 not contained in `used`. Bounded: after
/// [`MAX_REJECTION_DRAWS`] rejected draws, falls back to the smallest
/// unused digit so a biased random source cannot stall the loop.
///
/// # Panics
///
/// Panics if `used` already contains all nine digits.
fn draw_unused_digit<R: Rng>(used: DigitSet, rng: &mut R) -> u8 {
    for _ in 0..MAX_REJECTION_DRAWS {
        let digit = rng.random_range(1..=9);
        if !used.contains(digit) {
            return digit;
        }
    }
    warn!("rejection sampling exhausted, scanning for an unused digit");
    (1..=9)
        .find(|&digit| !used.contains(digit))
        .expect("a box being filled has at most 8 digits placed")
}

/// Completes the grid in place by exhaustive backtracking: at the first
/// empty cell in row-major order, try digits 1-9 ascending, recurse on
/// each placement that passes the constraint check, and reset the cell on
/// failure. Returns `false` if no digit fits at some cell.
///
/// Seeded cells are never revisited; recursion depth is bounded by the 81
/// cells of the grid.
pub(crate) fn complete(grid: &mut Grid) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    for digit in 1..=9 {
        if grid.is_valid_placement(pos, digit) {
            grid.set(pos, digit);
            if complete(grid) {
                return true;
            }
            grid.set(pos, 0);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn rng(seed: u64) -> Pcg64Mcg {
        Pcg64Mcg::seed_from_u64(seed)
    }

    #[test]
    fn test_fill_box_produces_permutation() {
        for seed in 0..8 {
            let mut grid = Grid::empty();
            fill_box(&mut grid, 4, &mut rng(seed));
            assert_eq!(grid.box_digits(4), DigitSet::FULL);
        }
    }

    #[test]
    fn test_seed_diagonal_fills_exactly_27_cells() {
        let mut grid = Grid::empty();
        seed_diagonal(&mut grid, &mut rng(7));
        assert_eq!(grid.hole_count(), 81 - 27);
        for box_index in DIAGONAL_BOXES {
            assert_eq!(grid.box_digits(box_index), DigitSet::FULL);
        }
        // Off-diagonal boxes stay untouched.
        for box_index in [1, 2, 3, 5, 6, 7] {
            assert!(grid.box_digits(box_index).is_empty());
        }
    }

    #[test]
    fn test_complete_solves_seeded_grid() {
        let mut grid = Grid::empty();
        seed_diagonal(&mut grid, &mut rng(11));
        assert!(complete(&mut grid));
        assert!(grid.is_solved());
    }

    #[test]
    fn test_complete_solves_known_puzzle() {
        let mut grid: Grid = "\
            53..7....\
            6..195...\
            .98....6.\
            8...6...3\
            4..8.3..1\
            7...2...6\
            .6....28.\
            ...419..5\
            ....8..79"
            .parse()
            .unwrap();
        assert!(complete(&mut grid));
        let expected: Grid = "\
            534678912\
            672195348\
            198342567\
            859761423\
            426853791\
            713924856\
            961537284\
            287419635\
            345286179"
            .parse()
            .unwrap();
        assert_eq!(grid, expected);
    }

    #[test]
    fn test_complete_reports_dead_end() {
        // (0, 8) has no candidate: 1-8 fill the rest of the row and 9
        // blocks the column from below.
        let mut grid: Grid = "\
            12345678.\
            .........\
            ........9\
            .........\
            .........\
            .........\
            .........\
            .........\
            ........."
            .parse()
            .unwrap();
        let before = grid.clone();
        assert!(!complete(&mut grid));
        // A failed completion leaves the grid as it found it.
        assert_eq!(grid, before);
    }

    #[test]
    fn test_generate_solution_is_valid() {
        for seed in 0..4 {
            let grid = generate_solution(&mut rng(seed));
            assert!(grid.is_solved());
        }
    }

    #[test]
    fn test_generate_solution_is_deterministic_per_stream() {
        let a = generate_solution(&mut rng(42));
        let b = generate_solution(&mut rng(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_solution_varies_with_stream() {
        let a = generate_solution(&mut rng(1));
        let b = generate_solution(&mut rng(2));
        assert_ne!(a, b);
    }
}
