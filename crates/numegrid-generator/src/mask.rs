//! Masking: difficulty-driven cell removal.

use log::warn;
use numegrid_core::{Grid, Position};
use rand::{Rng, RngExt as _};

use crate::{Difficulty, MAX_REJECTION_DRAWS};

/// Holes every box receives before the remainder is distributed.
const GUIDED_BASE_PER_BOX: u32 = 2;
/// Cap on holes per box in the guided spread.
const GUIDED_CAP_PER_BOX: u32 = 3;

/// Returns a masked copy of `solution` with cells zeroed according to the
/// difficulty policy. The solution itself is never touched.
///
/// The masked puzzle is not checked for solution uniqueness; especially at
/// high hole counts, other completions may exist. Callers validate entries
/// against the stored solution.
pub(crate) fn mask<R: Rng>(solution: &Grid, difficulty: Difficulty, rng: &mut R) -> Grid {
    let mut puzzle = solution.clone();
    match difficulty {
        Difficulty::Guided => punch_spread(&mut puzzle, rng),
        _ => punch_uniform(&mut puzzle, difficulty.hole_count(), rng),
    }
    puzzle
}

/// Guided policy: exactly 20 holes, spread so every box loses 2 or 3 cells.
///
/// Each box starts with a quota of 2; the 2 remaining holes go to uniformly
/// random boxes, rejecting boxes already at the cap of 3.
fn punch_spread<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let mut quotas = [GUIDED_BASE_PER_BOX; 9];
    let mut extra = Difficulty::Guided.hole_count() - 9 * GUIDED_BASE_PER_BOX;

    let mut draws = 0;
    while extra > 0 {
        let box_index = if draws < MAX_REJECTION_DRAWS {
            rng.random_range(0..9u8)
        } else {
            if draws == MAX_REJECTION_DRAWS {
                warn!("rejection sampling exhausted, assigning extra holes by scan");
            }
            first_box_under_cap(&quotas)
        };
        draws += 1;
        let quota = &mut quotas[usize::from(box_index)];
        if *quota < GUIDED_CAP_PER_BOX {
            *quota += 1;
            extra -= 1;
        }
    }

    for (box_index, &quota) in (0u8..).zip(&quotas) {
        punch_in_box(grid, box_index, quota, rng);
    }
}

fn first_box_under_cap(quotas: &[u32; 9]) -> u8 {
    let index = quotas
        .iter()
        .position(|&quota| quota < GUIDED_CAP_PER_BOX)
        .expect("extra holes remain only while some box is under its cap");
    #[expect(clippy::cast_possible_truncation)]
    let index = index as u8;
    index
}

/// Punches `quota` holes into one box by uniform in-box coordinates,
/// skipping cells that are already empty.
fn punch_in_box<R: Rng>(grid: &mut Grid, box_index: u8, quota: u32, rng: &mut R) {
    let mut remaining = quota;
    let mut draws = 0;
    while remaining > 0 {
        let pos = if draws < MAX_REJECTION_DRAWS {
            Position::from_box(box_index, rng.random_range(0..9u8))
        } else {
            first_filled_in_box(grid, box_index)
        };
        draws += 1;
        if grid.clear(pos) {
            remaining -= 1;
        }
    }
}

fn first_filled_in_box(grid: &Grid, box_index: u8) -> Position {
    Position::box_positions(box_index)
        .into_iter()
        .find(|&pos| !grid.is_empty_at(pos))
        .expect("a box with punches remaining still has filled cells")
}

/// Flat policy: zero `holes` distinct cells chosen uniformly anywhere on
/// the grid, skipping cells that are already empty.
fn punch_uniform<R: Rng>(grid: &mut Grid, holes: u32, rng: &mut R) {
    let mut remaining = holes;
    let mut draws = 0;
    while remaining > 0 {
        let pos = if draws < MAX_REJECTION_DRAWS {
            let row = rng.random_range(0..9u8);
            let col = rng.random_range(0..9u8);
            Position::new(row, col)
        } else {
            first_filled(grid)
        };
        draws += 1;
        if grid.clear(pos) {
            remaining -= 1;
        }
    }
}

fn first_filled(grid: &Grid) -> Position {
    Position::ALL
        .into_iter()
        .find(|&pos| !grid.is_empty_at(pos))
        .expect("a grid with punches remaining still has filled cells")
}
