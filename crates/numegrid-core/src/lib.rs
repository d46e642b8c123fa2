//! Core data structures for the numegrid Sudoku engine.
//!
//! This crate provides the value types shared by puzzle generation and any
//! caller that wants to validate placements on its own:
//!
//! - [`Grid`]: a 9×9 matrix of digits, 0 meaning empty, with the single
//!   constraint primitive [`Grid::is_valid_placement`] used everywhere.
//! - [`Position`]: a typed `(row, col)` board coordinate, including the
//!   box-index arithmetic for the nine 3×3 boxes.
//! - [`DigitSet`]: a bitmask set over the digits 1-9, backing the
//!   constraint and completeness checks.
//!
//! # Examples
//!
//! ```
//! use numegrid_core::{Grid, Position};
//!
//! let mut grid = Grid::empty();
//! grid.set(Position::new(0, 2), 5);
//!
//! // 5 already sits in row 0, so it cannot be placed again there.
//! assert!(!grid.is_valid_placement(Position::new(0, 7), 5));
//! assert!(grid.is_valid_placement(Position::new(1, 7), 5));
//! ```

pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    position::Position,
};
