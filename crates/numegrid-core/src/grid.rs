//! The 9×9 Sudoku grid and its constraint primitive.

use std::{
    error::Error,
    fmt::{self, Debug, Display},
    ops::Index,
    str::FromStr,
};

use crate::{digit_set::DigitSet, position::Position};

/// A 9×9 Sudoku grid.
///
/// Each cell holds a value in `0..=9`, where 0 means empty. A grid is
/// *complete* when every row, column, and 3×3 box contains each digit 1-9
/// exactly once (see [`Grid::is_solved`]).
///
/// The grid is a plain value object: generation mutates it in place, and
/// once handed to a caller it is never touched again by the engine. Callers
/// that need a scratch copy clone it themselves.
///
/// # Examples
///
/// ```
/// use numegrid_core::{Grid, Position};
///
/// let mut grid = Grid::empty();
/// assert_eq!(grid.hole_count(), 81);
///
/// grid.set(Position::new(0, 0), 9);
/// assert_eq!(grid[Position::new(0, 0)], 9);
/// assert!(!grid.is_valid_placement(Position::new(0, 5), 9));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Creates a grid from row-major cell values.
    ///
    /// # Panics
    ///
    /// Panics if any value is greater than 9.
    #[must_use]
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Self {
        for row in &rows {
            for &value in row {
                assert!(value <= 9, "cell value must be between 0 and 9");
            }
        }
        Self { cells: rows }
    }

    /// Returns the value at `pos` (0 if the cell is empty).
    #[must_use]
    #[inline]
    pub const fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Sets the value at `pos`. A value of 0 clears the cell.
    ///
    /// # Panics
    ///
    /// Panics if `value` is greater than 9.
    #[inline]
    pub const fn set(&mut self, pos: Position, value: u8) {
        assert!(value <= 9, "cell value must be between 0 and 9");
        self.cells[pos.row() as usize][pos.col() as usize] = value;
    }

    /// Clears the cell at `pos`. Returns `true` if the cell held a digit.
    #[inline]
    pub const fn clear(&mut self, pos: Position) -> bool {
        let filled = self.get(pos) != 0;
        self.set(pos, 0);
        filled
    }

    /// Returns `true` if the cell at `pos` is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == 0
    }

    /// Checks whether placing `digit` at `pos` violates no Sudoku
    /// constraint: the digit must not already appear in the row, the
    /// column, or the 3×3 box containing `pos`.
    ///
    /// This is the single constraint primitive shared by grid construction
    /// and backtracking completion. It is pure, reads at most 27 cells, and
    /// considers the target cell itself (a cell already holding `digit`
    /// fails its own check), so it is intended for empty target cells.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use numegrid_core::{Grid, Position};
    ///
    /// let mut grid = Grid::empty();
    /// grid.set(Position::new(0, 2), 5);
    ///
    /// assert!(!grid.is_valid_placement(Position::new(0, 7), 5));
    /// assert!(grid.is_valid_placement(Position::new(0, 7), 6));
    /// ```
    #[must_use]
    pub fn is_valid_placement(&self, pos: Position, digit: u8) -> bool {
        assert!(matches!(digit, 1..=9), "digit must be between 1 and 9");
        !self.row_digits(pos.row()).contains(digit)
            && !self.col_digits(pos.col()).contains(digit)
            && !self.box_digits(pos.box_index()).contains(digit)
    }

    /// Returns the set of digits present in the given row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in the range 0-8.
    #[must_use]
    pub fn row_digits(&self, row: u8) -> DigitSet {
        (0..9)
            .map(|col| self.get(Position::new(row, col)))
            .filter(|&v| v != 0)
            .collect()
    }

    /// Returns the set of digits present in the given column.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not in the range 0-8.
    #[must_use]
    pub fn col_digits(&self, col: u8) -> DigitSet {
        (0..9)
            .map(|row| self.get(Position::new(row, col)))
            .filter(|&v| v != 0)
            .collect()
    }

    /// Returns the set of digits present in the given 3×3 box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not in the range 0-8.
    #[must_use]
    pub fn box_digits(&self, box_index: u8) -> DigitSet {
        Position::box_positions(box_index)
            .into_iter()
            .map(|pos| self.get(pos))
            .filter(|&v| v != 0)
            .collect()
    }

    /// Returns the first empty cell in row-major scan order, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self.is_empty_at(pos))
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn hole_count(&self) -> usize {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.is_empty_at(pos))
            .count()
    }

    /// Returns `true` if the grid is complete: no empty cells, and every
    /// row, column, and box contains each digit 1-9 exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        (0..9).all(|i| {
            self.row_digits(i) == DigitSet::FULL
                && self.col_digits(i) == DigitSet::FULL
                && self.box_digits(i) == DigitSet::FULL
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Position> for Grid {
    type Output = u8;

    #[inline]
    fn index(&self, pos: Position) -> &u8 {
        &self.cells[pos.row() as usize][pos.col() as usize]
    }
}

impl Display for Grid {
    /// Formats the grid as 81 characters in row-major order, `.` for empty
    /// cells. The output round-trips through [`Grid::from_str`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Position::ALL {
            let value = self.get(pos);
            if value == 0 {
                f.write_str(".")?;
            } else {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(\"{self}\")")
    }
}

/// Error returned when parsing a [`Grid`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// The input did not contain exactly 81 cell characters.
    BadLength(usize),
    /// The input contained a character other than `0`-`9`, `.`, or
    /// ASCII whitespace.
    BadChar(char),
}

impl Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLength(len) => write!(f, "expected 81 cells, got {len}"),
            Self::BadChar(ch) => write!(f, "unexpected character {ch:?} in grid"),
        }
    }
}

impl Error for ParseGridError {}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses 81 cells in row-major order. `1`-`9` are digits, `0` and `.`
    /// are empty cells, and ASCII whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::empty();
        let mut count = 0usize;
        for ch in s.chars() {
            let value = match ch {
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let v = ch.to_digit(10).unwrap_or(0) as u8;
                    v
                }
                '0' | '.' => 0,
                ch if ch.is_ascii_whitespace() => continue,
                ch => return Err(ParseGridError::BadChar(ch)),
            };
            if count < 81 {
                grid.set(Position::ALL[count], value);
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::BadLength(count));
        }
        Ok(grid)
    }
}
