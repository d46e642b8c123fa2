//! Board coordinates and 3×3 box arithmetic.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// Rows and columns are both in the range 0-8, row-major. The type also
/// carries the mapping between cells and the nine non-overlapping 3×3 boxes:
/// box `b` has its top-left corner at `(b / 3 * 3, b % 3 * 3)`.
///
/// # Examples
///
/// ```
/// use numegrid_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.box_index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index (0-8) of the 3×3 box containing this position.
    ///
    /// Boxes are numbered left to right, top to bottom.
    #[must_use]
    #[inline]
    pub const fn box_index(self) -> u8 {
        self.row / 3 * 3 + self.col / 3
    }

    /// Returns the top-left position of the box with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use numegrid_core::Position;
    ///
    /// assert_eq!(Position::box_origin(0), Position::new(0, 0));
    /// assert_eq!(Position::box_origin(4), Position::new(3, 3));
    /// assert_eq!(Position::box_origin(8), Position::new(6, 6));
    /// ```
    #[must_use]
    pub const fn box_origin(box_index: u8) -> Self {
        assert!(box_index < 9);
        Self {
            row: box_index / 3 * 3,
            col: box_index % 3 * 3,
        }
    }

    /// Converts a box index and a cell index within that box (0-8,
    /// row-major) into an absolute position.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(cell < 9);
        let origin = Self::box_origin(box_index);
        Self {
            row: origin.row + cell / 3,
            col: origin.col + cell % 3,
        }
    }

    /// Returns the nine positions of the box with the given index,
    /// row-major within the box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not in the range 0-8.
    #[must_use]
    pub fn box_positions(box_index: u8) -> [Self; 9] {
        let mut cells = [Self::box_origin(box_index); 9];
        for (i, cell) in cells.iter_mut().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            {
                *cell = Self::from_box(box_index, i as u8);
            }
        }
        cells
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}
