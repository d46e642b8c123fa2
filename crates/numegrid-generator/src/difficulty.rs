//! Difficulty levels and the hole-count policy behind them.

use std::fmt::{self, Display};

/// Puzzle difficulty, controlling how many cells the masking step removes
/// and how they are distributed.
///
/// Levels map to the numeric values 1-5 used by callers. [`Guided`] spreads
/// exactly 20 holes evenly across the nine boxes (2-3 per box); every other
/// level punches a flat total anywhere on the grid.
///
/// [`Guided`]: Difficulty::Guided
///
/// # Examples
///
/// ```
/// use numegrid_generator::Difficulty;
///
/// assert_eq!(Difficulty::from_level(5), Some(Difficulty::Master));
/// assert_eq!(Difficulty::Master.hole_count(), 60);
///
/// // Unrecognized input falls back to the default policy (flat 40 holes).
/// assert_eq!(Difficulty::from_level(99), None);
/// assert_eq!(Difficulty::parse_lenient("99"), Difficulty::Medium);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Difficulty {
    /// Level 1: 20 holes, spread 2-3 per box.
    Guided,
    /// Level 2: 30 holes.
    Easy,
    /// Level 3: 40 holes. The default for unrecognized input.
    #[default]
    Medium,
    /// Level 4: 50 holes.
    Hard,
    /// Level 5: 60 holes.
    Master,
}

impl Difficulty {
    /// All difficulties in ascending level order.
    pub const ALL: [Self; 5] = [
        Self::Guided,
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Master,
    ];

    /// Returns the numeric level (1-5) of this difficulty.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Guided => 1,
            Self::Easy => 2,
            Self::Medium => 3,
            Self::Hard => 4,
            Self::Master => 5,
        }
    }

    /// Returns the difficulty for a numeric level, or `None` if the level
    /// is not one of 1-5.
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Guided),
            2 => Some(Self::Easy),
            3 => Some(Self::Medium),
            4 => Some(Self::Hard),
            5 => Some(Self::Master),
            _ => None,
        }
    }

    /// Parses a difficulty from text, falling back to [`Difficulty::Medium`]
    /// (the default flat-40 policy) for anything that is not a recognized
    /// numeric level.
    ///
    /// Malformed difficulty input is never an error: the caller always gets
    /// a puzzle.
    ///
    /// # Examples
    ///
    /// ```
    /// use numegrid_generator::Difficulty;
    ///
    /// assert_eq!(Difficulty::parse_lenient("1"), Difficulty::Guided);
    /// assert_eq!(Difficulty::parse_lenient("5"), Difficulty::Master);
    /// assert_eq!(Difficulty::parse_lenient("99"), Difficulty::Medium);
    /// assert_eq!(Difficulty::parse_lenient("hard?"), Difficulty::Medium);
    /// ```
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        input
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_level)
            .unwrap_or_default()
    }

    /// Returns the total number of cells the masking step removes for this
    /// difficulty.
    #[must_use]
    pub const fn hole_count(self) -> u32 {
        match self {
            Self::Guided => 20,
            Self::Easy => 30,
            Self::Medium => 40,
            Self::Hard => 50,
            Self::Master => 60,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Guided => "guided",
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Master => "master",
        };
        f.write_str(name)
    }
}
