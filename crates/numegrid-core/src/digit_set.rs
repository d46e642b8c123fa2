//! A bitmask set over the Sudoku digits 1-9.

use std::fmt::{self, Debug};

/// A set of digits 1-9 backed by the low nine bits of a `u16`.
///
/// Bit `n` represents digit `n + 1`. Used to collect the digits already
/// present in a row, column, or box, and to check house completeness.
///
/// # Examples
///
/// ```
/// use numegrid_core::DigitSet;
///
/// let mut seen = DigitSet::EMPTY;
/// seen.insert(3);
/// seen.insert(7);
///
/// assert!(seen.contains(3));
/// assert!(!seen.contains(4));
/// assert_eq!(seen.len(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(0x1ff);

    const fn bit(digit: u8) -> u16 {
        assert!(matches!(digit, 1..=9), "digit must be between 1 and 9");
        1 << (digit - 1)
    }

    /// Adds a digit to the set. Returns `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub const fn insert(&mut self, digit: u8) -> bool {
        let bit = Self::bit(digit);
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Removes a digit from the set. Returns `true` if it was present.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub const fn remove(&mut self, digit: u8) -> bool {
        let bit = Self::bit(digit);
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    /// Returns `true` if the set contains `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    #[must_use]
    pub const fn contains(self, digit: u8) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the digits in the set in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=9).filter(move |&d| self.contains(d))
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_contains_remove() {
        let mut set = DigitSet::EMPTY;
        assert!(set.insert(5));
        assert!(!set.insert(5));
        assert!(set.contains(5));
        assert_eq!(set.len(), 1);

        assert!(set.remove(5));
        assert!(!set.remove(5));
        assert!(set.is_empty());
    }

    #[test]
    fn test_full_contains_all() {
        for d in 1..=9 {
            assert!(DigitSet::FULL.contains(d));
        }
        assert_eq!(DigitSet::FULL.len(), 9);
    }

    #[test]
    fn test_iteration_ascending() {
        let set: DigitSet = [9, 1, 4].into_iter().collect();
        let digits: Vec<_> = set.iter().collect();
        assert_eq!(digits, vec![1, 4, 9]);
    }

    #[test]
    #[should_panic(expected = "digit must be between 1 and 9")]
    fn test_rejects_zero() {
        let _ = DigitSet::EMPTY.contains(0);
    }

    #[test]
    #[should_panic(expected = "digit must be between 1 and 9")]
    fn test_rejects_ten() {
        let mut set = DigitSet::EMPTY;
        set.insert(10);
    }
}
