//! Compact set of uppercase ASCII letters
//!
//! Bit `i` of the mask is letter `'A' + i`. Used both for the allowed-character
//! set of a session and for the distinct letters of a single word.

use std::fmt;

const FULL_MASK: u32 = (1 << 26) - 1;

/// A set of letters `A`-`Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The full alphabet `A`-`Z`
    pub const ALPHABET: Self = Self(FULL_MASK);

    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a set from arbitrary text, keeping only letters (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::LetterSet;
    ///
    /// let set = LetterSet::from_letters("abc-A");
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains(b'A'));
    /// ```
    #[must_use]
    pub fn from_letters(text: &str) -> Self {
        text.bytes().map(|b| b.to_ascii_uppercase()).collect()
    }

    #[inline]
    const fn bit(letter: u8) -> Option<u32> {
        if letter.is_ascii_uppercase() {
            Some(1 << (letter - b'A'))
        } else {
            None
        }
    }

    /// Check membership; anything that is not an uppercase letter is never a member
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    /// Insert a letter, returning whether it was newly added
    pub fn insert(&mut self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => {
                let added = self.0 & bit == 0;
                self.0 |= bit;
                added
            }
            None => false,
        }
    }

    /// Remove a letter, returning whether it was present
    pub fn remove(&mut self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => {
                let present = self.0 & bit != 0;
                self.0 &= !bit;
                present
            }
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'A'..=b'Z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::empty();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
