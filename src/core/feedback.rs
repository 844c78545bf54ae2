//! Per-letter feedback and the feedback codec
//!
//! The game answers each guess with one symbol per letter:
//! - `G` = Correct (right letter, right position)
//! - `Y` = Present (letter in the word, wrong position)
//! - `?` = Absent (letter not in the word, see the repeated-letter caveat)
//!
//! A feedback string is positionally aligned with the guess it describes.

use super::Word;
use crate::error::EngineError;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
}

impl Mark {
    /// Canonical symbol for this mark
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '?',
        }
    }

    /// Decode a symbol; lowercase `g`/`y` are accepted
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' => Some(Self::Correct),
            'Y' | 'y' => Some(Self::Present),
            '?' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback string: one [`Mark`] per letter of the guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    /// Validate and decode a feedback string for words of `length` letters
    ///
    /// # Errors
    /// - `EngineError::InvalidFeedback` if the string is not `length` symbols long
    /// - `EngineError::UnknownFeedbackSymbol` naming the first unrecognized
    ///   symbol and its 0-based position
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::parse("GY??Y", 5).unwrap();
    /// assert_eq!(feedback.marks()[1], Mark::Present);
    ///
    /// assert!(Feedback::parse("GYX??", 5).is_err());
    /// assert!(Feedback::parse("GY", 5).is_err());
    /// ```
    pub fn parse(text: &str, length: usize) -> Result<Self, EngineError> {
        let actual = text.chars().count();
        if actual != length {
            return Err(EngineError::InvalidFeedback {
                expected: length,
                actual,
            });
        }

        text.chars()
            .enumerate()
            .map(|(position, symbol)| {
                Mark::from_symbol(symbol)
                    .ok_or(EngineError::UnknownFeedbackSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Build feedback directly from marks
    #[must_use]
    pub const fn from_marks(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// All-correct feedback for words of `length` letters
    #[must_use]
    pub fn all_correct(length: usize) -> Self {
        Self(vec![Mark::Correct; length])
    }

    /// Calculate the feedback the game gives when `guess` is played against `answer`
    ///
    /// Duplicate letters follow the game's rules: exact matches claim their
    /// letter first, then displaced letters are marked present left to right
    /// while unclaimed copies remain in the answer.
    ///
    /// # Panics
    /// Panics if the two words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_string(), "??G?G");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        assert_eq!(guess.len(), answer.len(), "words must have equal length");

        let mut result = vec![Mark::Absent; guess.len()];
        let mut answer_available = answer.char_counts();

        // Greens first so they claim their letters
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Mark::Correct;
                if let Some(count) = answer_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Mark::Absent
                && let Some(count) = answer_available.get_mut(&g)
                && *count > 0
            {
                result[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter was marked correct
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Correct)
    }

    /// Render as a string like "🟩🟨⬜⬜🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = EngineError;

    /// Decode feedback of whatever length the string has
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, s.chars().count())
    }
}
