//! Candidate elimination from one round of feedback
//!
//! Defines the `CandidateFilter` trait and its two implementations:
//! - `PositionalFilter`: every position constrains the candidates on its own
//! - `CountingFilter`: occurrence-aware, matches the game's duplicate-letter rules

use crate::core::{Feedback, LetterSet, Mark, Word};
use crate::error::EngineError;
use log::{debug, warn};
use rayon::prelude::*;
use std::fmt;

/// Result of narrowing the candidates with one round of feedback
#[derive(Debug, Clone)]
pub struct Narrowed {
    /// Surviving candidates, in their original order
    pub candidates: Vec<Word>,
    /// Allowed characters after removing letters proven absent
    pub allowed: LetterSet,
    /// Set when elimination may be imprecise for this round
    pub warning: Option<RepeatedLetters>,
}

/// Letters that occurred more than once in a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatedLetters(pub LetterSet);

impl fmt::Display for RepeatedLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "guess repeats {}; elimination may be imprecise this round",
            self.0
        )
    }
}

/// Letters that appear more than once in `guess`
#[must_use]
pub fn repeated_letters(guess: &Word) -> LetterSet {
    let mut seen = LetterSet::empty();
    let mut repeated = LetterSet::empty();
    for &ch in guess.chars() {
        if !seen.insert(ch) {
            repeated.insert(ch);
        }
    }
    repeated
}

/// Narrows a candidate set and allowed-character set with one round of feedback
///
/// Implementations must never grow either set: the output candidates are a
/// subset of the input (order preserved), the output letters a subset of the
/// input letters.
pub trait CandidateFilter {
    /// Apply one guess and its validated feedback
    ///
    /// # Errors
    /// Returns `EngineError::InvalidFeedback` if the feedback and guess differ
    /// in length.
    fn narrow(
        &self,
        candidates: &[Word],
        allowed: LetterSet,
        guess: &Word,
        feedback: &Feedback,
    ) -> Result<Narrowed, EngineError>;

    /// Decode raw feedback for `guess` and apply it
    ///
    /// # Errors
    /// Returns the codec errors (`InvalidFeedback`, `UnknownFeedbackSymbol`)
    /// before anything is filtered.
    fn narrow_raw(
        &self,
        candidates: &[Word],
        allowed: LetterSet,
        guess: &Word,
        feedback: &str,
    ) -> Result<Narrowed, EngineError> {
        let feedback = Feedback::parse(feedback, guess.len())?;
        self.narrow(candidates, allowed, guess, &feedback)
    }
}

fn check_lengths(guess: &Word, feedback: &Feedback) -> Result<(), EngineError> {
    if guess.len() == feedback.len() {
        Ok(())
    } else {
        Err(EngineError::InvalidFeedback {
            expected: guess.len(),
            actual: feedback.len(),
        })
    }
}

/// Simple per-position elimination
///
/// - Correct at `i`: keep words with `guess[i]` at `i`
/// - Present at `i`: keep words containing `guess[i]`, but not at `i`
/// - Absent at `i`: keep words without `guess[i]` anywhere, and drop it from
///   the allowed letters
///
/// A word survives only if it satisfies every position. When the guess
/// repeats a letter, Absent for one copy can wrongly purge words containing
/// the other copy, so such rounds carry a [`RepeatedLetters`] warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalFilter;

impl PositionalFilter {
    fn admits(word: &Word, guess: &Word, feedback: &Feedback) -> bool {
        guess
            .chars()
            .iter()
            .zip(feedback.marks())
            .enumerate()
            .all(|(i, (&letter, &mark))| {
                let at_position = word.chars().get(i) == Some(&letter);
                match mark {
                    Mark::Correct => at_position,
                    Mark::Present => word.has_letter(letter) && !at_position,
                    Mark::Absent => !word.has_letter(letter),
                }
            })
    }
}

impl CandidateFilter for PositionalFilter {
    fn narrow(
        &self,
        candidates: &[Word],
        allowed: LetterSet,
        guess: &Word,
        feedback: &Feedback,
    ) -> Result<Narrowed, EngineError> {
        check_lengths(guess, feedback)?;

        let repeated = repeated_letters(guess);
        let warning = if repeated.is_empty() {
            None
        } else {
            let warning = RepeatedLetters(repeated);
            warn!("{warning}");
            Some(warning)
        };

        let mut allowed = allowed;
        for (&letter, &mark) in guess.chars().iter().zip(feedback.marks()) {
            if mark == Mark::Absent {
                allowed.remove(letter);
            }
        }

        let survivors: Vec<Word> = candidates
            .par_iter()
            .filter(|word| Self::admits(word, guess, feedback))
            .cloned()
            .collect();

        debug!(
            "positional filter: {guess} {feedback} narrowed {} -> {} candidates",
            candidates.len(),
            survivors.len()
        );

        Ok(Narrowed {
            candidates: survivors,
            allowed,
            warning,
        })
    }
}

/// Occurrence-counting elimination
///
/// Keeps exactly the words that would have produced this feedback had they
/// been the answer, so an Absent copy of a letter only caps how many times
/// the letter occurs. A letter leaves the allowed set only when every copy
/// of it in the guess is Absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingFilter;

impl CandidateFilter for CountingFilter {
    fn narrow(
        &self,
        candidates: &[Word],
        allowed: LetterSet,
        guess: &Word,
        feedback: &Feedback,
    ) -> Result<Narrowed, EngineError> {
        check_lengths(guess, feedback)?;

        let mut confirmed = LetterSet::empty();
        for (&letter, &mark) in guess.chars().iter().zip(feedback.marks()) {
            if mark != Mark::Absent {
                confirmed.insert(letter);
            }
        }

        let mut allowed = allowed;
        for (&letter, &mark) in guess.chars().iter().zip(feedback.marks()) {
            if mark == Mark::Absent && !confirmed.contains(letter) {
                allowed.remove(letter);
            }
        }

        let survivors: Vec<Word> = candidates
            .par_iter()
            .filter(|word| word.len() == guess.len() && Feedback::calculate(guess, word) == *feedback)
            .cloned()
            .collect();

        debug!(
            "counting filter: {guess} {feedback} narrowed {} -> {} candidates",
            candidates.len(),
            survivors.len()
        );

        Ok(Narrowed {
            candidates: survivors,
            allowed,
            warning: None,
        })
    }
}

/// Runtime choice of filter with static dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    /// Per-position rule (default)
    #[default]
    Positional,
    /// Occurrence-counting rule
    Counting,
}

impl FilterKind {
    /// Create a filter from its name
    ///
    /// Accepts "positional" (alias "simple") and "counting" (alias "strict").
    /// Returns `None` for unrecognized names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "positional" | "simple" => Some(Self::Positional),
            "counting" | "strict" => Some(Self::Counting),
            _ => None,
        }
    }
}

impl CandidateFilter for FilterKind {
    fn narrow(
        &self,
        candidates: &[Word],
        allowed: LetterSet,
        guess: &Word,
        feedback: &Feedback,
    ) -> Result<Narrowed, EngineError> {
        match self {
            Self::Positional => PositionalFilter.narrow(candidates, allowed, guess, feedback),
            Self::Counting => CountingFilter.narrow(candidates, allowed, guess, feedback),
        }
    }
}
