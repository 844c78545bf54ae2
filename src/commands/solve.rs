//! Self-play against a known answer
//!
//! Plays the engine's own recommendation every round and feeds back what the
//! game would answer, until the session is won or exhausted.

use crate::config::SessionConfig;
use crate::core::{Feedback, Word};
use crate::error::EngineError;
use crate::solver::{CandidateFilter, Player, ScoredWord, Session, SessionOutcome};

/// Player that always plays the top recommendation against a fixed answer
pub struct SelfPlayer {
    answer: Word,
    next: Option<Word>,
}

impl SelfPlayer {
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self { answer, next: None }
    }
}

impl Player for SelfPlayer {
    fn suggest(
        &mut self,
        _attempt: usize,
        recommendation: &[ScoredWord<'_>],
        _remaining: &[Word],
    ) -> Result<(), EngineError> {
        self.next = recommendation.first().map(|s| s.word.clone());
        Ok(())
    }

    fn guess(&mut self, _attempt: usize) -> Result<Word, EngineError> {
        self.next.take().ok_or(EngineError::NoCandidatesRemaining)
    }

    fn feedback(&mut self, guess: &Word) -> Result<Feedback, EngineError> {
        Ok(Feedback::calculate(guess, &self.answer))
    }
}

/// Solve `answer` from `dictionary`
///
/// The answer does not need to be in the dictionary; if it is missing the
/// session ends with `NoCandidatesRemaining`.
///
/// # Errors
///
/// Returns:
/// - `EngineError::GuessLengthMismatch` if the answer has the wrong length
/// - `EngineError::NoCandidatesRemaining` if feedback eliminates every word
/// - `EngineError::InvalidConfig` for an invalid configuration
pub fn solve_word<F: CandidateFilter>(
    config: &SessionConfig,
    dictionary: &[Word],
    filter: F,
    answer: &Word,
) -> Result<SessionOutcome, EngineError> {
    if answer.len() != config.word_length {
        return Err(EngineError::GuessLengthMismatch {
            expected: config.word_length,
            actual: answer.len(),
        });
    }

    let session = Session::new(config, dictionary.iter().cloned(), filter)?;
    session.run(&mut SelfPlayer::new(answer.clone()))
}
