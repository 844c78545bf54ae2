//! Error taxonomy for the assistant engine

use crate::core::WordError;
use crate::solver::SessionStatus;
use std::io;
use thiserror::Error;

/// Errors raised by the codec, the filter, the scorer and the session
#[derive(Debug, Error)]
pub enum EngineError {
    /// Feedback string of the wrong length
    #[error("invalid feedback: expected {expected} symbols, got {actual}")]
    InvalidFeedback { expected: usize, actual: usize },

    /// Feedback symbol outside `G`, `Y`, `?` (0-based position)
    #[error("unknown feedback symbol '{symbol}' at position {position}")]
    UnknownFeedbackSymbol { symbol: char, position: usize },

    /// Contradictory feedback history, or the answer is not in the dictionary
    #[error("no candidates remaining; the feedback is contradictory or the answer is not in the word list")]
    NoCandidatesRemaining,

    #[error("guess has {actual} letters but the session plays {expected}-letter words")]
    GuessLengthMismatch { expected: usize, actual: usize },

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("session already finished ({0})")]
    SessionOver(SessionStatus),

    #[error("failed to read input")]
    Input(#[from] io::Error),
}

impl EngineError {
    /// True for both flavours of malformed feedback
    #[must_use]
    pub const fn is_invalid_feedback(&self) -> bool {
        matches!(
            self,
            Self::InvalidFeedback { .. } | Self::UnknownFeedbackSymbol { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_errors_are_grouped() {
        assert!(EngineError::InvalidFeedback { expected: 5, actual: 4 }.is_invalid_feedback());
        assert!(
            EngineError::UnknownFeedbackSymbol {
                symbol: 'X',
                position: 2
            }
            .is_invalid_feedback()
        );
        assert!(!EngineError::NoCandidatesRemaining.is_invalid_feedback());
    }

    #[test]
    fn unknown_symbol_message_names_symbol_and_position() {
        let err = EngineError::UnknownFeedbackSymbol {
            symbol: 'X',
            position: 2,
        };
        assert_eq!(err.to_string(), "unknown feedback symbol 'X' at position 2");
    }
}
