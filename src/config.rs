//! Session configuration
//!
//! Every option here only shapes the initial state of a session.

use crate::core::LetterSet;
use crate::error::EngineError;
use std::path::PathBuf;

/// Dictionary used when no word list is given
pub const DEFAULT_WORD_LIST: &str = "/usr/share/dict/american-english";
pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const DEFAULT_ALLOWED_ATTEMPTS: usize = 6;

/// Configuration passed into session construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Source of the dictionary, one word per line
    pub word_list_path: PathBuf,
    pub word_length: usize,
    pub allowed_attempts: usize,
    /// Initial allowed-character set
    pub allowed_characters: LetterSet,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            word_list_path: PathBuf::from(DEFAULT_WORD_LIST),
            word_length: DEFAULT_WORD_LENGTH,
            allowed_attempts: DEFAULT_ALLOWED_ATTEMPTS,
            allowed_characters: LetterSet::ALPHABET,
        }
    }
}

impl SessionConfig {
    /// Check that a session can be built from this configuration
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfig` for a zero word length, a zero
    /// attempt budget or an empty alphabet.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.word_length == 0 {
            return Err(EngineError::InvalidConfig(
                "word length must be at least 1".to_string(),
            ));
        }
        if self.allowed_attempts == 0 {
            return Err(EngineError::InvalidConfig(
                "allowed attempts must be at least 1".to_string(),
            ));
        }
        if self.allowed_characters.is_empty() {
            return Err(EngineError::InvalidConfig(
                "allowed characters must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse an alphabet given as a string of letters
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfig` naming the first non-letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::config::SessionConfig;
    ///
    /// let letters = SessionConfig::parse_alphabet("abcXYZ").unwrap();
    /// assert_eq!(letters.len(), 6);
    /// assert!(SessionConfig::parse_alphabet("ab1").is_err());
    /// ```
    pub fn parse_alphabet(text: &str) -> Result<LetterSet, EngineError> {
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(EngineError::InvalidConfig(format!(
                "alphabet may only contain letters, found '{bad}'"
            )));
        }
        Ok(LetterSet::from_letters(text))
    }
}
