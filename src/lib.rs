//! Wordle Assistant
//!
//! Narrows a dictionary down to the words consistent with a game's feedback,
//! round by round, and recommends the next guess with a letter-frequency
//! heuristic.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assistant::config::SessionConfig;
//! use wordle_assistant::core::Word;
//! use wordle_assistant::solver::{FilterKind, Session, SessionStatus};
//! use wordle_assistant::wordlists::words_from_slice;
//!
//! let dictionary = words_from_slice(&["crane", "trace", "grape"], 5);
//! let mut session = Session::new(&SessionConfig::default(), dictionary, FilterKind::Positional).unwrap();
//!
//! let guess = Word::new("crane").unwrap();
//! session.submit_raw(&guess, "YGG?G").unwrap();
//!
//! assert_eq!(session.recommend().unwrap().text(), "TRACE");
//! session.submit_raw(&Word::new("trace").unwrap(), "GGGGG").unwrap();
//! assert_eq!(session.status(), SessionStatus::Won);
//! ```

// Core domain types
pub mod core;

// Session configuration
pub mod config;

// Error taxonomy
pub mod error;

// Filtering, scoring and the session state machine
pub mod solver;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::EngineError;
