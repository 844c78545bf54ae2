//! Dictionary sources
//!
//! The engine only consumes normalized words of one length; this module
//! turns raw word lists into that form.

pub mod loader;

pub use loader::{load_from_file, parse_word_list, words_from_slice};
