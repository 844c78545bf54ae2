//! Core domain types for the assistant
//!
//! Words, letter sets and feedback. These types are pure and carry their
//! validation with them, so the filter and scorer can assume normalized input.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, Mark};
pub use letters::LetterSet;
pub use word::{Word, WordError};
