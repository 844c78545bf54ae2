//! Candidate elimination, scoring and the round-by-round session
//!
//! Data flows one way: the session asks the scorer for a recommendation,
//! takes a guess and feedback from its player, then asks the filter for the
//! next round's state.

pub mod filter;
pub mod scorer;
mod session;

pub use filter::{CandidateFilter, CountingFilter, FilterKind, Narrowed, PositionalFilter, RepeatedLetters};
pub use scorer::{ScoredWord, recommend};
pub use session::{Player, RoundReport, Session, SessionOutcome, SessionStatus};
