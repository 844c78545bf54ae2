//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{TerminalPlayer, run_play};
pub use solve::{SelfPlayer, solve_word};
