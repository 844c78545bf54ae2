//! Benchmark command
//!
//! Solves a random sample of dictionary words and reports how the sessions
//! ended.

use super::solve::solve_word;
use crate::config::SessionConfig;
use crate::core::Word;
use crate::error::EngineError;
use crate::solver::{FilterKind, SessionStatus};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub won: usize,
    pub exhausted: usize,
    pub no_candidates: usize,
    /// Average attempts over won sessions
    pub average_guesses: f64,
    /// Attempts needed -> number of won sessions
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

/// Options for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    /// Fixed seed for a reproducible sample
    pub seed: Option<u64>,
    pub filter: FilterKind,
    pub show_progress: bool,
}

enum Ending {
    Won(usize),
    Exhausted,
    NoCandidates,
}

/// Pick up to `count` distinct answers from `dictionary`
#[must_use]
pub fn sample_answers(dictionary: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    dictionary
        .choose_multiple(&mut rng, count)
        .cloned()
        .collect()
}

/// Run benchmark sessions in parallel
///
/// # Errors
///
/// Returns the first error other than `NoCandidatesRemaining`, which is
/// counted as an outcome instead.
pub fn run_benchmark(
    config: &SessionConfig,
    dictionary: &[Word],
    options: &BenchmarkConfig,
) -> Result<BenchmarkResult, EngineError> {
    config.validate()?;
    let answers = sample_answers(dictionary, options.count, options.seed);

    let pb = if options.show_progress {
        let pb = ProgressBar::new(answers.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let endings = answers
        .par_iter()
        .map(|answer| {
            let ending = match solve_word(config, dictionary, options.filter, answer) {
                Ok(outcome) if outcome.status == SessionStatus::Won => {
                    Ok(Ending::Won(outcome.attempts))
                }
                Ok(_) => Ok(Ending::Exhausted),
                Err(EngineError::NoCandidatesRemaining) => Ok(Ending::NoCandidates),
                Err(e) => Err(e),
            };
            pb.inc(1);
            ending
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_and_clear();

    let mut result = BenchmarkResult {
        total_words: endings.len(),
        won: 0,
        exhausted: 0,
        no_candidates: 0,
        average_guesses: 0.0,
        distribution: BTreeMap::new(),
        duration: start.elapsed(),
    };

    let mut total_guesses = 0;
    for ending in endings {
        match ending {
            Ending::Won(attempts) => {
                result.won += 1;
                total_guesses += attempts;
                *result.distribution.entry(attempts).or_insert(0) += 1;
            }
            Ending::Exhausted => result.exhausted += 1,
            Ending::NoCandidates => result.no_candidates += 1,
        }
    }
    if result.won > 0 {
        result.average_guesses = total_guesses as f64 / result.won as f64;
    }

    Ok(result)
}
