//! Wordle Assistant - CLI
//!
//! Suggests guesses for a word-guessing game from the feedback you enter,
//! or plays against a known answer to show how the assistant performs.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use wordle_assistant::{
    EngineError,
    commands::{BenchmarkConfig, run_benchmark, run_play, solve_word},
    config::{DEFAULT_ALLOWED_ATTEMPTS, DEFAULT_WORD_LENGTH, DEFAULT_WORD_LIST, SessionConfig},
    core::{LetterSet, Word},
    output::{print_benchmark_result, print_outcome, print_round},
    solver::FilterKind,
    wordlists::load_from_file,
};

/// Exit status when feedback left no candidate words
const EXIT_NO_CANDIDATES: u8 = 2;

#[derive(Parser)]
#[command(
    name = "wordle_assistant",
    about = "Wordle assistant that narrows candidates from feedback and recommends guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORD_LIST)]
    wordlist: PathBuf,

    /// Word length
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Attempts allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_ALLOWED_ATTEMPTS)]
    attempts: usize,

    /// Letters considered when scoring (default: A-Z)
    #[arg(long, global = true)]
    alphabet: Option<String>,

    /// Elimination rule: positional (default, alias simple) or counting (alias strict)
    #[arg(short, long, global = true, default_value = "positional")]
    filter: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: enter your guesses and the game's feedback (default)
    Play,

    /// Solve a known answer using the assistant's own suggestions
    Solve {
        /// The answer to solve
        word: String,
    },

    /// Solve a random sample of dictionary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            match e.downcast_ref::<EngineError>() {
                Some(EngineError::NoCandidatesRemaining) => ExitCode::from(EXIT_NO_CANDIDATES),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = session_config(&cli)?;
    let Some(filter) = FilterKind::from_name(&cli.filter) else {
        bail!("unknown filter '{}': use positional or counting", cli.filter);
    };

    let dictionary = load_from_file(&config.word_list_path, config.word_length)
        .with_context(|| format!("failed to read word list {}", config.word_list_path.display()))?;
    if dictionary.is_empty() {
        bail!(
            "word list {} has no {}-letter words",
            config.word_list_path.display(),
            config.word_length
        );
    }

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config, &dictionary, filter),
        Commands::Solve { word } => run_solve_command(&config, &dictionary, filter, &word),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&config, &dictionary, filter, count, seed)
        }
    }
}

fn session_config(cli: &Cli) -> Result<SessionConfig> {
    let allowed_characters = match &cli.alphabet {
        Some(letters) => SessionConfig::parse_alphabet(letters)?,
        None => LetterSet::ALPHABET,
    };
    let config = SessionConfig {
        word_list_path: cli.wordlist.clone(),
        word_length: cli.length,
        allowed_attempts: cli.attempts,
        allowed_characters,
    };
    config.validate()?;
    Ok(config)
}

fn run_play_command(config: &SessionConfig, dictionary: &[Word], filter: FilterKind) -> Result<()> {
    let outcome = run_play(config, dictionary, filter)?;
    print_outcome(&outcome);
    Ok(())
}

fn run_solve_command(
    config: &SessionConfig,
    dictionary: &[Word],
    filter: FilterKind,
    word: &str,
) -> Result<()> {
    let answer = Word::with_length(word, config.word_length).context("invalid answer")?;
    let outcome = solve_word(config, dictionary, filter, &answer)?;

    for round in &outcome.rounds {
        print_round(round);
    }
    print_outcome(&outcome);
    Ok(())
}

fn run_benchmark_command(
    config: &SessionConfig,
    dictionary: &[Word],
    filter: FilterKind,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    println!("Running benchmark on {count} random words...");
    let options = BenchmarkConfig {
        count,
        seed,
        filter,
        show_progress: true,
    };
    let result = run_benchmark(config, dictionary, &options)?;
    print_benchmark_result(&result);
    Ok(())
}
