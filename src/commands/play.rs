//! Interactive text mode
//!
//! Prompts for the word played and the game's reply each round, re-prompting
//! until the input is valid, and prints a recommendation before every guess.

use crate::config::SessionConfig;
use crate::core::{Feedback, Word};
use crate::error::EngineError;
use crate::output::formatters::{feedback_legend, format_suggestions};
use crate::solver::{CandidateFilter, Player, RoundReport, ScoredWord, Session, SessionOutcome};
use colored::Colorize;
use rustc_hash::FxHashSet;
use std::io::{self, BufRead, Write};

/// Player backed by line-based prompts
///
/// An empty guess line plays the recommended word.
pub struct TerminalPlayer<R, W> {
    input: R,
    output: W,
    dictionary: FxHashSet<Word>,
    word_length: usize,
    recommended: Option<Word>,
    legend_shown: bool,
}

impl<R: BufRead, W: Write> TerminalPlayer<R, W> {
    /// Create a player that accepts guesses from `dictionary` only
    pub fn new(input: R, output: W, dictionary: &[Word], word_length: usize) -> Self {
        Self {
            input,
            output,
            dictionary: dictionary.iter().cloned().collect(),
            word_length,
            recommended: None,
            legend_shown: false,
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, EngineError> {
        write!(self.output, "{prompt}> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, text: &str) -> Result<(), EngineError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Player for TerminalPlayer<R, W> {
    fn suggest(
        &mut self,
        attempt: usize,
        recommendation: &[ScoredWord<'_>],
        remaining: &[Word],
    ) -> Result<(), EngineError> {
        self.recommended = recommendation.first().map(|s| s.word.clone());
        write!(
            self.output,
            "{}",
            format_suggestions(attempt, recommendation, remaining)
        )?;
        Ok(())
    }

    fn guess(&mut self, _attempt: usize) -> Result<Word, EngineError> {
        loop {
            let line = self.prompt("Input the word you entered")?;
            if line.is_empty()
                && let Some(word) = self.recommended.clone()
            {
                return Ok(word);
            }

            match Word::with_length(line.as_str(), self.word_length) {
                Ok(word) if self.dictionary.contains(&word) => return Ok(word),
                Ok(word) => self.say(&format!("❌ {word} is not in the word list"))?,
                Err(e) => self.say(&format!("❌ {e}"))?,
            }
        }
    }

    fn feedback(&mut self, _guess: &Word) -> Result<Feedback, EngineError> {
        if !self.legend_shown {
            self.say(&feedback_legend())?;
            self.legend_shown = true;
        }

        loop {
            let line = self.prompt("Response from the game")?;
            match Feedback::parse(&line, self.word_length) {
                Ok(feedback) => return Ok(feedback),
                Err(e) => self.say(&format!("❌ Error - invalid answer {line}: {e}"))?,
            }
        }
    }

    fn round_complete(&mut self, report: &RoundReport) -> Result<(), EngineError> {
        writeln!(
            self.output,
            "  {} {} → {} candidates",
            report.feedback.to_emoji(),
            report.candidates_before,
            report.candidates_after
        )?;
        if let Some(warning) = report.warning {
            writeln!(self.output, "  {} {warning}", "⚠".yellow())?;
        }
        Ok(())
    }
}

/// Run an interactive session on stdin/stdout
///
/// # Errors
///
/// Returns `EngineError::NoCandidatesRemaining` if the feedback eliminates
/// every word, or an I/O error if the terminal cannot be read.
pub fn run_play<F: CandidateFilter>(
    config: &SessionConfig,
    dictionary: &[Word],
    filter: F,
) -> Result<SessionOutcome, EngineError> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Assistant - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("I'll suggest a guess each round from the remaining candidates.");
    println!("Press enter to play the suggestion, or type the word you played.\n");

    let session = Session::new(config, dictionary.iter().cloned(), filter)?;
    let stdin = io::stdin();
    let mut player = TerminalPlayer::new(stdin.lock(), io::stdout(), dictionary, config.word_length);
    session.run(&mut player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FilterKind, SessionStatus};
    use crate::wordlists::words_from_slice;
    use std::io::Cursor;

    fn play(dictionary: &[&str], script: &str) -> (Result<SessionOutcome, EngineError>, String) {
        let words = words_from_slice(dictionary, 5);
        let session = Session::new(&SessionConfig::default(), words.iter().cloned(), FilterKind::Positional).unwrap();
        let mut output = Vec::new();
        let result = {
            let mut player = TerminalPlayer::new(Cursor::new(script.to_string()), &mut output, &words, 5);
            session.run(&mut player)
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn plays_to_a_win() {
        let (result, output) = play(&["crane", "trace", "grape"], "crane\nYGG?G\ntrace\nGGGGG\n");
        let outcome = result.unwrap();

        assert_eq!(outcome.status, SessionStatus::Won);
        assert_eq!(outcome.answer().map(Word::text), Some("TRACE"));
        assert!(output.contains("G for Green"));
    }

    #[test]
    fn reprompts_until_guess_is_valid() {
        let (result, output) = play(&["crane", "slate"], "cat\nzzzzz\nslate\nGGGGG\n");

        assert_eq!(result.unwrap().answer().map(Word::text), Some("SLATE"));
        assert!(output.contains("must be exactly 5 letters"));
        assert!(output.contains("ZZZZZ is not in the word list"));
    }

    #[test]
    fn reprompts_until_feedback_is_valid() {
        let (result, output) = play(&["crane", "slate"], "crane\nGYX??\nGG\nGGGGG\n");

        assert_eq!(result.unwrap().status, SessionStatus::Won);
        assert!(output.contains("unknown feedback symbol 'X' at position 2"));
        assert!(output.contains("expected 5 symbols, got 2"));
    }

    #[test]
    fn empty_guess_plays_recommendation() {
        let (result, _) = play(&["crane"], "\nGGGGG\n");
        assert_eq!(result.unwrap().answer().map(Word::text), Some("CRANE"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let (result, _) = play(&["crane", "slate"], "crane\n");
        assert!(matches!(result, Err(EngineError::Input(_))));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn output_failure_ends_the_session() {
        let words = words_from_slice(&["crane", "slate"], 5);
        let session = Session::new(&SessionConfig::default(), words.iter().cloned(), FilterKind::Positional).unwrap();
        let mut player = TerminalPlayer::new(Cursor::new("crane\nGGGGG\n".to_string()), BrokenPipe, &words, 5);

        let result = session.run(&mut player);
        assert!(matches!(
            result,
            Err(EngineError::Input(ref e)) if e.kind() == io::ErrorKind::BrokenPipe
        ));
    }

    #[test]
    fn round_summary_reports_warning() {
        let words = words_from_slice(&["lemon", "alloy"], 5);
        let mut output = Vec::new();
        let mut player = TerminalPlayer::new(Cursor::new(String::new()), &mut output, &words, 5);
        let report = RoundReport {
            attempt: 1,
            guess: Word::new("alloy").unwrap(),
            feedback: Feedback::parse("?Y?G?", 5).unwrap(),
            candidates_before: 2,
            candidates_after: 0,
            warning: Some(crate::solver::RepeatedLetters(crate::core::LetterSet::from_letters("L"))),
            status: SessionStatus::Ongoing,
        };

        player.round_complete(&report).unwrap();
        drop(player);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("2 → 0 candidates"));
        assert!(text.contains("guess repeats"));
    }

    #[test]
    fn contradictory_feedback_surfaces_no_candidates() {
        let (result, _) = play(&["crane", "slate", "trace", "grape"], "crane\n?????\n");
        assert!(matches!(result, Err(EngineError::NoCandidatesRemaining)));
    }
}
