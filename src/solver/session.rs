//! Multi-round session state machine
//!
//! A session owns the candidates, the allowed letters and the attempt counter.
//! Each round recommends a guess, takes the played guess and its feedback
//! from a [`Player`], and either finishes (all correct) or narrows the state.
//!
//! ```text
//! Ongoing ──all correct──▶ Won
//!    │ └──budget spent───▶ Exhausted
//!    └──otherwise──▶ Ongoing (attempt + 1)
//! ```

use super::filter::{CandidateFilter, RepeatedLetters};
use super::scorer::{self, ScoredWord};
use crate::config::SessionConfig;
use crate::core::{Feedback, LetterSet, Word};
use crate::error::EngineError;
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fmt;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Ongoing,
    Won,
    Exhausted,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => write!(f, "ongoing"),
            Self::Won => write!(f, "won"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// What happened in one round
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub attempt: usize,
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub warning: Option<RepeatedLetters>,
    pub status: SessionStatus,
}

/// Final state of a session that ran to completion
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// `Won` or `Exhausted`
    pub status: SessionStatus,
    /// Attempts played
    pub attempts: usize,
    pub rounds: Vec<RoundReport>,
}

impl SessionOutcome {
    /// The winning word, if the session was won
    #[must_use]
    pub fn answer(&self) -> Option<&Word> {
        match self.status {
            SessionStatus::Won => self.rounds.last().map(|round| &round.guess),
            _ => None,
        }
    }
}

/// External collaborator that plays the guesses and reports feedback
///
/// Implementations own any retry-until-valid prompting: the session takes
/// the returned guess and feedback as already validated.
pub trait Player {
    /// Surface the recommended guess for this attempt
    ///
    /// # Errors
    /// Any error ends the session.
    fn suggest(
        &mut self,
        attempt: usize,
        recommendation: &[ScoredWord<'_>],
        remaining: &[Word],
    ) -> Result<(), EngineError>;

    /// The word actually played this attempt
    ///
    /// # Errors
    /// Any error ends the session.
    fn guess(&mut self, attempt: usize) -> Result<Word, EngineError>;

    /// Feedback the game gave for `guess`
    ///
    /// # Errors
    /// Any error ends the session.
    fn feedback(&mut self, guess: &Word) -> Result<Feedback, EngineError>;

    /// Called after every round
    ///
    /// # Errors
    /// Any error ends the session.
    fn round_complete(&mut self, _report: &RoundReport) -> Result<(), EngineError> {
        Ok(())
    }
}

/// Number of ranked suggestions handed to the player each round
const SUGGESTIONS: usize = 5;

/// A single solve from a full dictionary down to a win or an exhausted budget
pub struct Session<F: CandidateFilter> {
    filter: F,
    word_length: usize,
    allowed_attempts: usize,
    attempt: usize,
    candidates: Vec<Word>,
    allowed: LetterSet,
    status: SessionStatus,
}

impl<F: CandidateFilter> Session<F> {
    /// Start a session over `dictionary`
    ///
    /// Words of the wrong length and repeated entries are dropped; the
    /// remaining order is kept for reproducible tie-breaks.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidConfig` if the configuration is invalid.
    pub fn new(
        config: &SessionConfig,
        dictionary: impl IntoIterator<Item = Word>,
        filter: F,
    ) -> Result<Self, EngineError> {
        config.validate()?;

        let mut seen = FxHashSet::default();
        let candidates: Vec<Word> = dictionary
            .into_iter()
            .filter(|w| w.len() == config.word_length)
            .filter(|w| seen.insert(w.clone()))
            .collect();

        info!(
            "session started: {} candidates, {} letters, {} attempts",
            candidates.len(),
            config.word_length,
            config.allowed_attempts
        );

        Ok(Self {
            filter,
            word_length: config.word_length,
            allowed_attempts: config.allowed_attempts,
            attempt: 1,
            candidates,
            allowed: config.allowed_characters,
            status: SessionStatus::Ongoing,
        })
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Current attempt, starting at 1
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn allowed_attempts(&self) -> usize {
        self.allowed_attempts
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn allowed(&self) -> LetterSet {
        self.allowed
    }

    /// Recommended next guess
    ///
    /// # Errors
    /// Returns `EngineError::NoCandidatesRemaining` once feedback has
    /// eliminated every word.
    pub fn recommend(&self) -> Result<&Word, EngineError> {
        scorer::recommend(&self.candidates, self.allowed)
    }

    /// The best `limit` guesses, best first
    #[must_use]
    pub fn rank(&self, limit: usize) -> Vec<ScoredWord<'_>> {
        scorer::rank(&self.candidates, self.allowed, limit)
    }

    /// Apply one round of validated feedback
    ///
    /// On error the session state is left untouched.
    ///
    /// # Errors
    /// - `EngineError::SessionOver` if the session already finished
    /// - `EngineError::GuessLengthMismatch` for a guess of the wrong length
    /// - `EngineError::InvalidFeedback` for feedback of the wrong length
    pub fn submit(&mut self, guess: &Word, feedback: &Feedback) -> Result<RoundReport, EngineError> {
        if self.status != SessionStatus::Ongoing {
            return Err(EngineError::SessionOver(self.status));
        }
        if guess.len() != self.word_length {
            return Err(EngineError::GuessLengthMismatch {
                expected: self.word_length,
                actual: guess.len(),
            });
        }
        if feedback.len() != self.word_length {
            return Err(EngineError::InvalidFeedback {
                expected: self.word_length,
                actual: feedback.len(),
            });
        }

        let attempt = self.attempt;
        let candidates_before = self.candidates.len();

        let warning = if feedback.is_all_correct() {
            self.status = SessionStatus::Won;
            None
        } else {
            let narrowed = self
                .filter
                .narrow(&self.candidates, self.allowed, guess, feedback)?;
            self.candidates = narrowed.candidates;
            self.allowed = narrowed.allowed;

            if attempt >= self.allowed_attempts {
                self.status = SessionStatus::Exhausted;
            } else {
                self.attempt += 1;
            }
            narrowed.warning
        };

        debug!(
            "attempt {attempt}: {guess} {feedback} -> {} candidates, {}",
            self.candidates.len(),
            self.status
        );

        Ok(RoundReport {
            attempt,
            guess: guess.clone(),
            feedback: feedback.clone(),
            candidates_before,
            candidates_after: self.candidates.len(),
            warning,
            status: self.status,
        })
    }

    /// Decode raw feedback, then apply the round
    ///
    /// # Errors
    /// The codec errors, then anything [`Session::submit`] returns. Nothing
    /// is mutated on error.
    pub fn submit_raw(&mut self, guess: &Word, feedback: &str) -> Result<RoundReport, EngineError> {
        let feedback = Feedback::parse(feedback, self.word_length)?;
        self.submit(guess, &feedback)
    }

    /// Drive rounds with `player` until the session is won or exhausted
    ///
    /// Consumes the session: a finished session has nothing left to do.
    ///
    /// # Errors
    /// Returns `EngineError::NoCandidatesRemaining` when no recommendation is
    /// possible, and passes through any error from the player or the filter.
    pub fn run<P: Player>(mut self, player: &mut P) -> Result<SessionOutcome, EngineError> {
        let mut rounds = Vec::new();

        while self.status == SessionStatus::Ongoing {
            // Surfaces NoCandidatesRemaining before asking for a guess
            self.recommend()?;
            {
                let ranked = self.rank(SUGGESTIONS);
                player.suggest(self.attempt, &ranked, &self.candidates)?;
            }

            let guess = player.guess(self.attempt)?;
            let feedback = player.feedback(&guess)?;
            let report = self.submit(&guess, &feedback)?;

            player.round_complete(&report)?;
            rounds.push(report);
        }

        info!("session {} after {} attempts", self.status, self.attempt);

        Ok(SessionOutcome {
            status: self.status,
            attempts: self.attempt,
            rounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::FilterKind;
    use std::collections::VecDeque;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn session(list: &[&str]) -> Session<FilterKind> {
        Session::new(&SessionConfig::default(), words(list), FilterKind::Positional).unwrap()
    }

    /// Plays scripted guesses and feedback
    struct Scripted {
        rounds: VecDeque<(&'static str, &'static str)>,
        suggestions: Vec<String>,
    }

    impl Scripted {
        fn new(rounds: &[(&'static str, &'static str)]) -> Self {
            Self {
                rounds: rounds.iter().copied().collect(),
                suggestions: Vec::new(),
            }
        }
    }

    impl Player for Scripted {
        fn suggest(
            &mut self,
            _attempt: usize,
            recommendation: &[ScoredWord<'_>],
            _remaining: &[Word],
        ) -> Result<(), EngineError> {
            self.suggestions.push(recommendation[0].word.text().to_string());
            Ok(())
        }

        fn guess(&mut self, _attempt: usize) -> Result<Word, EngineError> {
            let (guess, _) = self.rounds.front().expect("script ran out");
            Ok(Word::new(*guess)?)
        }

        fn feedback(&mut self, _guess: &Word) -> Result<Feedback, EngineError> {
            let (_, feedback) = self.rounds.pop_front().expect("script ran out");
            Feedback::parse(feedback, 5)
        }
    }

    #[test]
    fn starts_ongoing_at_attempt_one() {
        let s = session(&["CRANE", "SLATE"]);
        assert_eq!(s.status(), SessionStatus::Ongoing);
        assert_eq!(s.attempt(), 1);
        assert_eq!(s.candidates().len(), 2);
        assert_eq!(s.allowed(), LetterSet::ALPHABET);
    }

    #[test]
    fn new_drops_wrong_lengths_and_duplicates() {
        let s = session(&["CRANE", "CAT", "crane", "SLATE", "PLANETS"]);
        let texts: Vec<&str> = s.candidates().iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE"]);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = SessionConfig {
            allowed_attempts: 0,
            ..SessionConfig::default()
        };
        assert!(Session::new(&config, words(&["CRANE"]), FilterKind::Positional).is_err());
    }

    #[test]
    fn all_correct_wins_immediately() {
        let mut s = session(&["CRANE", "SLATE"]);
        let report = s.submit_raw(&Word::new("SLATE").unwrap(), "GGGGG").unwrap();

        assert_eq!(report.status, SessionStatus::Won);
        assert_eq!(s.status(), SessionStatus::Won);
        assert_eq!(s.attempt(), 1);
        // Winning does not narrow
        assert_eq!(s.candidates().len(), 2);
    }

    #[test]
    fn no_rounds_after_finishing() {
        let mut s = session(&["CRANE"]);
        let guess = Word::new("CRANE").unwrap();
        s.submit_raw(&guess, "GGGGG").unwrap();

        assert!(matches!(
            s.submit_raw(&guess, "?????"),
            Err(EngineError::SessionOver(SessionStatus::Won))
        ));
    }

    #[test]
    fn exhausts_after_budget() {
        let config = SessionConfig {
            allowed_attempts: 2,
            ..SessionConfig::default()
        };
        let mut s = Session::new(&config, words(&["MOIST", "BUMPY", "FJORD"]), FilterKind::Positional).unwrap();
        let guess = Word::new("CRANE").unwrap();

        let first = s.submit_raw(&guess, "?????").unwrap();
        assert_eq!(first.status, SessionStatus::Ongoing);
        assert_eq!(s.attempt(), 2);

        let second = s.submit_raw(&guess, "?????").unwrap();
        assert_eq!(second.attempt, 2);
        assert_eq!(second.status, SessionStatus::Exhausted);
        assert_eq!(s.status(), SessionStatus::Exhausted);
    }

    #[test]
    fn invalid_feedback_leaves_state_untouched() {
        let mut s = session(&["CRANE", "SLATE", "MOIST"]);
        let guess = Word::new("CRANE").unwrap();

        assert!(matches!(
            s.submit_raw(&guess, "GYX??"),
            Err(EngineError::UnknownFeedbackSymbol {
                symbol: 'X',
                position: 2
            })
        ));
        assert!(matches!(
            s.submit_raw(&guess, "GY?"),
            Err(EngineError::InvalidFeedback { .. })
        ));
        assert_eq!(s.candidates().len(), 3);
        assert_eq!(s.allowed(), LetterSet::ALPHABET);
        assert_eq!(s.attempt(), 1);
    }

    #[test]
    fn wrong_guess_length_is_rejected() {
        let mut s = session(&["CRANE"]);
        let guess = Word::new("CAT").unwrap();
        let feedback = Feedback::parse("?????", 5).unwrap();
        assert!(matches!(
            s.submit(&guess, &feedback),
            Err(EngineError::GuessLengthMismatch {
                expected: 5,
                actual: 3
            })
        ));
    }

    #[test]
    fn candidates_never_grow_across_rounds() {
        let mut s = session(&["CRANE", "SLATE", "TRACE", "GRAPE", "MOIST", "STARE"]);
        let answer = Word::new("STARE").unwrap();
        let mut previous: Vec<Word> = s.candidates().to_vec();

        while s.status() == SessionStatus::Ongoing {
            let guess = s.recommend().unwrap().clone();
            let feedback = Feedback::calculate(&guess, &answer);
            s.submit(&guess, &feedback).unwrap();

            assert!(s.candidates().iter().all(|w| previous.contains(w)));
            previous = s.candidates().to_vec();
        }
        assert_eq!(s.status(), SessionStatus::Won);
    }

    #[test]
    fn run_plays_until_won() {
        let s = session(&["CRANE", "TRACE", "GRAPE"]);
        let mut player = Scripted::new(&[("CRANE", "YGG?G"), ("TRACE", "GGGGG")]);

        let outcome = s.run(&mut player).unwrap();

        assert_eq!(outcome.status, SessionStatus::Won);
        assert_eq!(outcome.attempts, 2);
        assert_eq!(outcome.answer().map(Word::text), Some("TRACE"));
        assert_eq!(outcome.rounds[0].candidates_after, 1);
        assert_eq!(player.suggestions.len(), 2);
        assert_eq!(player.suggestions[1], "TRACE");
    }

    #[test]
    fn run_surfaces_no_candidates() {
        let s = session(&["CRANE", "SLATE", "TRACE", "GRAPE"]);
        let mut player = Scripted::new(&[("CRANE", "?????")]);

        assert!(matches!(
            s.run(&mut player),
            Err(EngineError::NoCandidatesRemaining)
        ));
        assert_eq!(player.suggestions.len(), 1);
    }

    #[test]
    fn run_reports_exhaustion() {
        let config = SessionConfig {
            allowed_attempts: 1,
            ..SessionConfig::default()
        };
        let s = Session::new(&config, words(&["MOIST", "BUMPY"]), FilterKind::Positional).unwrap();
        let mut player = Scripted::new(&[("CRANE", "?????")]);

        let outcome = s.run(&mut player).unwrap();
        assert_eq!(outcome.status, SessionStatus::Exhausted);
        assert!(outcome.answer().is_none());
    }
}
