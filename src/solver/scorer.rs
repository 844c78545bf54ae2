//! Letter-frequency scoring of candidates
//!
//! Each allowed letter gets a weight `|containing - not_containing|` over the
//! current candidates. A word scores the sum of its letters' weights (every
//! occurrence counts) plus a penalty per repeated letter, and the lowest score
//! wins. Letters outside the allowed set weigh zero.

use crate::core::{LetterSet, Word};
use crate::error::EngineError;
use log::debug;
use rayon::prelude::*;

/// Penalty added per letter occurrence beyond the first of each letter
pub const REPEAT_PENALTY: u64 = 1_000_000;

/// Discriminative weight of each letter `A`-`Z`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterWeights([u64; 26]);

impl LetterWeights {
    /// Compute weights for the allowed letters over `candidates`
    ///
    /// # Examples
    /// ```
    /// use wordle_assistant::core::{LetterSet, Word};
    /// use wordle_assistant::solver::scorer::LetterWeights;
    ///
    /// let candidates = vec![Word::new("crane").unwrap(), Word::new("moist").unwrap()];
    /// let weights = LetterWeights::compute(&candidates, LetterSet::ALPHABET);
    ///
    /// assert_eq!(weights.get(b'C'), 0); // one of two words: even split
    /// assert_eq!(weights.get(b'Z'), 2); // in neither word
    /// ```
    #[must_use]
    pub fn compute(candidates: &[Word], allowed: LetterSet) -> Self {
        let letters: Vec<u8> = allowed.iter().collect();
        let total = candidates.len();

        let computed: Vec<(u8, u64)> = letters
            .par_iter()
            .map(|&letter| {
                let containing = candidates.iter().filter(|w| w.has_letter(letter)).count();
                let weight = containing.abs_diff(total - containing) as u64;
                (letter, weight)
            })
            .collect();

        let mut weights = [0u64; 26];
        for (letter, weight) in computed {
            weights[usize::from(letter - b'A')] = weight;
        }
        Self(weights)
    }

    /// Weight of a letter; zero for letters that were not allowed
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> u64 {
        if letter.is_ascii_uppercase() {
            self.0[usize::from(letter - b'A')]
        } else {
            0
        }
    }

    /// Total score of a word: letter weights plus the repeat penalty
    #[must_use]
    pub fn score(&self, word: &Word) -> u64 {
        let raw: u64 = word.chars().iter().map(|&c| self.get(c)).sum();
        raw + REPEAT_PENALTY * word.excess_repeats() as u64
    }
}

/// A candidate with its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: u64,
}

/// Recommend the next guess: the lowest-scoring candidate
///
/// Ties go to the candidate that comes first in `candidates`, so the result
/// is reproducible. The result is always a member of `candidates`.
///
/// # Errors
/// Returns `EngineError::NoCandidatesRemaining` if `candidates` is empty.
///
/// # Examples
/// ```
/// use wordle_assistant::core::{LetterSet, Word};
/// use wordle_assistant::solver::scorer::recommend;
///
/// let candidates = vec![
///     Word::new("speed").unwrap(),
///     Word::new("spied").unwrap(),
/// ];
/// let best = recommend(&candidates, LetterSet::ALPHABET).unwrap();
/// assert_eq!(best.text(), "SPIED"); // SPEED repeats E
///
/// assert!(recommend(&[], LetterSet::ALPHABET).is_err());
/// ```
pub fn recommend(candidates: &[Word], allowed: LetterSet) -> Result<&Word, EngineError> {
    let weights = LetterWeights::compute(candidates, allowed);

    let (score, index) = candidates
        .par_iter()
        .enumerate()
        .map(|(i, word)| (weights.score(word), i))
        .min()
        .ok_or(EngineError::NoCandidatesRemaining)?;

    let best = &candidates[index];
    debug!(
        "recommend {best} (score {score}) from {} candidates",
        candidates.len()
    );
    Ok(best)
}

/// The `limit` best candidates in recommendation order
///
/// The first entry, if any, is the word [`recommend`] returns.
#[must_use]
pub fn rank(candidates: &[Word], allowed: LetterSet, limit: usize) -> Vec<ScoredWord<'_>> {
    let weights = LetterWeights::compute(candidates, allowed);

    let mut scored: Vec<(u64, usize)> = candidates
        .par_iter()
        .enumerate()
        .map(|(i, word)| (weights.score(word), i))
        .collect();
    scored.sort_unstable();
    scored.truncate(limit);

    scored
        .into_iter()
        .map(|(score, i)| ScoredWord {
            word: &candidates[i],
            score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn weights_measure_split_imbalance() {
        let candidates = words(&["CRANE", "SLATE", "TRACE", "GRAPE"]);
        let weights = LetterWeights::compute(&candidates, LetterSet::ALPHABET);

        // A and E are in all four: 4 - 0
        assert_eq!(weights.get(b'A'), 4);
        assert_eq!(weights.get(b'E'), 4);
        // R is in three: 3 - 1
        assert_eq!(weights.get(b'R'), 2);
        // C and T are in two: 2 - 2
        assert_eq!(weights.get(b'C'), 0);
        assert_eq!(weights.get(b'T'), 0);
        // Z is in none: 0 - 4
        assert_eq!(weights.get(b'Z'), 4);
    }

    #[test]
    fn disallowed_letters_weigh_zero() {
        let candidates = words(&["CRANE", "SLATE"]);
        let allowed = LetterSet::from_letters("CRN");
        let weights = LetterWeights::compute(&candidates, allowed);

        assert_eq!(weights.get(b'C'), 0);
        assert_eq!(weights.get(b'A'), 0);
        assert_eq!(weights.get(b'E'), 0);
        assert_eq!(weights.get(b'?'), 0);
    }

    #[test]
    fn score_sums_every_occurrence_and_penalizes_repeats() {
        let candidates = words(&["SPEED", "CRANE"]);
        let weights = LetterWeights::compute(&candidates, LetterSet::ALPHABET);
        // Every letter of SPEED is in exactly one of two words: weight 0 except E (in both: 2)
        let speed = Word::new("SPEED").unwrap();
        assert_eq!(weights.score(&speed), 2 + 2 + REPEAT_PENALTY);
    }

    #[test]
    fn recommends_lowest_score() {
        let candidates = words(&["CRANE", "SLATE", "TRACE", "GRAPE"]);
        // CRANE 0+2+4+2+4=12, SLATE 2+2+4+0+4=12, TRACE 0+2+4+0+4=10, GRAPE 2+2+4+2+4=14
        let best = recommend(&candidates, LetterSet::ALPHABET).unwrap();
        assert_eq!(best.text(), "TRACE");
    }

    #[test]
    fn ties_go_to_first_candidate() {
        let candidates = words(&["ABCDE", "FGHIJ"]);
        // Every letter is in exactly one word: all weights are 0
        assert_eq!(recommend(&candidates, LetterSet::ALPHABET).unwrap().text(), "ABCDE");

        let reversed = words(&["FGHIJ", "ABCDE"]);
        assert_eq!(recommend(&reversed, LetterSet::ALPHABET).unwrap().text(), "FGHIJ");
    }

    #[test]
    fn repeated_letters_lose_to_distinct_letters() {
        let candidates = words(&["EERIE", "SPEED", "STEAD"]);
        assert_eq!(recommend(&candidates, LetterSet::ALPHABET).unwrap().text(), "STEAD");
    }

    #[test]
    fn only_repeating_candidates_still_recommend() {
        let candidates = words(&["EERIE", "SPEED"]);
        // SPEED has one excess repeat, EERIE two
        assert_eq!(recommend(&candidates, LetterSet::ALPHABET).unwrap().text(), "SPEED");
    }

    #[test]
    fn recommendation_is_a_member() {
        let candidates = words(&["MOIST", "BUMPY", "FJORD", "CRANE", "SLATE"]);
        let best = recommend(&candidates, LetterSet::from_letters("ABCDEFMOST")).unwrap();
        assert!(candidates.contains(best));
    }

    #[test]
    fn empty_candidates_is_an_error() {
        assert!(matches!(
            recommend(&[], LetterSet::ALPHABET),
            Err(EngineError::NoCandidatesRemaining)
        ));
        assert!(rank(&[], LetterSet::ALPHABET, 5).is_empty());
    }

    #[test]
    fn rank_orders_by_score_then_position() {
        let candidates = words(&["CRANE", "SLATE", "TRACE", "GRAPE"]);
        let ranked = rank(&candidates, LetterSet::ALPHABET, 3);
        let texts: Vec<&str> = ranked.iter().map(|s| s.word.text()).collect();
        assert_eq!(texts, ["TRACE", "CRANE", "SLATE"]);
        assert_eq!(ranked[0].score, 10);
        assert_eq!(
            ranked[0].word,
            recommend(&candidates, LetterSet::ALPHABET).unwrap()
        );
    }
}
