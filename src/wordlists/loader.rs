//! Word list loading utilities
//!
//! Keeps entries of exactly the requested length that consist only of
//! letters, uppercases them and drops repeats, first occurrence wins.
//! Proper nouns and lowercase variants of the same word collapse into one.

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary file with one word per line
///
/// Entries that are not `word_length` letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_assistant::wordlists::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/american-english", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content, word_length);
    debug!(
        "loaded {} {word_length}-letter words from {}",
        words.len(),
        path.display()
    );
    Ok(words)
}

/// Extract the usable words from word list text
#[must_use]
pub fn parse_word_list(content: &str, word_length: usize) -> Vec<Word> {
    words_from_lines(content.lines(), word_length)
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_assistant::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["crane", "Slate", "cat", "CRANE"], 5);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "SLATE");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    words_from_lines(slice.iter().copied(), word_length)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>, word_length: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    lines
        .map(str::trim)
        .filter_map(|line| Word::with_length(line, word_length).ok())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
