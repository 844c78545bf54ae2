//! Formatting utilities for terminal output

use crate::core::Word;
use crate::solver::ScoredWord;
use colored::Colorize;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Recommendation block: the best guess, runners-up and, when few remain,
/// the remaining candidates
#[must_use]
pub fn format_suggestions(attempt: usize, ranked: &[ScoredWord<'_>], remaining: &[Word]) -> String {
    let rule = "─".repeat(60);
    let mut lines = vec![
        rule.clone(),
        format!("Attempt {attempt}: {} candidates remaining", remaining.len()),
        rule,
    ];

    if let Some((best, others)) = ranked.split_first() {
        lines.push(format!(
            "\n📊 Suggested guess: {} (score {})",
            best.word.text().bright_yellow().bold(),
            best.score
        ));
        if !others.is_empty() {
            let alternatives: Vec<&str> = others.iter().map(|s| s.word.text()).collect();
            lines.push(format!("   Alternatives:    {}", alternatives.join(", ")));
        }

        if remaining.len() <= 10 {
            lines.push("\nRemaining candidates:".to_string());
            lines.extend(remaining.iter().map(|candidate| format!("  • {candidate}")));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Legend for the feedback symbols
#[must_use]
pub fn feedback_legend() -> String {
    [
        "Type the color-coded reply from the game:",
        "  G for Green  (right letter, right position)",
        "  Y for Yellow (right letter, wrong position)",
        "  ? for Gray   (letter not in the word)",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn suggestions_list_best_and_remaining() {
        let words: Vec<Word> = ["TRACE", "CRANE"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let ranked = [
            ScoredWord {
                word: &words[0],
                score: 10,
            },
            ScoredWord {
                word: &words[1],
                score: 12,
            },
        ];

        let text = format_suggestions(3, &ranked, &words);
        assert!(text.contains("Attempt 3: 2 candidates remaining"));
        assert!(text.contains("TRACE"));
        assert!(text.contains("Alternatives:    CRANE"));
        assert!(text.contains("• CRANE"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn suggestions_without_ranking_show_only_header() {
        let text = format_suggestions(1, &[], &[]);
        assert!(text.contains("Attempt 1: 0 candidates remaining"));
        assert!(!text.contains("Suggested guess"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn legend_names_all_symbols() {
        let legend = feedback_legend();
        assert!(legend.contains("G for Green"));
        assert!(legend.contains("Y for Yellow"));
        assert!(legend.contains("? for Gray"));
    }
}
