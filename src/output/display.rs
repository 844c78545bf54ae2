//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::BenchmarkResult;
use crate::solver::{RoundReport, SessionOutcome, SessionStatus};
use colored::Colorize;

/// Print one finished round
pub fn print_round(report: &RoundReport) {
    println!(
        "\nAttempt {}: {} {}",
        report.attempt,
        report.guess,
        report.feedback.to_emoji()
    );
    println!(
        "  Candidates: {} → {}",
        report.candidates_before, report.candidates_after
    );
    if let Some(warning) = report.warning {
        println!("  {} {warning}", "⚠".yellow());
    }
}

/// Print how a session ended
pub fn print_outcome(outcome: &SessionOutcome) {
    println!();
    match outcome.status {
        SessionStatus::Won => {
            let answer = outcome
                .answer()
                .map(ToString::to_string)
                .unwrap_or_default();
            println!(
                "{}",
                format!(
                    "✅ Solved {answer} in {} {}!",
                    outcome.attempts,
                    if outcome.attempts == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        SessionStatus::Exhausted => {
            println!(
                "{}",
                format!("❌ No solution within {} guesses", outcome.attempts)
                    .yellow()
                    .bold()
            );
        }
        SessionStatus::Ongoing => {}
    }

    if !outcome.rounds.is_empty() {
        println!("\n  Guess history:");
        for round in &outcome.rounds {
            println!(
                "    {}. {} {}",
                round.attempt.to_string().bright_black(),
                round.guess.text().bright_white().bold(),
                round.feedback.to_emoji()
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let pct = |n: usize| {
        if result.total_words == 0 {
            0.0
        } else {
            n as f64 / result.total_words as f64 * 100.0
        }
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Won:              {} {}",
        result.won,
        format!("({:.1}%)", pct(result.won)).green()
    );
    println!(
        "   Exhausted:        {} {}",
        result.exhausted,
        format!("({:.1}%)", pct(result.exhausted)).yellow()
    );
    println!(
        "   No candidates:    {} {}",
        result.no_candidates,
        format!("({:.1}%)", pct(result.no_candidates)).red()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = pct(count);
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
