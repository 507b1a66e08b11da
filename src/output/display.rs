//! Display functions for command results

use super::formatters::{
    create_progress_bar, format_duration, guess_row, keyboard_rows, mark_summary, ordinal,
};
use crate::commands::CheckResult;
use crate::core::{Difficulty, Word};
use crate::round::{Round, RoundResult};
use crate::scoring::{POINTS_PER_LETTER, ScoreRecord};
use colored::Colorize;

/// Print every guess of a round as tile rows
pub fn print_board(round: &Round) {
    for (i, record) in round.history().iter().enumerate() {
        println!(
            "  {} {}",
            format!("{:>2}.", i + 1).bright_black(),
            guess_row(&record.guess, &record.feedback)
        );
    }
}

/// Print the keyboard state
pub fn print_keyboard(round: &Round) {
    println!();
    for row in keyboard_rows(round.keyboard()) {
        println!("  {row}");
    }
    println!();
}

/// Print the banner for a solved round
pub fn print_round_result(difficulty: Difficulty, target: &Word, result: &RoundResult) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        format!("    🎉  Solved: {}  🎉", target.text().to_uppercase())
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let max = (difficulty.word_length() as u64 * POINTS_PER_LETTER) as f64;
    println!(
        "\n  Score:    [{}] {}",
        create_progress_bar(f64::from(result.score), max, 30).green(),
        result.score.to_string().bright_yellow().bold()
    );
    println!(
        "  Guesses:  {}",
        result.guesses.to_string().bright_cyan().bold()
    );
    println!("  Time:     {}", format_duration(result.elapsed_secs));

    match result.rank {
        Some(rank) => println!(
            "\n  {}",
            format!("🏆 New {} place {difficulty} high score!", ordinal(rank))
                .bright_yellow()
                .bold()
        ),
        None => println!("\n  Not in the {difficulty} top {}.", crate::scoring::MAX_ENTRIES),
    }
    println!();
}

/// Print the ledger for the given tiers
pub fn print_ledger(tiers: &[(Difficulty, Vec<ScoreRecord>)]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "HIGH SCORES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for (difficulty, entries) in tiers {
        println!(
            "\n  {} ({} letters)",
            difficulty.name().to_uppercase().bright_yellow().bold(),
            difficulty.word_length()
        );
        if entries.is_empty() {
            println!("    {}", "no scores yet".bright_black());
            continue;
        }
        for (i, record) in entries.iter().enumerate() {
            println!(
                "    {:>4}  {:>5}  {:>2} guesses  {:>6}  {}",
                ordinal(i + 1),
                record.score.to_string().bright_white().bold(),
                record.guesses,
                format_duration(record.elapsed_secs),
                record.date.format("%Y-%m-%d %H:%M").to_string().bright_black()
            );
        }
    }
    println!();
}

/// Print the result of checking one guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n  {}  {}",
        guess_row(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );
    println!("  {}", mark_summary(&result.feedback).bright_black());
    if result.feedback.is_perfect() {
        println!("  {}", "✅ Exact match!".green().bold());
    }
    println!();
}
