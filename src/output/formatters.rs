//! Formatting utilities for terminal output

use crate::core::{Feedback, Keyboard, LetterStatus, Mark, Word, keyboard::ROWS};
use crate::round::Round;
use colored::{ColoredString, Colorize};
use std::fmt::Write;

/// A letter rendered as a colored tile, e.g. ` A ` on green
#[must_use]
pub fn tile(letter: u8, status: LetterStatus) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match status {
        LetterStatus::Exact => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
        LetterStatus::Unknown => text.normal(),
    }
}

/// A guess rendered as a row of colored tiles
#[must_use]
pub fn guess_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| tile(letter, mark.into()).to_string())
        .collect()
}

/// The keyboard as three QWERTY rows, indented like a real keyboard
#[must_use]
pub fn keyboard_rows(keyboard: &Keyboard) -> Vec<String> {
    ROWS.iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| tile(letter, keyboard.status(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Format seconds as `m:ss`
#[must_use]
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Ordinal for a ledger rank: 1st, 2nd, 3rd, 4th...
#[must_use]
pub fn ordinal(rank: usize) -> String {
    let suffix = match (rank % 10, rank % 100) {
        (1, r) if r != 11 => "st",
        (2, r) if r != 12 => "nd",
        (3, r) if r != 13 => "rd",
        _ => "th",
    };
    format!("{rank}{suffix}")
}

/// Spoiler-free summary of a round as emoji rows
///
/// # Examples
/// ```text
/// easy 2 guesses 0:42
/// 🟩🟨⬜⬜⬜
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_text(round: &Round, elapsed_secs: u64) -> String {
    let mut text = format!(
        "{} {} {} {}",
        round.difficulty(),
        round.history().len(),
        if round.history().len() == 1 {
            "guess"
        } else {
            "guesses"
        },
        format_duration(elapsed_secs)
    );
    for record in round.history() {
        let _ = write!(text, "\n{}", record.feedback.to_emoji());
    }
    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Count of marks as a short legend, e.g. "2🟩 1🟨 2⬜"
#[must_use]
pub fn mark_summary(feedback: &Feedback) -> String {
    [Mark::Exact, Mark::Present, Mark::Absent]
        .iter()
        .map(|&mark| format!("{}{}", feedback.count(mark), mark.emoji()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::round::{ManualClock, RoundController};
    use crate::scoring::HighScores;
    use crate::storage::MemoryStore;
    use crate::wordlists::WordBank;
    use chrono::{TimeZone, Utc};

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(600), "10:00");
    }

    #[test]
    fn ordinals() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(22), "22nd");
    }

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
    fn mark_summary_counts() {
        // trace vs grate: R A E exact, T present, G absent
        let feedback = Feedback::evaluate(
            &Word::new("trace").unwrap(),
            &Word::new("grate").unwrap(),
        );
        assert_eq!(mark_summary(&feedback), "3🟩 1🟨 1⬜");
    }

    #[test]
    fn keyboard_has_three_rows() {
        colored::control::set_override(false);
        let rows = keyboard_rows(&Keyboard::new());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(" Q "));
        assert!(rows[2].starts_with("     Z "));
    }

    #[test]
    fn share_text_lists_feedback_rows() {
        // Single-word bank so the drawn target is known
        let bank = WordBank::from_words(["apple"]);
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap());
        let mut controller =
            RoundController::new(bank, HighScores::load(MemoryStore::new()), clock);
        controller.start(Difficulty::Easy).unwrap();
        controller.submit_guess("apple").unwrap();

        let text = share_text(controller.round().unwrap(), 42);
        assert_eq!(text, "easy 1 guess 0:42\n🟩🟩🟩🟩🟩");
    }
}
