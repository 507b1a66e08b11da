//! Wordle
//!
//! A word-guessing game with three difficulty tiers (5, 6 and 7 letters),
//! per-letter feedback, a keyboard hint panel, time-based scoring and a
//! persisted high-score ledger.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, Mark, Word};
//!
//! let target = Word::new("apple").unwrap();
//! let guess = Word::new("alarm").unwrap();
//!
//! let feedback = Feedback::evaluate(&target, &guess);
//! assert_eq!(feedback.marks()[0], Mark::Exact);
//! println!("{feedback}");
//! ```

// Core domain types
pub mod core;

// Score formula and high-score ledger
pub mod scoring;

// Key-value persistence
pub mod storage;

// Word lists
pub mod wordlists;

// Round lifecycle, timing and orchestration
pub mod round;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
