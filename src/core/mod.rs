//! Core domain types for the game
//!
//! This module contains the fundamental domain types and performs no I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod difficulty;
mod feedback;
pub mod keyboard;
mod word;

pub use difficulty::{Difficulty, DifficultyParseError};
pub use feedback::{Feedback, Mark};
pub use keyboard::{Keyboard, LetterStatus};
pub use word::{MAX_LENGTH, MIN_LENGTH, Word, WordError};
