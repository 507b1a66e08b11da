//! Difficulty tiers
//!
//! Each tier fixes the target word length and selects the word list consulted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A difficulty tier: easy (5 letters), medium (6) or hard (7)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Error returned when a tier name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct DifficultyParseError(pub String);

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Target word length for this tier
    #[must_use]
    pub const fn word_length(self) -> usize {
        match self {
            Self::Easy => 5,
            Self::Medium => 6,
            Self::Hard => 7,
        }
    }

    /// Lower-case name, as used in the persisted ledger
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Tier whose words have the given length
    #[must_use]
    pub const fn from_length(length: usize) -> Option<Self> {
        match length {
            5 => Some(Self::Easy),
            6 => Some(Self::Medium),
            7 => Some(Self::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" | "5" => Ok(Self::Easy),
            "medium" | "m" | "6" => Ok(Self::Medium),
            "hard" | "h" | "7" => Ok(Self::Hard),
            _ => Err(DifficultyParseError(s.to_string())),
        }
    }
}
