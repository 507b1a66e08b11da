//! Word lists for each difficulty tier
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! and the [`WordSource`] seam the round controller draws targets from.

mod embedded;
pub mod loader;

pub use embedded::{
    FIVE_LETTER, FIVE_LETTER_COUNT, SEVEN_LETTER, SEVEN_LETTER_COUNT, SIX_LETTER,
    SIX_LETTER_COUNT,
};

use crate::core::{Difficulty, Word};
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Supplies target words and validates guesses for a difficulty tier
pub trait WordSource {
    /// A random word of the tier's length, `None` if the tier has no words
    fn random_word(&self, difficulty: Difficulty) -> Option<Word>;

    /// Check if `word` is an accepted guess for the tier (case-insensitive)
    fn is_valid_guess(&self, word: &str, difficulty: Difficulty) -> bool;
}

/// Embedded list for a tier
#[must_use]
pub const fn embedded(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => FIVE_LETTER,
        Difficulty::Medium => SIX_LETTER,
        Difficulty::Hard => SEVEN_LETTER,
    }
}

/// One word list per tier with a hash index for lookups
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    lists: [Vec<Word>; 3],
    index: [FxHashSet<Word>; 3],
}

impl WordBank {
    /// Bank built from the embedded lists
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(
            Difficulty::ALL
                .iter()
                .flat_map(|&difficulty| embedded(difficulty).iter().copied()),
        )
    }

    /// Bank built from arbitrary words
    ///
    /// Each word is filed under the tier matching its length; invalid words
    /// and duplicates are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bank = Self::default();
        for word in words.into_iter().filter_map(|w| Word::new(w).ok()) {
            let Some(difficulty) = Difficulty::from_length(word.len()) else {
                continue;
            };
            let slot = slot(difficulty);
            if bank.index[slot].insert(word.clone()) {
                bank.lists[slot].push(word);
            }
        }
        bank
    }

    /// Words of one tier, in insertion order
    #[must_use]
    pub fn words(&self, difficulty: Difficulty) -> &[Word] {
        &self.lists[slot(difficulty)]
    }

    /// Check if a tier has no words
    #[must_use]
    pub fn is_empty(&self, difficulty: Difficulty) -> bool {
        self.lists[slot(difficulty)].is_empty()
    }
}

impl WordSource for WordBank {
    fn random_word(&self, difficulty: Difficulty) -> Option<Word> {
        self.words(difficulty).choose(&mut rand::rng()).cloned()
    }

    fn is_valid_guess(&self, word: &str, difficulty: Difficulty) -> bool {
        Word::new(word).is_ok_and(|word| self.index[slot(difficulty)].contains(&word))
    }
}

const fn slot(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 0,
        Difficulty::Medium => 1,
        Difficulty::Hard => 2,
    }
}
