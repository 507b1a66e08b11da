//! High-score listing command

use crate::core::Difficulty;
use crate::scoring::{HighScores, ScoreRecord};
use crate::storage::Storage;

/// Read the persisted ledger for one tier, or all tiers when `tier` is `None`
///
/// A missing or corrupt ledger reads as empty.
pub fn load_scores<S: Storage>(
    storage: S,
    tier: Option<Difficulty>,
) -> Vec<(Difficulty, Vec<ScoreRecord>)> {
    let high_scores = HighScores::load(storage);
    Difficulty::ALL
        .into_iter()
        .filter(|&difficulty| tier.is_none_or(|t| t == difficulty))
        .map(|difficulty| (difficulty, high_scores.top(difficulty).to_vec()))
        .collect()
}
