//! Scoring and the persisted high-score ledger

mod ledger;
mod score;

pub use ledger::{HighScores, LEDGER_KEY, Ledger, MAX_ENTRIES, ScoreRecord};
pub use score::{GUESS_PENALTY, POINTS_PER_LETTER, SECOND_PENALTY, score};
