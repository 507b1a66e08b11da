//! High-score ledger
//!
//! Keeps the five best scores per difficulty tier, highest first, and persists
//! the whole ledger as one JSON document after every change:
//!
//! ```json
//! {
//!   "easy":   [{"score": 4610, "guesses": 3, "time": 45, "date": "2026-10-18T09:30:00Z"}],
//!   "medium": [],
//!   "hard":   []
//! }
//! ```

use crate::core::Difficulty;
use crate::storage::{Storage, StorageError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Storage key of the persisted ledger
pub const LEDGER_KEY: &str = "wordle-highscores";

/// Entries kept per difficulty tier
pub const MAX_ENTRIES: usize = 5;

/// One finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    pub guesses: u32,
    /// Elapsed seconds
    #[serde(rename = "time")]
    pub elapsed_secs: u64,
    pub date: DateTime<Utc>,
}

impl ScoreRecord {
    #[must_use]
    pub const fn new(score: u32, guesses: u32, elapsed_secs: u64, date: DateTime<Utc>) -> Self {
        Self {
            score,
            guesses,
            elapsed_secs,
            date,
        }
    }
}

/// Ranked score lists for every tier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ledger {
    easy: Vec<ScoreRecord>,
    medium: Vec<ScoreRecord>,
    hard: Vec<ScoreRecord>,
}

impl Ledger {
    /// Entries for one tier, highest score first
    #[must_use]
    pub fn entries(&self, difficulty: Difficulty) -> &[ScoreRecord] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn entries_mut(&mut self, difficulty: Difficulty) -> &mut Vec<ScoreRecord> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Check if no tier has any entry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Difficulty::ALL
            .iter()
            .all(|&difficulty| self.entries(difficulty).is_empty())
    }

    /// Insert a record, keeping the tier sorted and bounded
    ///
    /// Ties keep insertion order (an earlier record ranks above a later one
    /// with the same score). Returns the 1-based rank of the new record, or
    /// `None` if it did not make the top [`MAX_ENTRIES`].
    pub fn insert(&mut self, difficulty: Difficulty, record: ScoreRecord) -> Option<usize> {
        let entries = self.entries_mut(difficulty);
        let position = entries.partition_point(|r| r.score >= record.score);
        if position >= MAX_ENTRIES {
            return None;
        }

        entries.insert(position, record);
        entries.truncate(MAX_ENTRIES);
        Some(position + 1)
    }

    /// Restore the sorted/bounded shape after loading hand-edited data
    fn normalize(&mut self) {
        for difficulty in Difficulty::ALL {
            let entries = self.entries_mut(difficulty);
            entries.sort_by(|a, b| b.score.cmp(&a.score));
            entries.truncate(MAX_ENTRIES);
        }
    }

    /// Decode a persisted ledger
    ///
    /// # Errors
    /// Returns an error if the value does not have the ledger shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let mut ledger: Self = serde_json::from_value(value)?;
        ledger.normalize();
        Ok(ledger)
    }
}

/// The ledger together with the storage it is persisted to
#[derive(Debug)]
pub struct HighScores<S> {
    storage: S,
    ledger: Ledger,
}

impl<S: Storage> HighScores<S> {
    /// Load the persisted ledger
    ///
    /// A missing or unreadable ledger is treated as no history.
    pub fn load(storage: S) -> Self {
        let ledger = read_ledger(&storage).unwrap_or_default();
        Self { storage, ledger }
    }

    /// The in-memory ledger
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Best scores of one tier, highest first
    #[must_use]
    pub fn top(&self, difficulty: Difficulty) -> &[ScoreRecord] {
        self.ledger.entries(difficulty)
    }

    /// Record a finished round and persist the ledger
    ///
    /// The persisted ledger is re-read first so entries written through
    /// another handle since `load` are kept; the read, insert and write all
    /// happen under this exclusive borrow. A failed write is logged and the
    /// in-memory ledger still reflects the record.
    ///
    /// Returns the 1-based rank of the record if it made the top five.
    pub fn record(&mut self, difficulty: Difficulty, record: ScoreRecord) -> Option<usize> {
        if let Some(persisted) = read_ledger(&self.storage) {
            self.ledger = persisted;
        }

        let rank = self.ledger.insert(difficulty, record);
        self.persist();
        rank
    }

    fn persist(&mut self) {
        let result = serde_json::to_value(&self.ledger)
            .map_err(StorageError::from)
            .and_then(|value| self.storage.set(LEDGER_KEY, &value));

        if let Err(e) = result {
            warn!(error = %e, "failed to persist high scores");
        }
    }

    /// Access the underlying storage
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}

/// Read the persisted ledger, `None` when absent or corrupt
fn read_ledger<S: Storage>(storage: &S) -> Option<Ledger> {
    match storage.get(LEDGER_KEY) {
        Ok(Some(value)) => match Ledger::from_value(value) {
            Ok(ledger) => Some(ledger),
            Err(e) => {
                warn!(error = %e, "high-score ledger is corrupt, starting empty");
                None
            }
        },
        Ok(None) => {
            debug!("no persisted high scores");
            None
        }
        Err(e) => {
            warn!(error = %e, "failed to read high scores, starting empty");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use chrono::TimeZone;
    use proptest::prelude::*;
    use serde_json::{Value, json};

    fn record(score: u32) -> ScoreRecord {
        let date = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        ScoreRecord::new(score, 3, 45, date)
    }

    fn scores(entries: &[ScoreRecord]) -> Vec<u32> {
        entries.iter().map(|r| r.score).collect()
    }

    /// Storage whose writes always fail
    struct ReadOnlyStore;

    impl Storage for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<Value>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &Value) -> Result<(), StorageError> {
            Err(std::io::Error::other("read-only").into())
        }
    }

    #[test]
    fn insert_keeps_descending_order() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.insert(Difficulty::Easy, record(300)), Some(1));
        assert_eq!(ledger.insert(Difficulty::Easy, record(500)), Some(1));
        assert_eq!(ledger.insert(Difficulty::Easy, record(400)), Some(2));
        assert_eq!(scores(ledger.entries(Difficulty::Easy)), vec![500, 400, 300]);
        assert!(ledger.entries(Difficulty::Hard).is_empty());
    }

    #[test]
    fn insert_truncates_to_five() {
        let mut ledger = Ledger::default();
        for score in [100, 200, 300, 400, 500, 600] {
            ledger.insert(Difficulty::Medium, record(score));
        }
        assert_eq!(
            scores(ledger.entries(Difficulty::Medium)),
            vec![600, 500, 400, 300, 200]
        );

        // Too low to rank
        assert_eq!(ledger.insert(Difficulty::Medium, record(150)), None);
        assert_eq!(ledger.entries(Difficulty::Medium).len(), MAX_ENTRIES);
    }

    #[test]
    fn ties_keep_earlier_record_first() {
        let mut ledger = Ledger::default();
        let mut first = record(400);
        first.guesses = 1;
        let mut second = record(400);
        second.guesses = 2;

        ledger.insert(Difficulty::Easy, first);
        assert_eq!(ledger.insert(Difficulty::Easy, second), Some(2));
        let guesses: Vec<u32> = ledger
            .entries(Difficulty::Easy)
            .iter()
            .map(|r| r.guesses)
            .collect();
        assert_eq!(guesses, vec![1, 2]);
    }

    #[test]
    fn tie_at_cutoff_does_not_displace() {
        let mut ledger = Ledger::default();
        for _ in 0..MAX_ENTRIES {
            ledger.insert(Difficulty::Easy, record(100));
        }
        assert_eq!(ledger.insert(Difficulty::Easy, record(100)), None);
    }

    #[test]
    fn serializes_to_documented_shape() {
        let mut ledger = Ledger::default();
        ledger.insert(Difficulty::Easy, record(4610));

        let value = serde_json::to_value(&ledger).unwrap();
        assert_eq!(
            value,
            json!({
                "easy": [{"score": 4610, "guesses": 3, "time": 45, "date": "2026-10-18T09:30:00Z"}],
                "medium": [],
                "hard": []
            })
        );
    }

    #[test]
    fn from_value_accepts_missing_tiers_and_millisecond_dates() {
        let ledger = Ledger::from_value(json!({
            "hard": [
                {"score": 10, "guesses": 9, "time": 300, "date": "2026-01-01T00:00:00.000Z"},
                {"score": 90, "guesses": 2, "time": 20, "date": "2026-01-02T00:00:00.000Z"}
            ]
        }))
        .unwrap();

        assert!(ledger.entries(Difficulty::Easy).is_empty());
        // Re-sorted on load
        assert_eq!(scores(ledger.entries(Difficulty::Hard)), vec![90, 10]);
    }

    #[test]
    fn load_missing_is_empty() {
        let high_scores = HighScores::load(MemoryStore::new());
        assert!(high_scores.ledger().is_empty());
    }

    #[test]
    fn load_corrupt_is_empty() {
        let store = MemoryStore::new().with_entry(LEDGER_KEY, json!("not a ledger"));
        let high_scores = HighScores::load(store);
        assert!(high_scores.ledger().is_empty());

        let store = MemoryStore::new().with_entry(LEDGER_KEY, json!({"easy": [{"score": -4}]}));
        assert!(HighScores::load(store).ledger().is_empty());
    }

    #[test]
    fn record_persists_every_change() {
        let mut high_scores = HighScores::load(MemoryStore::new());
        assert_eq!(high_scores.record(Difficulty::Hard, record(700)), Some(1));

        let persisted = high_scores.storage().get(LEDGER_KEY).unwrap().unwrap();
        let ledger = Ledger::from_value(persisted).unwrap();
        assert_eq!(scores(ledger.entries(Difficulty::Hard)), vec![700]);

        // A fresh load sees the record
        let reloaded = HighScores::load(high_scores.storage().clone());
        assert_eq!(scores(reloaded.top(Difficulty::Hard)), vec![700]);
    }

    #[test]
    fn record_over_corrupt_state_starts_fresh() {
        let store = MemoryStore::new().with_entry(LEDGER_KEY, json!([1, 2, 3]));
        let mut high_scores = HighScores::load(store);
        high_scores.record(Difficulty::Easy, record(100));

        let reloaded = HighScores::load(high_scores.storage().clone());
        assert_eq!(scores(reloaded.top(Difficulty::Easy)), vec![100]);
    }

    #[test]
    fn record_keeps_entries_persisted_by_another_handle() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = HighScores::load(FileStore::new(dir.path()));
        let mut second = HighScores::load(FileStore::new(dir.path()));

        first.record(Difficulty::Easy, record(900));
        // `second` loaded before the 900 existed but must not drop it
        second.record(Difficulty::Easy, record(500));

        let reloaded = HighScores::load(FileStore::new(dir.path()));
        assert_eq!(scores(reloaded.top(Difficulty::Easy)), vec![900, 500]);
    }

    #[test]
    fn failed_write_keeps_in_memory_record() {
        let mut high_scores = HighScores::load(ReadOnlyStore);
        assert_eq!(high_scores.record(Difficulty::Easy, record(250)), Some(1));
        assert_eq!(scores(high_scores.top(Difficulty::Easy)), vec![250]);
    }

    proptest! {
        #[test]
        fn ledger_stays_bounded_and_sorted(
            inserts in proptest::collection::vec((0usize..3, 0u32..10_000), 0..40)
        ) {
            let mut high_scores = HighScores::load(MemoryStore::new());
            for (tier, score) in inserts {
                high_scores.record(Difficulty::ALL[tier], record(score));
            }
            for difficulty in Difficulty::ALL {
                let entries = high_scores.top(difficulty);
                prop_assert!(entries.len() <= MAX_ENTRIES);
                prop_assert!(entries.windows(2).all(|w| w[0].score >= w[1].score));
            }
        }
    }
}
