//! Runtime configuration
//!
//! Assembled from CLI flags in `main` and used to build the collaborators a
//! round needs.

use crate::core::Difficulty;
use crate::round::{RoundController, SystemClock};
use crate::scoring::HighScores;
use crate::storage::FileStore;
use crate::wordlists::{WordBank, loader::load_from_file};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Default directory for the ledger and log file
pub const DEFAULT_DATA_DIR: &str = ".wordle";

/// Log file name inside the data directory
pub const LOG_FILE: &str = "wordle.log";

/// The controller the binary plays with
pub type GameController = RoundController<WordBank, FileStore, SystemClock>;

/// Settings for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Tier of the first round
    pub difficulty: Difficulty,
    /// Directory holding the persisted ledger and the log
    pub data_dir: PathBuf,
    /// Custom word file replacing the embedded lists
    pub wordlist: Option<PathBuf>,
    /// Period of the elapsed-time ticker; `None` disables it
    pub tick_period: Option<Duration>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            wordlist: None,
            tick_period: Some(Duration::from_secs(1)),
        }
    }
}

impl GameConfig {
    /// Path of the log file
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }

    /// Storage backend for the ledger
    #[must_use]
    pub fn storage(&self) -> FileStore {
        FileStore::new(&self.data_dir)
    }

    /// Word bank: the custom list if configured, else the embedded lists
    ///
    /// # Errors
    /// Returns an I/O error if the custom word file cannot be read.
    pub fn word_bank(&self) -> io::Result<WordBank> {
        match &self.wordlist {
            Some(path) => load_from_file(path),
            None => Ok(WordBank::embedded()),
        }
    }

    /// Build a controller wired to the configured collaborators
    ///
    /// # Errors
    /// Returns an I/O error if the custom word file cannot be read.
    pub fn controller(&self) -> io::Result<GameController> {
        let controller = RoundController::new(
            self.word_bank()?,
            HighScores::load(self.storage()),
            SystemClock,
        );
        Ok(controller.with_tick_period(self.tick_period))
    }
}
