//! Round controller
//!
//! Orchestrates one round at a time: draws the target, validates and
//! evaluates guesses, folds feedback into the keyboard, times the round and
//! records the score when the target is found.
//!
//! ```text
//! start() ──► InProgress ──(guess == target)──► Finished
//!                 ▲                                 │
//!                 └──────────── start() ◄───────────┘
//! ```

use super::Ticker;
use super::clock::Clock;
use super::error::{GameError, Result};
use crate::core::{Difficulty, Feedback, Keyboard, Word};
use crate::scoring::{HighScores, ScoreRecord, score};
use crate::storage::Storage;
use crate::wordlists::WordSource;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info};

/// Round lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Finished,
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Outcome of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub score: u32,
    pub guesses: u32,
    pub elapsed_secs: u64,
    /// 1-based high-score rank, if the score made the ledger
    pub rank: Option<usize>,
}

/// What an accepted guess produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    /// Set when this guess finished the round
    pub result: Option<RoundResult>,
}

/// State of a single round
#[derive(Debug, Clone)]
pub struct Round {
    difficulty: Difficulty,
    target: Word,
    history: Vec<GuessRecord>,
    keyboard: Keyboard,
    started_at: DateTime<Utc>,
    state: RoundState,
    result: Option<RoundResult>,
}

impl Round {
    fn new(difficulty: Difficulty, target: Word, started_at: DateTime<Utc>) -> Self {
        Self {
            difficulty,
            target,
            history: Vec::new(),
            keyboard: Keyboard::new(),
            started_at,
            state: RoundState::InProgress,
            result: None,
        }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Guesses in submission order
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == RoundState::Finished
    }

    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }
}

/// Drives rounds against a word source, a score store and a clock
///
/// Owns at most one round and at most one live ticker. The ticker is
/// cancelled whenever the round finishes, is abandoned, or is replaced.
pub struct RoundController<W, S, C> {
    words: W,
    high_scores: HighScores<S>,
    clock: C,
    tick_period: Option<Duration>,
    round: Option<Round>,
    ticker: Option<Ticker>,
    live_secs: Arc<AtomicU64>,
}

impl<W: WordSource, S: Storage, C: Clock> RoundController<W, S, C> {
    /// Create a controller with no round in progress and no ticker
    pub fn new(words: W, high_scores: HighScores<S>, clock: C) -> Self {
        Self {
            words,
            high_scores,
            clock,
            tick_period: None,
            round: None,
            ticker: None,
            live_secs: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Run a ticker with this period while a round is in progress
    #[must_use]
    pub fn with_tick_period(mut self, period: Option<Duration>) -> Self {
        self.tick_period = period;
        self
    }

    /// Start a new round, replacing any current one
    ///
    /// # Errors
    /// Returns `GameError::NoWords` if the word source has nothing for the
    /// tier; the current round is then left untouched.
    pub fn start(&mut self, difficulty: Difficulty) -> Result<&Round> {
        let target = self
            .words
            .random_word(difficulty)
            .ok_or(GameError::NoWords(difficulty))?;

        self.stop_ticker();
        self.live_secs = Arc::new(AtomicU64::new(0));
        if let Some(period) = self.tick_period {
            let counter = Arc::clone(&self.live_secs);
            self.ticker = Some(Ticker::spawn(period, move || {
                counter.fetch_add(1, Ordering::Relaxed);
            }));
        }

        info!(%difficulty, length = target.len(), "round started");
        let started_at = self.clock.now();
        Ok(&*self.round.insert(Round::new(difficulty, target, started_at)))
    }

    /// Submit a guess to the current round
    ///
    /// # Errors
    /// - `NoActiveRound` / `AlreadyFinished` outside `InProgress`
    /// - `LengthMismatch` if the guess length differs from the target's
    /// - `InvalidWord` if the word source does not accept the guess
    ///
    /// State is unchanged on error.
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome> {
        let round = self.round.as_mut().ok_or(GameError::NoActiveRound)?;
        if round.is_finished() {
            return Err(GameError::AlreadyFinished);
        }

        let text = input.trim();
        let expected = round.target.len();
        let actual = text.chars().count();
        if actual != expected {
            debug!(expected, actual, "guess rejected: length mismatch");
            return Err(GameError::LengthMismatch { expected, actual });
        }

        let guess = match Word::new(text) {
            Ok(word) if self.words.is_valid_guess(word.text(), round.difficulty) => word,
            _ => {
                debug!(guess = text, "guess rejected: not in word list");
                return Err(GameError::InvalidWord(text.to_lowercase()));
            }
        };

        let feedback = Feedback::evaluate(&round.target, &guess);
        round.keyboard.apply(&guess, &feedback);
        round.history.push(GuessRecord {
            guess,
            feedback: feedback.clone(),
        });
        debug!(guesses = round.history.len(), %feedback, "guess accepted");

        if !feedback.is_perfect() {
            return Ok(GuessOutcome {
                feedback,
                result: None,
            });
        }

        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }

        let now = self.clock.now();
        let elapsed_secs = u64::try_from((now - round.started_at).num_seconds()).unwrap_or(0);
        let guesses = u32::try_from(round.history.len()).unwrap_or(u32::MAX);
        let points = score(guesses, elapsed_secs, round.target.len());
        let rank = self.high_scores.record(
            round.difficulty,
            ScoreRecord::new(points, guesses, elapsed_secs, now),
        );

        let result = RoundResult {
            score: points,
            guesses,
            elapsed_secs,
            rank,
        };
        round.state = RoundState::Finished;
        round.result = Some(result);
        info!(
            difficulty = %round.difficulty,
            guesses,
            elapsed_secs,
            score = points,
            ?rank,
            "round finished"
        );

        Ok(GuessOutcome {
            feedback,
            result: Some(result),
        })
    }

    /// Give up on the current round without scoring
    ///
    /// Returns the round that was dropped, if any.
    pub fn abandon(&mut self) -> Option<Round> {
        self.stop_ticker();
        let round = self.round.take();
        if let Some(round) = &round
            && !round.is_finished()
        {
            info!(difficulty = %round.difficulty, guesses = round.history.len(), "round abandoned");
        }
        round
    }

    /// The current round, if one was started
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Seconds elapsed in the current round
    ///
    /// Frozen once the round finishes. While in progress this is the ticker's
    /// count when one runs, otherwise it is read from the clock.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        match &self.round {
            None => 0,
            Some(round) => match round.result {
                Some(result) => result.elapsed_secs,
                None if self.ticker.is_some() => self.live_secs.load(Ordering::Relaxed),
                None => u64::try_from((self.clock.now() - round.started_at).num_seconds())
                    .unwrap_or(0),
            },
        }
    }

    /// Check if a ticker is currently live
    #[must_use]
    pub const fn ticker_running(&self) -> bool {
        self.ticker.is_some()
    }

    #[must_use]
    pub const fn high_scores(&self) -> &HighScores<S> {
        &self.high_scores
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
