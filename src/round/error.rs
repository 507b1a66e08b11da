use crate::core::Difficulty;
use thiserror::Error;

/// Rejected round operations. Round state is never changed by a rejection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Guess must be {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("'{0}' is not in the word list")]
    InvalidWord(String),
    #[error("No round in progress")]
    NoActiveRound,
    #[error("Round already finished, no new guesses are accepted")]
    AlreadyFinished,
    #[error("No {0} words available")]
    NoWords(Difficulty),
}

pub type Result<T> = std::result::Result<T, GameError>;
