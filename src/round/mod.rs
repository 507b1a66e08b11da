//! Round orchestration and its timing collaborators

mod clock;
mod controller;
mod error;
mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{GuessOutcome, GuessRecord, Round, RoundController, RoundResult, RoundState};
pub use error::{GameError, Result};
pub use ticker::Ticker;
