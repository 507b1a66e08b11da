//! Command implementations

pub mod check;
pub mod scores;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use scores::load_scores;
pub use simple::run_simple;
