//! Round score calculation

/// Points available per letter of the target word
pub const POINTS_PER_LETTER: u64 = 1000;

/// Penalty per guess submitted
pub const GUESS_PENALTY: u64 = 100;

/// Penalty per elapsed second
pub const SECOND_PENALTY: u64 = 2;

/// Score for a finished round
///
/// `word_length × 1000 − guesses × 100 − seconds × 2`, clamped at zero.
///
/// # Examples
/// ```
/// use wordle_game::scoring::score;
///
/// assert_eq!(score(3, 45, 5), 5000 - 300 - 90);
/// assert_eq!(score(80, 0, 5), 0);
/// ```
#[must_use]
pub fn score(guess_count: u32, elapsed_secs: u64, word_length: usize) -> u32 {
    let base = (word_length as u64).saturating_mul(POINTS_PER_LETTER);
    let penalty = u64::from(guess_count)
        .saturating_mul(GUESS_PENALTY)
        .saturating_add(elapsed_secs.saturating_mul(SECOND_PENALTY));

    u32::try_from(base.saturating_sub(penalty)).unwrap_or(u32::MAX)
}
