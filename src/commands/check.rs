//! Guess checking command
//!
//! Evaluates a single guess against a given target without starting a round.

use crate::core::{Feedback, Word};

/// Result of checking a guess
pub struct CheckResult {
    pub target: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// Neither word has to be in a word list.
///
/// # Errors
///
/// Returns an error if:
/// - Either word is invalid (not 5 to 7 letters or contains non-letters)
/// - The words have different lengths
pub fn check_guess(target: &str, guess: &str) -> Result<CheckResult, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    if target.len() != guess.len() {
        return Err(format!(
            "Guess must be {} letters, got {}",
            target.len(),
            guess.len()
        ));
    }

    let feedback = Feedback::evaluate(&target, &guess);
    Ok(CheckResult {
        target,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_valid_pair() {
        let result = check_guess("APPLE", "alarm").unwrap();
        assert_eq!(result.target.text(), "apple");
        assert_eq!(result.feedback.to_emoji(), "🟩🟨⬜⬜⬜");
    }

    #[test]
    fn check_exact_match() {
        let result = check_guess("kitchen", "KITCHEN").unwrap();
        assert!(result.feedback.is_perfect());
    }

    #[test]
    fn check_length_mismatch() {
        let err = check_guess("apple", "planet").err().unwrap();
        assert!(err.contains("5 letters"));
    }

    #[test]
    fn check_invalid_words() {
        assert!(check_guess("appl3", "alarm").is_err());
        assert!(check_guess("apple", "al").is_err());
    }
}
