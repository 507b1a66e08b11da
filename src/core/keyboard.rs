//! Cumulative keyboard letter status
//!
//! Tracks the best-known classification of each of the 26 letters across all
//! guesses of a round. Status only ever moves up:
//! `Unknown < Absent < Present < Exact`.

use super::{Feedback, Mark, Word};

/// QWERTY rows, used for rendering
pub const ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best-known status of a single letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    #[default]
    Unknown,
    Absent,
    Present,
    Exact,
}

impl From<Mark> for LetterStatus {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Exact => Self::Exact,
            Mark::Present => Self::Present,
            Mark::Absent => Self::Absent,
        }
    }
}

/// Status of every letter a-z
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    letters: [LetterStatus; 26],
}

impl Keyboard {
    /// A keyboard with every letter `Unknown`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of `letter` (case-insensitive); non-letters are `Unknown`
    #[must_use]
    pub fn status(&self, letter: u8) -> LetterStatus {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.letters[usize::from(letter - b'a')]
        } else {
            LetterStatus::Unknown
        }
    }

    /// Return the keyboard after observing `guess` with `feedback`
    ///
    /// Pure merge: the receiver is left untouched.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Keyboard, LetterStatus, Word};
    ///
    /// let target = Word::new("apple").unwrap();
    /// let guess = Word::new("alarm").unwrap();
    /// let feedback = Feedback::evaluate(&target, &guess);
    ///
    /// let keyboard = Keyboard::new().merge(&guess, &feedback);
    /// // The second A was marked absent, but the first was exact
    /// assert_eq!(keyboard.status(b'a'), LetterStatus::Exact);
    /// assert_eq!(keyboard.status(b'l'), LetterStatus::Present);
    /// assert_eq!(keyboard.status(b'r'), LetterStatus::Absent);
    /// assert_eq!(keyboard.status(b'z'), LetterStatus::Unknown);
    /// ```
    #[must_use]
    pub fn merge(&self, guess: &Word, feedback: &Feedback) -> Self {
        let mut next = self.clone();
        next.apply(guess, feedback);
        next
    }

    /// In-place form of [`Keyboard::merge`]
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &mark) in guess.chars().iter().zip(feedback.marks()) {
            let slot = &mut self.letters[usize::from(letter - b'a')];
            let candidate = LetterStatus::from(mark);
            // Never downgrade: Absent only lands on Unknown, Present never
            // replaces Exact.
            if candidate > *slot {
                *slot = candidate;
            }
        }
    }

    /// Iterate letters a-z with their status
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        (b'a'..=b'z')
            .zip(self.letters.iter())
            .map(|(letter, &status)| (char::from(letter), status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn observe(keyboard: &Keyboard, target: &str, guess: &str) -> Keyboard {
        let target = Word::new(target).unwrap();
        let guess = Word::new(guess).unwrap();
        keyboard.merge(&guess, &Feedback::evaluate(&target, &guess))
    }

    #[test]
    fn starts_unknown() {
        let keyboard = Keyboard::new();
        assert!(keyboard.iter().all(|(_, s)| s == LetterStatus::Unknown));
        assert_eq!(keyboard.iter().count(), 26);
    }

    #[test]
    fn merge_is_pure() {
        let before = Keyboard::new();
        let after = observe(&before, "apple", "alarm");
        assert_eq!(before, Keyboard::new());
        assert_ne!(after, before);
    }

    #[test]
    fn status_is_case_insensitive() {
        let keyboard = observe(&Keyboard::new(), "apple", "alarm");
        assert_eq!(keyboard.status(b'A'), LetterStatus::Exact);
        assert_eq!(keyboard.status(b'?'), LetterStatus::Unknown);
    }

    #[test]
    fn exact_is_never_downgraded() {
        let keyboard = observe(&Keyboard::new(), "apple", "apple");
        assert_eq!(keyboard.status(b'p'), LetterStatus::Exact);

        // P is absent in this guess's context (only two P's, both consumed)
        let keyboard = observe(&keyboard, "apple", "puppy");
        assert_eq!(keyboard.status(b'p'), LetterStatus::Exact);
        assert_eq!(keyboard.status(b'y'), LetterStatus::Absent);
    }

    #[test]
    fn present_is_not_downgraded_by_absent_in_same_guess() {
        // "eerie" against "crate": first E absent, last E exact; R present
        let keyboard = observe(&Keyboard::new(), "crate", "eerie");
        assert_eq!(keyboard.status(b'e'), LetterStatus::Exact);
        assert_eq!(keyboard.status(b'r'), LetterStatus::Present);

        // "level" vs "eller": both L present, never absent
        let keyboard = observe(&Keyboard::new(), "level", "eller");
        assert_eq!(keyboard.status(b'l'), LetterStatus::Present);
    }

    #[test]
    fn present_is_not_downgraded_by_later_guess() {
        let keyboard = observe(&Keyboard::new(), "apple", "alarm");
        assert_eq!(keyboard.status(b'l'), LetterStatus::Present);

        // "label": first L present, trailing L absent (only one L in target)
        let keyboard = observe(&keyboard, "apple", "label");
        assert_eq!(keyboard.status(b'l'), LetterStatus::Present);
        assert_eq!(keyboard.status(b'b'), LetterStatus::Absent);
    }

    #[test]
    fn present_upgrades_to_exact() {
        let keyboard = observe(&Keyboard::new(), "apple", "plead");
        assert_eq!(keyboard.status(b'p'), LetterStatus::Present);
        let keyboard = observe(&keyboard, "apple", "apply");
        assert_eq!(keyboard.status(b'p'), LetterStatus::Exact);
    }

    fn guesses() -> impl Strategy<Value = (Word, Vec<Word>)> {
        let word = proptest::collection::vec(b'a'..=b'h', 5)
            .prop_map(|bytes| Word::new(String::from_utf8(bytes).unwrap()).unwrap());
        (word.clone(), proptest::collection::vec(word, 1..8))
    }

    proptest! {
        #[test]
        fn merge_is_monotonic((target, guesses) in guesses()) {
            let mut keyboard = Keyboard::new();
            for guess in &guesses {
                let next = keyboard.merge(guess, &Feedback::evaluate(&target, guess));
                for ((_, before), (_, after)) in keyboard.iter().zip(next.iter()) {
                    prop_assert!(after >= before);
                }
                keyboard = next;
            }
        }
    }
}
