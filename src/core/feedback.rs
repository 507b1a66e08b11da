//! Guess feedback calculation and representation
//!
//! Each guess position receives one mark:
//! - `Exact` (green): letter is at this position in the target
//! - `Present` (yellow): letter occurs elsewhere in the target
//! - `Absent` (gray): letter is not in the target, or every occurrence is
//!   already accounted for by other marks

use super::Word;
use std::fmt;

/// Per-letter classification of a guess against the target
///
/// Variants are ordered by strength: `Absent < Present < Exact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Present,
    Exact,
}

impl Mark {
    /// Emoji square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    /// Evaluate `guess` against `target`
    ///
    /// Implements the exact feedback rules, including proper handling of
    /// duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches and remove them from the pool of
    ///    unmatched target letters
    /// 2. Second pass: Mark present-but-misplaced letters from the remaining
    ///    pool, consuming one occurrence each time
    ///
    /// Both words must have the same length; callers reject mismatched guesses
    /// before evaluating. The result always has one mark per guess letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Mark, Word};
    ///
    /// let target = Word::new("apple").unwrap();
    /// let guess = Word::new("alarm").unwrap();
    /// let feedback = Feedback::evaluate(&target, &guess);
    ///
    /// assert_eq!(
    ///     feedback.marks(),
    ///     &[Mark::Exact, Mark::Present, Mark::Absent, Mark::Absent, Mark::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(target: &Word, guess: &Word) -> Self {
        debug_assert_eq!(target.len(), guess.len(), "guess length must match target");

        let target_chars = target.chars();
        let mut marks = vec![Mark::Absent; guess.len()];
        let mut available = target.char_counts();

        // First pass: exact position matches
        for (i, &letter) in guess.chars().iter().enumerate() {
            if target_chars.get(i) == Some(&letter) {
                marks[i] = Mark::Exact;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, limited by unmatched occurrences
        for (i, &letter) in guess.chars().iter().enumerate() {
            if marks[i] == Mark::Exact {
                continue;
            }
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// The marks, in guess order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Exact)
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::Mark::{Absent, Exact, Present};
    use super::*;
    use proptest::prelude::*;

    fn eval(target: &str, guess: &str) -> Feedback {
        Feedback::evaluate(&Word::new(target).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn all_absent() {
        let feedback = eval("fghij", "abcde");
        assert_eq!(feedback.marks(), &[Absent; 5]);
        assert_eq!(feedback.count(Exact), 0);
        assert_eq!(feedback.count(Present), 0);
    }

    #[test]
    fn all_exact() {
        let feedback = eval("crane", "crane");
        assert!(feedback.is_perfect());
        assert_eq!(feedback.count(Exact), 5);
    }

    #[test]
    fn apple_alarm() {
        // A exact; L present (target index 3); second A absent (only A consumed)
        let feedback = eval("apple", "alarm");
        assert_eq!(feedback.marks(), &[Exact, Present, Absent, Absent, Absent]);
    }

    #[test]
    fn level_eller_does_not_double_count() {
        // LEVEL has two L and two E.
        // E(present) L(present) L(present) E(exact) R(absent)
        let feedback = eval("level", "eller");
        assert_eq!(feedback.marks(), &[Present, Present, Present, Exact, Absent]);
    }

    #[test]
    fn extra_repeated_letter_is_absent() {
        // One O in target; exact O consumes it so the earlier O is absent
        let feedback = eval("chord", "ozone");
        assert_eq!(feedback.marks(), &[Absent, Absent, Exact, Absent, Absent]);

        // One O in target; first O takes it, second O is absent
        let feedback = eval("proud", "robot");
        assert_eq!(feedback.marks(), &[Present, Present, Absent, Absent, Absent]);
    }

    #[test]
    fn exact_takes_priority_over_earlier_present() {
        // Guess has two E; target has one E at index 4.
        let feedback = eval("crate", "eerie");
        assert_eq!(feedback.marks(), &[Absent, Absent, Present, Absent, Exact]);
    }

    #[test]
    fn duplicate_letters_both_present() {
        // SPEED vs ERASE: both E's present, S present
        let feedback = eval("erase", "speed");
        assert_eq!(feedback.marks(), &[Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn longer_tiers() {
        let feedback = eval("kitchen", "chicken");
        // The exact C consumes the only C, so the leading C is absent
        assert_eq!(
            feedback.marks(),
            &[Absent, Present, Present, Exact, Present, Exact, Exact]
        );
        assert_eq!(eval("planet", "planet").count(Exact), 6);
    }

    #[test]
    fn emoji_rendering() {
        let feedback = eval("apple", "alarm");
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜⬜⬜");
        assert_eq!(feedback.to_string(), "🟩🟨⬜⬜⬜");
    }

    fn word_pair() -> impl Strategy<Value = (Word, Word)> {
        (5usize..=7).prop_flat_map(|len| {
            let word = proptest::collection::vec(b'a'..=b'f', len)
                .prop_map(|bytes| Word::new(String::from_utf8(bytes).unwrap()).unwrap());
            (word.clone(), word)
        })
    }

    proptest! {
        #[test]
        fn self_evaluation_is_all_exact((word, _) in word_pair()) {
            prop_assert!(Feedback::evaluate(&word, &word).is_perfect());
        }

        #[test]
        fn mark_counts_sum_to_length((target, guess) in word_pair()) {
            let feedback = Feedback::evaluate(&target, &guess);
            prop_assert_eq!(feedback.len(), guess.len());
            prop_assert_eq!(
                feedback.count(Exact) + feedback.count(Present) + feedback.count(Absent),
                guess.len()
            );
        }

        #[test]
        fn marked_letters_never_exceed_target_count((target, guess) in word_pair()) {
            let feedback = Feedback::evaluate(&target, &guess);
            let counts = target.char_counts();
            for letter in b'a'..=b'f' {
                let marked = guess
                    .chars()
                    .iter()
                    .zip(feedback.marks())
                    .filter(|&(&g, &m)| g == letter && m != Absent)
                    .count();
                let available = counts.get(&letter).copied().unwrap_or(0) as usize;
                prop_assert!(marked <= available);
            }
        }

        #[test]
        fn exact_marks_match_positions((target, guess) in word_pair()) {
            let feedback = Feedback::evaluate(&target, &guess);
            for (i, &mark) in feedback.marks().iter().enumerate() {
                prop_assert_eq!(mark == Exact, target.chars()[i] == guess.chars()[i]);
            }
        }
    }
}
