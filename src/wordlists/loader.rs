//! Word list loading utilities
//!
//! Loads custom word lists from disk.

use super::WordBank;
use std::fs;
use std::io;
use std::path::Path;

/// Load a word bank from a file with one word per line
///
/// Words are filed under the tier matching their length; blank lines and
/// invalid entries are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::core::Difficulty;
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let bank = load_from_file("words.txt").unwrap();
/// println!("Loaded {} easy words", bank.words(Difficulty::Easy).len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordBank> {
    let content = fs::read_to_string(path)?;

    Ok(WordBank::from_words(
        content.lines().map(str::trim).filter(|line| !line.is_empty()),
    ))
}
