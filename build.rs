//! Build script to generate embedded word lists
//!
//! Reads one word list file per difficulty tier and generates Rust source code
//! with const arrays. Entries are lower-cased, sorted and deduplicated.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (input, output, const_name, length) in [
        ("data/five.txt", "five.rs", "FIVE_LETTER", 5),
        ("data/six.txt", "six.rs", "SIX_LETTER", 6),
        ("data/seven.txt", "seven.rs", "SEVEN_LETTER", 7),
    ] {
        generate_word_list(
            input,
            &Path::new(&out_dir).join(output),
            const_name,
            length,
        );
        println!("cargo:rerun-if-changed={input}");
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, length: usize) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect();
    words.sort_unstable();
    words.dedup();

    for word in &words {
        assert!(
            word.len() == length && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{input_path}: '{word}' is not a {length}-letter word"
        );
    }

    let count = words.len();
    let doc_comment = format!("Embedded {length}-letter words ({count} words)");

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
