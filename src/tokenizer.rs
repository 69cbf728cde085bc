//! src/tokenizer.rs
use regex::Regex;
use std::sync::LazyLock;

// Maximal runs of ASCII letters, digits, and apostrophes over case-folded
// text. Everything else separates tokens and is discarded.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9']+").expect("invalid token pattern"));

pub fn tokenize(text: &str) -> Vec<String> {
    let folded = text.to_lowercase();
    TOKEN
        .find_iter(&folded)
        .map(|m| m.as_str().to_string())
        .collect()
}
