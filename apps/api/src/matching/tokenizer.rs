//! Tokenizer — turns free text into lowercase keyword tokens.
//!
//! `+` is kept inside tokens so "C++" survives as "c++"; every other
//! non-alphanumeric character separates tokens. Tokens of two characters or
//! fewer are dropped, which removes connector words without a stopword list.

use std::collections::HashSet;

/// Tokens shorter than this are discarded.
const MIN_TOKEN_LEN: usize = 3;

fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '+'
}

/// Splits `text` into tokens in source order, duplicates retained.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_token_char(c))
        .filter(|t| t.len() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Deduplicated tokens of `text`.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}
