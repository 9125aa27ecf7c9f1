//! Text normalization and word tokenization
//!
//! A word character is any Unicode `Alphabetic` or `Numeric` character, or
//! `_` (the same set as `char::is_alphanumeric() || c == '_'`). Text is
//! lower-cased with full Unicode rules, including the final-sigma form, and
//! every maximal run of other characters becomes a single space. So
//! `"state-of-the-art"` yields four tokens and trailing punctuation never
//! sticks to a word.
//!
//! Combining marks follow their Unicode properties: marks with the
//! `Alphabetic` property (most Indic vowel signs) stay inside the word, while
//! the rest (the virama, the combining acute accent) split it.

use std::sync::LazyLock;

use regex::Regex;

/// One or more characters that cannot appear inside a token
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{Alphabetic}\p{N}_]+").expect("valid regex"));

/// Lower-case `text` and collapse each run of non-word characters into one
/// space.
pub fn normalize(text: &str) -> String {
    NON_WORD
        .replace_all(&text.to_lowercase(), " ")
        .into_owned()
}

/// Iterate the tokens of already-normalized text.
pub fn split_tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}

/// Normalize and tokenize in one step.
pub fn tokenize(text: &str) -> Vec<String> {
    split_tokens(&normalize(text)).map(str::to_string).collect()
}
