//! Input guard shared by the presentation front-ends
//!
//! Rejects obviously junk input before a turn spends any provider calls.

/// Substrings that mark an input as spam
const BLACKLIST: [&str; 4] = ["http", "@@@", "!!!", "spam"];

/// Minimum accepted input length in characters
const MIN_LEN: usize = 3;

/// True when the input is worth answering
pub fn filter_spam(text: &str) -> bool {
    if text.chars().count() < MIN_LEN {
        return false;
    }
    let lower = text.to_lowercase();
    !BLACKLIST.iter().any(|b| lower.contains(b))
}
