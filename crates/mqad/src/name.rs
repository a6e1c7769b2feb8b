//! Target member name extraction.
//!
//! Scans for maximal runs of capitalized words and keeps the longest one
//! that does not start with an interrogative.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of consecutive capitalized words ("Layla", "Amira Khan").
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*").unwrap());

/// Question openers that the pattern above also matches.
const QUESTION_STARTERS: &[&str] = &["What", "When", "How", "Who", "Where", "Which", "Why"];

/// Extract the most likely member name from a question.
///
/// A run whose first word is an interrogative is discarded whole. Among
/// the survivors the longest wins; ties go to the earliest occurrence.
pub fn extract_member_name(question: &str) -> Option<String> {
    let mut best: Option<&str> = None;

    for m in NAME_PATTERN.find_iter(question) {
        let candidate = m.as_str();
        let first = candidate.split_whitespace().next().unwrap_or("");
        if QUESTION_STARTERS.contains(&first) {
            continue;
        }
        match best {
            Some(current) if candidate.len() <= current.len() => {}
            _ => best = Some(candidate),
        }
    }

    best.map(str::to_string)
}
