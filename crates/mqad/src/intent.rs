//! Question intent classification.
//!
//! Keyword tables checked in fixed priority, then prefix fallbacks.
//! Always yields an intent; Unknown still reaches the keyword-gated
//! strategies downstream.

use serde::{Deserialize, Serialize};

/// Counting questions. Checked first: they often mention trips or dates
/// too, and counting should win those overlaps.
const COUNT_WORDS: &[&str] = &["how many", "count", "number"];

/// Favorites questions, both spellings.
const FAV_WORDS: &[&str] = &["favorite", "favourite", "favorites", "favourites"];

/// Date and schedule questions.
const WHEN_WORDS: &[&str] = &["when", "date", "schedule", "trip", "travel", "going"];

/// Coarse question category gating strategy applicability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionIntent {
    When,
    Count,
    Favorites,
    Unknown,
}

impl QuestionIntent {
    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::When => "when",
            Self::Count => "count",
            Self::Favorites => "favorites",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for QuestionIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a question by lowercase keyword membership.
pub fn classify(question: &str) -> QuestionIntent {
    let q = question.to_lowercase();

    if COUNT_WORDS.iter().any(|w| q.contains(w)) {
        return QuestionIntent::Count;
    }
    if FAV_WORDS.iter().any(|w| q.contains(w)) {
        return QuestionIntent::Favorites;
    }
    if WHEN_WORDS.iter().any(|w| q.contains(w)) {
        return QuestionIntent::When;
    }

    // Prefix fallbacks for phrasings the tables miss.
    if q.starts_with("when") {
        return QuestionIntent::When;
    }
    if q.starts_with("how many") {
        return QuestionIntent::Count;
    }
    if q.starts_with("what are") {
        return QuestionIntent::Favorites;
    }

    QuestionIntent::Unknown
}
