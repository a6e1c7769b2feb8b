//! Answer and evidence types produced by the QA pipeline.

use crate::message::Message;
use serde::{Deserialize, Serialize};

/// Evidence snippet cap, in characters.
pub const SNIPPET_MAX_CHARS: usize = 200;

/// Answer text used when every extraction strategy declines.
pub const NOT_FOUND_ANSWER: &str = "I couldn't find that in the member messages.";

/// Excerpt of a source message supporting an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// Source message id; None when upstream supplied no id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    pub snippet: String,
}

impl Evidence {
    /// Build evidence from a source message, bounding the snippet.
    pub fn from_message(message: &Message) -> Self {
        let message_id = if message.id.is_empty() {
            None
        } else {
            Some(message.id.clone())
        };
        Self {
            message_id,
            snippet: excerpt(&message.text, SNIPPET_MAX_CHARS),
        }
    }
}

/// Final pipeline output for one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
    /// Heuristic certainty in [0, 1]; not a calibrated probability.
    pub confidence: f64,
    pub evidence: Vec<Evidence>,
}

impl AnswerResult {
    /// Zero-confidence default: no strategy matched, no evidence.
    pub fn not_found() -> Self {
        Self {
            answer: NOT_FOUND_ANSWER.to_string(),
            confidence: 0.0,
            evidence: Vec::new(),
        }
    }
}

/// First `max_chars` characters of `text`, never splitting a scalar.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_counts_chars_not_bytes() {
        let text = "é".repeat(300);
        let snippet = excerpt(&text, SNIPPET_MAX_CHARS);
        assert_eq!(snippet.chars().count(), SNIPPET_MAX_CHARS);
    }

    #[test]
    fn test_excerpt_keeps_short_text() {
        assert_eq!(excerpt("hello", 200), "hello");
    }

    #[test]
    fn test_not_found_is_zero_confidence_no_evidence() {
        let result = AnswerResult::not_found();
        assert_eq!(result.confidence, 0.0);
        assert!(result.evidence.is_empty());
        assert!(!result.answer.is_empty());
    }

    #[test]
    fn test_evidence_empty_id_becomes_none() {
        let message = Message {
            id: String::new(),
            member_name: "Zed".to_string(),
            text: "hello".to_string(),
            timestamp: None,
        };
        assert_eq!(Evidence::from_message(&message).message_id, None);
    }

    #[test]
    fn test_evidence_bounds_snippet() {
        let message = Message {
            id: "m1".to_string(),
            member_name: "Zed".to_string(),
            text: "x".repeat(500),
            timestamp: None,
        };
        let evidence = Evidence::from_message(&message);
        assert_eq!(evidence.message_id.as_deref(), Some("m1"));
        assert_eq!(evidence.snippet.chars().count(), SNIPPET_MAX_CHARS);
    }
}
