//! Lexical relevance ranking.
//!
//! Scores a message by how many of the question's word tokens it shares,
//! sorts descending with a stable sort, and caps the output so downstream
//! strategies scan a bounded list.

use mqa_common::message::Message;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Upper bound on the ranked list handed to strategies.
pub const MAX_RANKED: usize = 25;

/// Maximal runs of word characters.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Lowercase word-token set of a text.
fn token_set(text: &str) -> HashSet<String> {
    WORD_PATTERN
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Order messages by descending token overlap with the question.
///
/// The sort is stable, so equal-score messages keep their original
/// relative order; output is truncated to [`MAX_RANKED`].
pub fn rank<'a>(question: &str, messages: &[&'a Message]) -> Vec<&'a Message> {
    let question_tokens = token_set(question);

    let mut scored: Vec<(usize, &'a Message)> = messages
        .iter()
        .map(|m| {
            let overlap = token_set(&m.text)
                .intersection(&question_tokens)
                .count();
            (overlap, *m)
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(MAX_RANKED);
    scored.into_iter().map(|(_, m)| m).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: &str, text: &str) -> Message {
        Message {
            id: id.to_string(),
            member_name: "Layla".to_string(),
            text: text.to_string(),
            timestamp: None,
        }
    }

    #[test]
    fn test_higher_overlap_ranks_first() {
        let a = msg("a", "the weather is nice");
        let b = msg("b", "my trip to Paris is booked");
        let messages = vec![&a, &b];

        let ranked = rank("When is the trip to Paris?", &messages);
        assert_eq!(ranked[0].id, "b");
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let a = msg("a", "nothing relevant here");
        let b = msg("b", "also nothing relevant");
        let messages = vec![&a, &b];

        let ranked = rank("When is the trip?", &messages);
        assert_eq!(ranked[0].id, "a");
        assert_eq!(ranked[1].id, "b");
    }

    #[test]
    fn test_idempotent_ordering() {
        let msgs: Vec<Message> = (0..8)
            .map(|i| msg(&format!("m{i}"), &format!("trip note number {i}")))
            .collect();
        let borrows: Vec<&Message> = msgs.iter().collect();

        let first: Vec<&str> = rank("trip", &borrows).iter().map(|m| m.id.as_str()).collect();
        let second: Vec<&str> = rank("trip", &borrows).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_truncates_to_cap() {
        let msgs: Vec<Message> = (0..40).map(|i| msg(&format!("m{i}"), "trip")).collect();
        let borrows: Vec<&Message> = msgs.iter().collect();

        assert_eq!(rank("trip", &borrows).len(), MAX_RANKED);
    }

    #[test]
    fn test_tokens_are_case_insensitive() {
        let a = msg("a", "PARIS in May");
        let messages = vec![&a];

        let ranked = rank("paris", &messages);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank("anything", &[]).is_empty());
    }
}
