//! Seat preference strategy.

use super::{ranked_then_filtered, ExtractionStrategy, StrategyContext};
use mqa_common::answer::{AnswerResult, Evidence};
use mqa_common::message::Message;
use regex::Regex;
use std::sync::LazyLock;

const SEAT_CONFIDENCE: f64 = 0.9;

const TRIGGER_TOKENS: &[&str] = &["seat", "seats", "preference", "prefer"];
const PREF_TOKENS: &[&str] = &["prefer", "preference", "i prefer"];
const SEAT_TOKENS: &[&str] = &["aisle", "window", "middle"];

static SEAT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:prefer|preference is)\s+(aisle|window|middle)\s+seats?").unwrap()
});

/// Answers seat preference questions from a stated preference like
/// "I prefer window seats".
pub struct SeatPreferenceStrategy;

impl ExtractionStrategy for SeatPreferenceStrategy {
    fn name(&self) -> &'static str {
        "seat_preference"
    }

    fn triggers(&self, ctx: &StrategyContext) -> bool {
        TRIGGER_TOKENS.iter().any(|t| ctx.question_lower.contains(t))
    }

    fn attempt(
        &self,
        _ctx: &StrategyContext,
        ranked: &[&Message],
        filtered: &[&Message],
    ) -> Option<AnswerResult> {
        for m in ranked_then_filtered(ranked, filtered) {
            let text = m.text.to_lowercase();
            let states_preference = PREF_TOKENS.iter().any(|t| text.contains(t));
            let names_seat = SEAT_TOKENS.iter().any(|t| text.contains(t));
            if !(states_preference && names_seat) {
                continue;
            }

            if let Some(caps) = SEAT_PATTERN.captures(&text) {
                let seat = capitalize(&caps[1]);
                return Some(AnswerResult {
                    answer: format!("{seat} seats"),
                    confidence: SEAT_CONFIDENCE,
                    evidence: vec![Evidence::from_message(m)],
                });
            }
        }

        None
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::QuestionIntent;

    fn msg(id: &str, text: &str) -> Message {
        Message {
            id: id.to_string(),
            member_name: "Nora".to_string(),
            text: text.to_string(),
            timestamp: None,
        }
    }

    fn ctx() -> StrategyContext {
        StrategyContext::new("What seat does Nora prefer?", QuestionIntent::Unknown)
    }

    #[test]
    fn test_triggers_on_keywords_regardless_of_intent() {
        assert!(SeatPreferenceStrategy.triggers(&ctx()));
        assert!(SeatPreferenceStrategy.triggers(&StrategyContext::new(
            "Any preference for Nora?",
            QuestionIntent::Unknown
        )));
        assert!(!SeatPreferenceStrategy.triggers(&StrategyContext::new(
            "When is the flight?",
            QuestionIntent::When
        )));
    }

    #[test]
    fn test_window_seats() {
        let m = msg("m1", "I prefer window seats");
        let list = vec![&m];

        let result = SeatPreferenceStrategy.attempt(&ctx(), &list, &list).unwrap();
        assert_eq!(result.answer, "Window seats");
        assert_eq!(result.confidence, 0.9);
        assert_eq!(result.evidence[0].message_id.as_deref(), Some("m1"));
    }

    #[test]
    fn test_preference_is_phrasing_and_singular_seat() {
        let m = msg("m1", "My preference is aisle seat when flying");
        let list = vec![&m];

        let result = SeatPreferenceStrategy.attempt(&ctx(), &list, &list).unwrap();
        assert_eq!(result.answer, "Aisle seats");
    }

    #[test]
    fn test_seat_word_without_preference_declines() {
        let m = msg("m1", "the window seat was broken");
        let list = vec![&m];
        assert!(SeatPreferenceStrategy.attempt(&ctx(), &list, &list).is_none());
    }

    #[test]
    fn test_preference_without_pattern_declines() {
        // Both token families present but not in the extractable shape.
        let m = msg("m1", "I prefer sitting near the window");
        let list = vec![&m];
        assert!(SeatPreferenceStrategy.attempt(&ctx(), &list, &list).is_none());
    }
}
