//! When/date strategy.

use super::{ExtractionStrategy, StrategyContext};
use crate::dates::extract_dates;
use crate::intent::QuestionIntent;
use mqa_common::answer::{AnswerResult, Evidence};
use mqa_common::message::Message;

const DATE_IN_RANKED_CONFIDENCE: f64 = 0.8;
const TRAVEL_CONTEXT_CONFIDENCE: f64 = 0.75;

const TRAVEL_TOKENS: &[&str] = &["trip", "travel", "flight", "flights", "book", "going to"];

/// Destination cities recognized in travel context. Matching is
/// substring-based over the lowercased message text.
const CITY_KEYWORDS: &[&str] = &[
    "paris", "london", "tokyo", "rome", "berlin", "madrid", "lisbon", "amsterdam",
    "barcelona", "dubai", "singapore", "sydney", "new york", "los angeles", "chicago",
    "miami", "boston", "seattle", "austin", "denver",
];

/// Answers "when" questions with the first recognizable date expression:
/// first over ranked messages in rank order, then over the member's
/// messages in original order when the message also reads as travel
/// planning (travel keyword + city name).
pub struct WhenStrategy;

impl ExtractionStrategy for WhenStrategy {
    fn name(&self) -> &'static str {
        "when_date"
    }

    fn triggers(&self, ctx: &StrategyContext) -> bool {
        ctx.intent == QuestionIntent::When
    }

    fn attempt(
        &self,
        _ctx: &StrategyContext,
        ranked: &[&Message],
        filtered: &[&Message],
    ) -> Option<AnswerResult> {
        for m in ranked {
            if let Some(date) = extract_dates(&m.text).into_iter().next() {
                return Some(answer(date, DATE_IN_RANKED_CONFIDENCE, m));
            }
        }

        for m in filtered {
            let text = m.text.to_lowercase();
            let travels = TRAVEL_TOKENS.iter().any(|t| text.contains(t));
            let names_city = CITY_KEYWORDS.iter().any(|c| text.contains(c));
            if travels && names_city {
                if let Some(date) = extract_dates(&m.text).into_iter().next() {
                    return Some(answer(date, TRAVEL_CONTEXT_CONFIDENCE, m));
                }
            }
        }

        None
    }
}

fn answer(date: String, confidence: f64, source: &Message) -> AnswerResult {
    AnswerResult {
        answer: date,
        confidence,
        evidence: vec![Evidence::from_message(source)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: &str, text: &str) -> Message {
        Message {
            id: id.to_string(),
            member_name: "Vikram".to_string(),
            text: text.to_string(),
            timestamp: None,
        }
    }

    fn ctx() -> StrategyContext {
        StrategyContext::new("When is Vikram going to London?", QuestionIntent::When)
    }

    #[test]
    fn test_only_triggers_on_when_intent() {
        let count_ctx = StrategyContext::new("How many cars?", QuestionIntent::Count);
        assert!(WhenStrategy.triggers(&ctx()));
        assert!(!WhenStrategy.triggers(&count_ctx));
    }

    #[test]
    fn test_first_ranked_date_wins() {
        let a = msg("a", "no dates in this one");
        let b = msg("b", "flight booked for 2025-06-01");
        let c = msg("c", "another date 2025-07-01");
        let ranked = vec![&a, &b, &c];

        let result = WhenStrategy.attempt(&ctx(), &ranked, &ranked).unwrap();
        assert_eq!(result.answer, "2025-06-01");
        assert_eq!(result.confidence, 0.8);
        assert_eq!(result.evidence[0].message_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_travel_context_fallback() {
        // Ranked list has no dates; a travel+city message from the member does.
        let a = msg("a", "nothing useful");
        let b = msg("b", "Booked my trip to London, leaving next Friday");
        let ranked = vec![&a];
        let filtered = vec![&a, &b];

        let result = WhenStrategy.attempt(&ctx(), &ranked, &filtered).unwrap();
        assert_eq!(result.answer, "next Friday");
        assert_eq!(result.confidence, 0.75);
    }

    #[test]
    fn test_travel_without_city_declines() {
        let m = msg("m", "Booked a trip, leaving next Friday");
        let ranked: Vec<&Message> = vec![];
        let filtered = vec![&m];

        assert!(WhenStrategy.attempt(&ctx(), &ranked, &filtered).is_none());
    }

    #[test]
    fn test_no_dates_anywhere_declines() {
        let m = msg("m", "trip to London was great");
        let list = vec![&m];
        // travel+city but no date expression
        assert!(WhenStrategy.attempt(&ctx(), &[], &list).is_none());
    }
}
