//! Restaurant reservation strategy.

use super::{ranked_then_filtered, ExtractionStrategy, StrategyContext};
use mqa_common::answer::{AnswerResult, Evidence};
use mqa_common::message::Message;
use regex::Regex;
use std::sync::LazyLock;

const RESERVATION_CONFIDENCE: f64 = 0.85;

const TRIGGER_TOKENS: &[&str] = &[
    "restaurant",
    "reservation",
    "dinner",
    "table",
    "booking",
    "book a table",
    "booked at",
];

const CONTEXT_TOKENS: &[&str] = &["reservation", "restaurant", "dinner", "table", "booking"];

/// A proper-noun phrase of 1-7 capitalized words after
/// "reservation/booking/table at|for". Runs over the original-case text.
static VENUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:reservation|book(?:ing)?|table)\s+(?:at|for)\s+([A-Z][\w'&.-]*(?:\s+[A-Z][\w'&.-]*){0,6})",
    )
    .unwrap()
});

/// Answers reservation questions with the venue name mentioned after a
/// booking phrase.
pub struct ReservationStrategy;

impl ExtractionStrategy for ReservationStrategy {
    fn name(&self) -> &'static str {
        "reservation"
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
            let text_lower = m.text.to_lowercase();
            if !CONTEXT_TOKENS.iter().any(|t| text_lower.contains(t)) {
                continue;
            }

            if let Some(caps) = VENUE_PATTERN.captures(&m.text) {
                let venue = caps[1]
                    .trim()
                    .trim_end_matches([' ', '.', ',', '!', '?', ':', ';']);
                return Some(AnswerResult {
                    answer: venue.to_string(),
                    confidence: RESERVATION_CONFIDENCE,
                    evidence: vec![Evidence::from_message(m)],
                });
            }
        }

        None
    }
}
