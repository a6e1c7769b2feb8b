//! Vehicle count strategy.

use super::{ranked_then_filtered, ExtractionStrategy, StrategyContext};
use crate::intent::QuestionIntent;
use mqa_common::answer::{AnswerResult, Evidence};
use mqa_common::message::Message;
use regex::Regex;
use std::sync::LazyLock;

const KEYWORD_ADJACENT_CONFIDENCE: f64 = 0.85;
const BARE_NUMBER_CONFIDENCE: f64 = 0.5;

const CAR_TOKENS: &[&str] = &["car", "cars", "vehicle", "vehicles"];

/// A 1-3 digit number next to a vehicle keyword, optionally introduced by
/// a verb or preposition ("has 3 cars", "with 2 vehicles", ": 12 cars").
static NUMBER_BY_VEHICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:has|own|owns|with|:)?\s*(\d{1,3})\s+(?:car|cars|vehicle|vehicles)\b").unwrap()
});

/// Any bare 1-3 digit number; the low-confidence fallback.
static BARE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{1,3})\b").unwrap());

/// Answers "how many cars/vehicles" questions with a number found next to
/// a vehicle keyword, or any bare small number as a low-confidence guess.
pub struct VehicleCountStrategy;

impl ExtractionStrategy for VehicleCountStrategy {
    fn name(&self) -> &'static str {
        "count_vehicles"
    }

    fn triggers(&self, ctx: &StrategyContext) -> bool {
        ctx.intent == QuestionIntent::Count
            && CAR_TOKENS.iter().any(|t| ctx.question_lower.contains(t))
    }

    fn attempt(
        &self,
        _ctx: &StrategyContext,
        ranked: &[&Message],
        filtered: &[&Message],
    ) -> Option<AnswerResult> {
        for m in ranked_then_filtered(ranked, filtered) {
            if m.text.is_empty() {
                continue;
            }
            let text = m.text.to_lowercase();
            if let Some(caps) = NUMBER_BY_VEHICLE.captures(&text) {
                return Some(answer(&caps[1], KEYWORD_ADJACENT_CONFIDENCE, m));
            }
        }

        // Single fallback pass: a number was probably mentioned without
        // naming the vehicles directly.
        for m in ranked {
            if let Some(caps) = BARE_NUMBER.captures(&m.text) {
                return Some(answer(&caps[1], BARE_NUMBER_CONFIDENCE, m));
            }
        }

        None
    }
}

fn answer(number: &str, confidence: f64, source: &Message) -> AnswerResult {
    AnswerResult {
        answer: number.to_string(),
        confidence,
        evidence: vec![Evidence::from_message(source)],
    }
}
