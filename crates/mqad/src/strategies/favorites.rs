//! Favorites list strategy.

use super::{ExtractionStrategy, StrategyContext};
use crate::intent::QuestionIntent;
use mqa_common::answer::{AnswerResult, Evidence};
use mqa_common::message::Message;
use regex::Regex;
use std::sync::LazyLock;

const FAVORITES_CONFIDENCE: f64 = 0.7;
const MAX_ITEMS: usize = 3;

const RESTAURANT_TOKENS: &[&str] = &["restaurant", "restaurants", "diner", "bistro"];

/// List introducer: a colon/dash, or a linking phrase before the items.
static LIST_INTRODUCER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[:\-]\s*| are | is | include | includes ").unwrap());

/// Item separators within the list.
static ITEM_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",|;|\band\b").unwrap());

/// Filler items that are part of the phrasing, not the list.
static FILLER_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(favorite|restaurants?)$").unwrap());

/// Answers favorites questions by splitting a list out of the first
/// restaurant-context (or literally "favorite") ranked message.
pub struct FavoritesStrategy;

impl ExtractionStrategy for FavoritesStrategy {
    fn name(&self) -> &'static str {
        "favorites"
    }

    fn triggers(&self, ctx: &StrategyContext) -> bool {
        ctx.intent == QuestionIntent::Favorites || ctx.question_lower.contains("favorite")
    }

    fn attempt(
        &self,
        _ctx: &StrategyContext,
        ranked: &[&Message],
        _filtered: &[&Message],
    ) -> Option<AnswerResult> {
        for m in ranked {
            let text_lower = m.text.to_lowercase();
            let in_context = RESTAURANT_TOKENS.iter().any(|t| text_lower.contains(t))
                || text_lower.contains("favorite");
            if !in_context {
                continue;
            }

            if let Some(items) = split_list(&m.text) {
                return Some(AnswerResult {
                    answer: items.join(", "),
                    confidence: FAVORITES_CONFIDENCE,
                    evidence: vec![Evidence::from_message(m)],
                });
            }
        }

        None
    }
}

/// Split out up to [`MAX_ITEMS`] list items after the first introducer.
fn split_list(text: &str) -> Option<Vec<String>> {
    let introducer = LIST_INTRODUCER.find(text)?;
    let remainder = &text[introducer.end()..];

    let mut items: Vec<String> = Vec::new();
    for raw in ITEM_SEPARATOR.split(remainder) {
        let item = raw.trim().trim_matches(|c: char| c == '.' || c == ' ');
        if item.len() <= 1 || FILLER_ITEM.is_match(item) {
            continue;
        }
        if !items.iter().any(|seen| seen == item) {
            items.push(item.to_string());
        }
        if items.len() == MAX_ITEMS {
            break;
        }
    }

    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
