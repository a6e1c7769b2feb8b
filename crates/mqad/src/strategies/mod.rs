//! Extraction strategies.
//!
//! A fixed, ordered list of independent strategies sharing one trait.
//! Each strategy is gated by a trigger over the question/intent and
//! either produces an answer or declines; declining is a normal `None`,
//! never an error. The chain tries strategies strictly in priority order
//! and falls back to a zero-confidence default when all decline.
//!
//! Adding a strategy means appending to the list in
//! [`ExtractorChain::standard`], not branching logic.

mod count;
mod favorites;
mod reservation;
mod seat;
mod when;

pub use count::VehicleCountStrategy;
pub use favorites::FavoritesStrategy;
pub use reservation::ReservationStrategy;
pub use seat::SeatPreferenceStrategy;
pub use when::WhenStrategy;

use crate::intent::QuestionIntent;
use mqa_common::answer::AnswerResult;
use mqa_common::message::Message;
use tracing::{debug, info};

/// Strategy label used when every strategy declines.
pub const NOT_FOUND_LABEL: &str = "not_found";

/// Per-question inputs shared by every strategy.
pub struct StrategyContext {
    pub question: String,
    /// Lowercased once so strategies don't re-lowercase per scan.
    pub question_lower: String,
    pub intent: QuestionIntent,
}

impl StrategyContext {
    pub fn new(question: &str, intent: QuestionIntent) -> Self {
        Self {
            question: question.to_string(),
            question_lower: question.to_lowercase(),
            intent,
        }
    }
}

/// One extraction strategy in the chain.
pub trait ExtractionStrategy: Send + Sync {
    /// Stable label for logs and metrics.
    fn name(&self) -> &'static str;

    /// Whether this strategy applies to the question at all.
    fn triggers(&self, ctx: &StrategyContext) -> bool;

    /// Try to extract an answer. `None` = decline, try the next strategy.
    fn attempt(
        &self,
        ctx: &StrategyContext,
        ranked: &[&Message],
        filtered: &[&Message],
    ) -> Option<AnswerResult>;
}

/// Ranked messages followed by any filtered messages not already ranked.
///
/// De-duplication is by snapshot identity (the borrows come from one
/// corpus snapshot), which holds even when upstream ids are empty.
pub fn ranked_then_filtered<'a>(
    ranked: &[&'a Message],
    filtered: &[&'a Message],
) -> Vec<&'a Message> {
    let mut combined: Vec<&'a Message> = ranked.to_vec();
    for m in filtered {
        if !ranked.iter().any(|r| std::ptr::eq(*r, *m)) {
            combined.push(m);
        }
    }
    combined
}

/// The ordered strategy chain plus the not-found default.
pub struct ExtractorChain {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl ExtractorChain {
    /// The standard chain in priority order.
    pub fn standard() -> Self {
        Self {
            strategies: vec![
                Box::new(WhenStrategy),
                Box::new(VehicleCountStrategy),
                Box::new(FavoritesStrategy),
                Box::new(SeatPreferenceStrategy),
                Box::new(ReservationStrategy),
            ],
        }
    }

    /// Run the chain; the first non-declining strategy wins.
    ///
    /// Returns the answer and the winning strategy's label
    /// ([`NOT_FOUND_LABEL`] when everything declined).
    pub fn answer(
        &self,
        ctx: &StrategyContext,
        ranked: &[&Message],
        filtered: &[&Message],
    ) -> (AnswerResult, &'static str) {
        for strategy in &self.strategies {
            if !strategy.triggers(ctx) {
                continue;
            }
            match strategy.attempt(ctx, ranked, filtered) {
                Some(result) => {
                    info!(
                        strategy = strategy.name(),
                        confidence = result.confidence,
                        "strategy produced an answer"
                    );
                    return (result, strategy.name());
                }
                None => debug!(strategy = strategy.name(), "strategy declined"),
            }
        }

        (AnswerResult::not_found(), NOT_FOUND_LABEL)
    }
}
