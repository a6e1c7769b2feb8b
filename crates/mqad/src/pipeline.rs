//! The question-answering pipeline.
//!
//! One invocation per question: classify intent and extract the target
//! name (independent), fetch a corpus snapshot, filter to the member,
//! rank by relevance, then run the strategy chain. The fetch is the only
//! await; everything after it is synchronous work over borrows, so
//! concurrent invocations share a snapshot without coordination.

use crate::intent::{classify, QuestionIntent};
use crate::member::MemberMatcher;
use crate::metrics::PipelineMetrics;
use crate::name::extract_member_name;
use crate::rank::rank;
use crate::retriever::{MessageStore, RetrieveError};
use crate::strategies::{ExtractorChain, StrategyContext};
use mqa_common::answer::AnswerResult;
use mqa_common::message::Message;
use std::sync::Arc;
use tracing::debug;

pub struct QaPipeline {
    store: Arc<MessageStore>,
    matcher: MemberMatcher,
    chain: ExtractorChain,
    metrics: Arc<PipelineMetrics>,
}

impl QaPipeline {
    pub fn new(store: Arc<MessageStore>, metrics: Arc<PipelineMetrics>) -> Self {
        Self {
            store,
            matcher: MemberMatcher::default(),
            chain: ExtractorChain::standard(),
            metrics,
        }
    }

    /// Answer a question against the current corpus.
    ///
    /// Only fails on retrieval; "no answer found" is a normal
    /// zero-confidence result, never an error.
    pub async fn answer(&self, question: &str) -> Result<AnswerResult, RetrieveError> {
        let corpus = self.store.fetch_messages().await?;
        Ok(self.answer_corpus(question, &corpus))
    }

    /// The synchronous core, usable directly in tests with a canned corpus.
    pub fn answer_corpus(&self, question: &str, corpus: &[Message]) -> AnswerResult {
        let target = extract_member_name(question);
        let intent = classify(question);
        self.metrics.record_question(intent.as_str());
        debug!(?target, intent = intent.as_str(), "classified question");

        let filtered: Vec<&Message> = corpus
            .iter()
            .filter(|m| self.matcher.matches(target.as_deref(), &m.member_name))
            .collect();
        let ranked = rank(question, &filtered);

        let ctx = StrategyContext::new(question, intent);
        let (result, strategy) = self.chain.answer(&ctx, &ranked, &filtered);
        self.metrics.record_answer(strategy);
        result
    }
}

/// Intent and target name for a question, surfaced by the debug API.
pub fn classify_question(question: &str) -> (QuestionIntent, Option<String>) {
    (classify(question), extract_member_name(question))
}
