//! Prometheus metrics for the QA pipeline.

use prometheus::{
    register_int_counter_vec_with_registry, Encoder, IntCounterVec, Registry, TextEncoder,
};
use std::sync::Arc;

/// Pipeline metrics exported at /metrics.
#[derive(Clone)]
pub struct PipelineMetrics {
    pub questions_total: IntCounterVec,
    pub answers_total: IntCounterVec,
    pub upstream_fetches_total: IntCounterVec,

    registry: Arc<Registry>,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let questions_total = register_int_counter_vec_with_registry!(
            "mqa_questions_total",
            "Total questions received, by classified intent",
            &["intent"],
            registry
        )
        .unwrap();

        let answers_total = register_int_counter_vec_with_registry!(
            "mqa_answers_total",
            "Total answers produced, by winning strategy (or not_found)",
            &["strategy"],
            registry
        )
        .unwrap();

        let upstream_fetches_total = register_int_counter_vec_with_registry!(
            "mqa_upstream_fetches_total",
            "Total upstream fetch attempts, by outcome",
            &["outcome"],
            registry
        )
        .unwrap();

        Self {
            questions_total,
            answers_total,
            upstream_fetches_total,
            registry: Arc::new(registry),
        }
    }

    pub fn record_question(&self, intent: &str) {
        self.questions_total.with_label_values(&[intent]).inc();
    }

    pub fn record_answer(&self, strategy: &str) {
        self.answers_total.with_label_values(&[strategy]).inc();
    }

    /// Outcome is one of: cache_hit, fetched, error.
    pub fn record_fetch(&self, outcome: &str) {
        self.upstream_fetches_total
            .with_label_values(&[outcome])
            .inc();
    }

    /// Export metrics in Prometheus text format.
    pub fn export(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}
