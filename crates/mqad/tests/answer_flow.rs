//! End-to-end pipeline scenarios over a canned corpus.

use approx::assert_relative_eq;
use mqa_common::message::Message;
use mqad::cache::SystemClock;
use mqad::metrics::PipelineMetrics;
use mqad::pipeline::QaPipeline;
use mqad::retriever::MessageStore;
use std::sync::Arc;
use std::time::Duration;

fn pipeline() -> QaPipeline {
    let metrics = Arc::new(PipelineMetrics::new());
    let store = Arc::new(
        MessageStore::new(
            "https://unused.invalid/messages".to_string(),
            Duration::from_secs(1),
            Duration::from_secs(900),
            Arc::new(SystemClock),
            Arc::clone(&metrics),
        )
        .unwrap(),
    );
    QaPipeline::new(store, metrics)
}

fn msg(id: &str, member: &str, text: &str) -> Message {
    Message {
        id: id.to_string(),
        member_name: member.to_string(),
        text: text.to_string(),
        timestamp: None,
    }
}

fn corpus() -> Vec<Message> {
    vec![
        msg("m1", "Vikram Rao", "Booked my flight to London for 2025-09-12, so excited"),
        msg("m2", "Vikram Rao", "Hotel sorted too"),
        msg("m3", "Layla Hassan", "I have 3 cars now after selling the van"),
        msg("m4", "Layla Hassan", "My favorite restaurants: Nobu, Carbone, and Lilia"),
        msg("m5", "Nora Chen", "For long flights I prefer window seats"),
        msg("m6", "Omar Said", "Made a dinner reservation at Le Bernardin for Saturday"),
        msg("m7", "", "orphan message with no author and number 42"),
    ]
}

#[test]
fn when_question_returns_date_with_evidence() {
    let result = pipeline().answer_corpus("When is Vikram going to London?", &corpus());
    assert_eq!(result.answer, "2025-09-12");
    assert_relative_eq!(result.confidence, 0.8);
    assert_eq!(result.evidence[0].message_id.as_deref(), Some("m1"));
    assert!(result.evidence[0].snippet.contains("London"));
}

#[test]
fn count_question_scopes_to_member() {
    let result = pipeline().answer_corpus("How many cars does Layla have?", &corpus());
    assert_eq!(result.answer, "3");
    assert_relative_eq!(result.confidence, 0.85);
}

#[test]
fn favorites_question_returns_joined_list() {
    let result = pipeline().answer_corpus("What are Layla's favorite restaurants?", &corpus());
    assert_eq!(result.answer, "Nobu, Carbone, Lilia");
    assert_relative_eq!(result.confidence, 0.7);
}

#[test]
fn seat_question_hits_keyword_strategy() {
    let result = pipeline().answer_corpus("What seat does Nora prefer?", &corpus());
    assert_eq!(result.answer, "Window seats");
    assert_relative_eq!(result.confidence, 0.9);
}

#[test]
fn reservation_question_extracts_venue() {
    let result = pipeline().answer_corpus("Where is Omar's dinner reservation?", &corpus());
    assert_eq!(result.answer, "Le Bernardin");
    assert_relative_eq!(result.confidence, 0.85);
}

#[test]
fn partial_name_matches_full_member_name() {
    // "Vikram" fuzzy-matches "Vikram Rao" via the similarity capability.
    let result = pipeline().answer_corpus("When does Vikram travel?", &corpus());
    assert_eq!(result.answer, "2025-09-12");
}

#[test]
fn unanswerable_question_yields_zero_confidence_default() {
    let result = pipeline().answer_corpus("What color is the sky for Zed?", &corpus());
    assert_relative_eq!(result.confidence, 0.0);
    assert!(result.evidence.is_empty());
    assert!(!result.answer.is_empty());
}

#[test]
fn answer_is_deterministic() {
    let p = pipeline();
    let corpus = corpus();
    let a = p.answer_corpus("When is Vikram going to London?", &corpus);
    let b = p.answer_corpus("When is Vikram going to London?", &corpus);
    assert_eq!(a.answer, b.answer);
    assert_eq!(a.evidence, b.evidence);
}
