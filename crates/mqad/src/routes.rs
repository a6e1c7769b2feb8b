//! HTTP routes for mqad.

use crate::analysis::corpus_stats;
use crate::retriever::RetrieveError;
use crate::server::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use mqa_common::answer::{excerpt, AnswerResult};
use mqa_common::api::{
    AskRequest, CorpusStats, FindHit, FindResponse, HealthResponse, NamesResponse,
    RefreshResponse, SearchHit, SearchResponse,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

const MAX_EXAMPLES: usize = 10;
const MAX_NAMES: usize = 200;
const SEARCH_SNIPPET_CHARS: usize = 200;
const FIND_SNIPPET_CHARS: usize = 220;

fn upstream_error(e: RetrieveError) -> (StatusCode, String) {
    (StatusCode::BAD_GATEWAY, e.to_string())
}

// ============================================================================
// Ask Routes
// ============================================================================

pub fn ask_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/ask", get(ask_get))
        .route("/ask", post(ask_post))
}

#[derive(Debug, Deserialize)]
struct AskQuery {
    #[serde(default)]
    question: String,
}

async fn ask_get(
    State(state): State<AppStateArc>,
    Query(query): Query<AskQuery>,
) -> Result<Json<AnswerResult>, (StatusCode, String)> {
    ask(state, &query.question).await
}

async fn ask_post(
    State(state): State<AppStateArc>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AnswerResult>, (StatusCode, String)> {
    ask(state, &req.question).await
}

async fn ask(
    state: AppStateArc,
    question: &str,
) -> Result<Json<AnswerResult>, (StatusCode, String)> {
    info!(question, "answering question");
    let result = state.pipeline.answer(question).await.map_err(upstream_error)?;
    Ok(Json(result))
}

// ============================================================================
// Ops Routes
// ============================================================================

pub fn ops_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/cache/refresh", post(cache_refresh))
        .route("/metrics", get(metrics))
}

async fn healthz(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: mqa_common::VERSION.to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

async fn cache_refresh(State(state): State<AppStateArc>) -> Json<RefreshResponse> {
    state.store.invalidate().await;
    info!("message cache invalidated");
    Json(RefreshResponse {
        status: "refreshed".to_string(),
    })
}

async fn metrics(State(state): State<AppStateArc>) -> String {
    state.metrics.export()
}

// ============================================================================
// Debug Routes
// ============================================================================

pub fn debug_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/debug/search", get(debug_search))
        .route("/debug/names", get(debug_names))
        .route("/debug/find", get(debug_find))
        .route("/debug/stats", get(debug_stats))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    q: String,
}

async fn debug_search(
    State(state): State<AppStateArc>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let corpus = state.store.fetch_messages().await.map_err(upstream_error)?;
    let needle = query.q.to_lowercase();

    let hits: Vec<&mqa_common::message::Message> = corpus
        .iter()
        .filter(|m| m.text.to_lowercase().contains(&needle))
        .collect();

    Ok(Json(SearchResponse {
        query: query.q,
        count: hits.len(),
        examples: hits
            .iter()
            .take(MAX_EXAMPLES)
            .map(|m| SearchHit {
                id: m.id.clone(),
                member: m.member_name.clone(),
                snippet: excerpt(&m.text, SEARCH_SNIPPET_CHARS),
            })
            .collect(),
    }))
}

async fn debug_names(
    State(state): State<AppStateArc>,
) -> Result<Json<NamesResponse>, (StatusCode, String)> {
    let corpus = state.store.fetch_messages().await.map_err(upstream_error)?;

    let mut names: Vec<String> = corpus
        .iter()
        .filter(|m| !m.member_name.is_empty())
        .map(|m| m.member_name.clone())
        .collect();
    names.sort();
    names.dedup();

    let count = names.len();
    names.truncate(MAX_NAMES);
    Ok(Json(NamesResponse { count, names }))
}

#[derive(Debug, Deserialize)]
struct FindQuery {
    member: String,
    q: String,
}

async fn debug_find(
    State(state): State<AppStateArc>,
    Query(query): Query<FindQuery>,
) -> Result<Json<FindResponse>, (StatusCode, String)> {
    let corpus = state.store.fetch_messages().await.map_err(upstream_error)?;
    let member = query.member.to_lowercase();
    let needle = query.q.to_lowercase();

    let hits: Vec<&mqa_common::message::Message> = corpus
        .iter()
        .filter(|m| {
            !m.member_name.is_empty()
                && m.member_name.to_lowercase().contains(&member)
                && m.text.to_lowercase().contains(&needle)
        })
        .collect();

    Ok(Json(FindResponse {
        member: query.member,
        query: query.q,
        count: hits.len(),
        examples: hits
            .iter()
            .take(MAX_EXAMPLES)
            .map(|m| FindHit {
                id: m.id.clone(),
                snippet: excerpt(&m.text, FIND_SNIPPET_CHARS),
            })
            .collect(),
    }))
}

async fn debug_stats(
    State(state): State<AppStateArc>,
) -> Result<Json<CorpusStats>, (StatusCode, String)> {
    let corpus = state.store.fetch_messages().await.map_err(upstream_error)?;
    Ok(Json(corpus_stats(&corpus)))
}
