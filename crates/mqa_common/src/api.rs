//! Wire types for the daemon HTTP API, shared with the CLI client.

use serde::{Deserialize, Serialize};

/// Body for POST /ask.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Response for GET /healthz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Response for POST /cache/refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub status: String,
}

/// One hit from GET /debug/search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub member: String,
    pub snippet: String,
}

/// Response for GET /debug/search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub examples: Vec<SearchHit>,
}

/// Response for GET /debug/names. `count` is the full distinct total even
/// when `names` is truncated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamesResponse {
    pub count: usize,
    pub names: Vec<String>,
}

/// One hit from GET /debug/find.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindHit {
    pub id: String,
    pub snippet: String,
}

/// Response for GET /debug/find.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindResponse {
    pub member: String,
    pub query: String,
    pub count: usize,
    pub examples: Vec<FindHit>,
}

/// Member and message count pair for the stats leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCount {
    pub member: String,
    pub messages: usize,
}

/// A member whose messages mention several distinct date expressions,
/// flagged as a potential scheduling conflict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateConflict {
    pub member: String,
    pub distinct_dates: usize,
}

/// Corpus statistics served by GET /debug/stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusStats {
    pub total_messages: usize,
    pub missing_id: usize,
    pub missing_member_name: usize,
    pub missing_text: usize,
    pub missing_timestamp: usize,
    /// Timestamps present but not RFC 3339.
    pub bad_timestamps: usize,
    pub top_members: Vec<MemberCount>,
    /// Messages mentioning a number greater than 10.
    pub large_number_mentions: usize,
    pub date_conflicts: Vec<DateConflict>,
}
