//! Message retrieval from the upstream messaging API.
//!
//! Tries a small set of URL variants (trailing-slash toggle, scheme
//! swap) before giving up, normalizes the loosely-shaped upstream
//! payload into [`Message`] records, and caches the result.

use crate::cache::{Clock, MessageCache};
use crate::metrics::PipelineMetrics;
use anyhow::{Context, Result};
use mqa_common::message::Message;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Retrieval failures surfaced to callers.
#[derive(Debug, thiserror::Error)]
pub enum RetrieveError {
    #[error("upstream returned a non-JSON payload from {url}: {detail}")]
    BadPayload { url: String, detail: String },

    #[error("all upstream URL variants failed (last error: {last})")]
    AllVariantsFailed { last: String },
}

/// Fetches and caches the member message corpus.
pub struct MessageStore {
    http: reqwest::Client,
    url: String,
    cache: MessageCache,
    metrics: Arc<PipelineMetrics>,
}

impl MessageStore {
    pub fn new(
        url: String,
        http_timeout: Duration,
        cache_ttl: Duration,
        clock: Arc<dyn Clock>,
        metrics: Arc<PipelineMetrics>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(http_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            url,
            cache: MessageCache::new(cache_ttl, clock),
            metrics,
        })
    }

    /// The corpus snapshot, from cache when fresh.
    pub async fn fetch_messages(&self) -> Result<Arc<Vec<Message>>, RetrieveError> {
        if let Some(cached) = self.cache.get().await {
            debug!("message cache hit");
            self.metrics.record_fetch("cache_hit");
            return Ok(cached);
        }

        let payload = match self.get_messages_json().await {
            Ok(payload) => payload,
            Err(e) => {
                self.metrics.record_fetch("error");
                return Err(e);
            }
        };

        let corpus = Arc::new(normalize_payload(&payload));
        self.cache.put(Arc::clone(&corpus)).await;
        self.metrics.record_fetch("fetched");
        Ok(corpus)
    }

    /// Drop the cached corpus.
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }

    async fn get_messages_json(&self) -> Result<Value, RetrieveError> {
        let mut last: Option<RetrieveError> = None;

        for url in url_variants(&self.url) {
            let response = match self
                .http
                .get(&url)
                .header("Accept", "application/json")
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    warn!(url, error = %e, "upstream request failed");
                    last = Some(RetrieveError::AllVariantsFailed {
                        last: e.to_string(),
                    });
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                warn!(url, %status, "upstream returned non-success status");
                last = Some(RetrieveError::AllVariantsFailed {
                    last: format!("HTTP {status} from {url}"),
                });
                continue;
            }

            match response.json::<Value>().await {
                Ok(payload) => return Ok(payload),
                Err(e) => {
                    warn!(url, error = %e, "upstream body was not JSON");
                    last = Some(RetrieveError::BadPayload {
                        url,
                        detail: e.to_string(),
                    });
                }
            }
        }

        Err(last.unwrap_or(RetrieveError::AllVariantsFailed {
            last: "no URL variants to try".to_string(),
        }))
    }
}

/// URL variants in attempt order: as configured, trailing-slash toggle,
/// scheme swap, scheme swap's slash toggle. Duplicates are skipped; a
/// bare host gets `https://` prefixed.
pub fn url_variants(url: &str) -> Vec<String> {
    let mut variants: Vec<String> = Vec::new();
    let mut push = |candidate: String| {
        if !variants.contains(&candidate) {
            variants.push(candidate);
        }
    };

    push(url.to_string());
    push(toggle_slash(url));

    let swapped = if let Some(rest) = url.strip_prefix("https://") {
        format!("http://{rest}")
    } else if let Some(rest) = url.strip_prefix("http://") {
        format!("https://{rest}")
    } else {
        format!("https://{url}")
    };
    push(swapped.clone());
    push(toggle_slash(&swapped));

    variants
}

fn toggle_slash(url: &str) -> String {
    match url.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => format!("{url}/"),
    }
}

/// A JSON array, or an object's `items`/`data` array (first present
/// wins). Anything else is an empty corpus.
pub fn normalize_payload(payload: &Value) -> Vec<Message> {
    let items = match payload {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => map
            .get("items")
            .or_else(|| map.get("data"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    };

    items.iter().map(normalize_item).collect()
}

/// Map one upstream item by first-present-key priority. Malformed items
/// are never fatal; missing fields become empty.
pub fn normalize_item(item: &Value) -> Message {
    Message {
        id: first_present(item, &["id", "_id", "message_id"]).unwrap_or_default(),
        member_name: first_present(item, &["member_name", "member", "name", "user_name"])
            .unwrap_or_default(),
        text: first_present(item, &["text", "message", "body"]).unwrap_or_default(),
        timestamp: first_present(item, &["timestamp"]),
    }
}

/// First key that is present and usable: strings verbatim, numbers
/// stringified, null and anything else skipped.
fn first_present(item: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        match item.get(key) {
            Some(Value::String(s)) => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => continue,
        }
    }
    None
}
