//! HTTP client for the mqad daemon.

use anyhow::{anyhow, Context, Result};
use mqa_common::answer::AnswerResult;
use mqa_common::api::{
    AskRequest, CorpusStats, FindResponse, HealthResponse, NamesResponse, RefreshResponse,
    SearchResponse,
};
use mqa_common::DEFAULT_DAEMON_URL;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for the daemon's HTTP API.
///
/// Base URL resolution: `--url` flag, then `MQAD_URL`, then the default
/// local address.
pub struct DaemonClient {
    http: reqwest::Client,
    base_url: String,
}

impl DaemonClient {
    pub fn new(url_flag: Option<String>) -> Result<Self> {
        let base_url = url_flag
            .or_else(|| std::env::var("MQAD_URL").ok())
            .unwrap_or_else(|| DEFAULT_DAEMON_URL.to_string());

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    pub async fn ask(&self, question: &str) -> Result<AnswerResult> {
        let url = format!("{}/ask", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&AskRequest {
                question: question.to_string(),
            })
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;
        Self::decode(response).await
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        self.get("/healthz", &[]).await
    }

    pub async fn refresh(&self) -> Result<RefreshResponse> {
        let url = format!("{}/cache/refresh", self.base_url);
        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;
        Self::decode(response).await
    }

    pub async fn search(&self, q: &str) -> Result<SearchResponse> {
        self.get("/debug/search", &[("q", q)]).await
    }

    pub async fn names(&self) -> Result<NamesResponse> {
        self.get("/debug/names", &[]).await
    }

    pub async fn find(&self, member: &str, q: &str) -> Result<FindResponse> {
        self.get("/debug/find", &[("member", member), ("q", q)]).await
    }

    pub async fn stats(&self) -> Result<CorpusStats> {
        self.get("/debug/stats", &[]).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(anyhow!("Daemon returned {status}: {detail}"));
        }
        response
            .json::<T>()
            .await
            .context("Failed to decode daemon response")
    }

    fn unreachable(&self, e: reqwest::Error) -> anyhow::Error {
        anyhow!(
            "Cannot reach the daemon at {}: {}\n\n\
             Is mqad running? Start it, or point this tool at it with\n\
             --url or the MQAD_URL environment variable.",
            self.base_url,
            e
        )
    }
}
