//! Member QA daemon.
//!
//! Answers natural-language questions about member messages over HTTP.

use anyhow::Result;
use mqad::cache::SystemClock;
use mqad::config::Config;
use mqad::metrics::PipelineMetrics;
use mqad::pipeline::QaPipeline;
use mqad::retriever::MessageStore;
use mqad::server::{self, AppState};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("mqad v{} starting", mqa_common::VERSION);

    let config = Config::load();
    info!(
        upstream = %config.upstream.messages_url,
        cache_ttl_secs = config.upstream.cache_ttl_secs,
        "configuration loaded"
    );

    let metrics = Arc::new(PipelineMetrics::new());
    let store = Arc::new(MessageStore::new(
        config.upstream.messages_url.clone(),
        Duration::from_secs(config.upstream.http_timeout_secs),
        Duration::from_secs(config.upstream.cache_ttl_secs),
        Arc::new(SystemClock),
        Arc::clone(&metrics),
    )?);
    let pipeline = Arc::new(QaPipeline::new(Arc::clone(&store), Arc::clone(&metrics)));

    let state = AppState::new(store, pipeline, metrics);
    server::run(&config, state).await
}
