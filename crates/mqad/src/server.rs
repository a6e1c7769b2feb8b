//! HTTP server for mqad.

use crate::config::Config;
use crate::metrics::PipelineMetrics;
use crate::pipeline::QaPipeline;
use crate::retriever::MessageStore;
use crate::routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers.
pub struct AppState {
    pub store: Arc<MessageStore>,
    pub pipeline: Arc<QaPipeline>,
    pub metrics: Arc<PipelineMetrics>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        store: Arc<MessageStore>,
        pipeline: Arc<QaPipeline>,
        metrics: Arc<PipelineMetrics>,
    ) -> Self {
        Self {
            store,
            pipeline,
            metrics,
            start_time: Instant::now(),
        }
    }
}

/// Run the HTTP server until the process is stopped.
pub async fn run(config: &Config, state: AppState) -> Result<()> {
    let state = Arc::new(state);

    let app = Router::new()
        .merge(routes::ask_routes())
        .merge(routes::ops_routes())
        .merge(routes::debug_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!("Listening on http://{}", config.server.bind);

    axum::serve(listener, app).await?;
    Ok(())
}
