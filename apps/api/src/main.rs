mod config;
mod errors;
mod evaluator;
mod github;
mod llm_client;
mod review;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::github::GithubClient;
use crate::llm_client::LlmClient;
use crate::review::LlmNarrativeReviewer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting GitGauge API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize GitHub client
    let github = GithubClient::new(config.github_token.clone());
    info!("GitHub client initialized");

    // Initialize narrative reviewer
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    let reviewer = Arc::new(LlmNarrativeReviewer::new(llm));
    info!("Narrative reviewer initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState { github, reviewer };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
