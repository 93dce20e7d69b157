mod advisory;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::ollama::OllamaClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Insurance Adequacy Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    let timeout = Duration::from_secs(config.llm_timeout_secs);

    // Hosted model
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; hosted model calls will fail until it is configured");
    }
    let llm = LlmClient::new(
        config.openai_base_url.clone(),
        config.openai_model.clone(),
        config.openai_api_key.clone(),
        timeout,
    )?;
    info!("LLM client initialized (model: {})", config.openai_model);

    // Local model
    let local_llm = OllamaClient::new(config.ollama_url.clone(), config.ollama_model.clone(), timeout)?;
    info!(
        "Local model client initialized ({} at {})",
        config.ollama_model, config.ollama_url
    );

    let state = AppState {
        llm: Arc::new(llm),
        local_llm: Arc::new(local_llm),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
