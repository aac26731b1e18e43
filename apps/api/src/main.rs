mod config;
mod errors;
mod llm_client;
mod notes;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::notes::generator::NoteGenerator;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing OPENAI_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Nursing Notes API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client; the key is handed over here and nowhere else
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        &config.openai_base_url,
        config.openai_model.clone(),
        config.llm_timeout,
    )
    .context("Failed to build HTTP client")?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm.model(),
        config.llm_timeout.as_secs()
    );

    let state = AppState {
        generator: Arc::new(NoteGenerator::new(Arc::new(llm))),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins once the deployment host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
