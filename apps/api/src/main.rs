mod analysis;
mod config;
mod errors;
mod humanize;
mod language;
mod llm_client;
mod routes;
mod state;
mod tailor;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::tailor::generator::{LlmGenerator, StubGenerator, TextGenerator};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on an inconsistent environment)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResumeKit API v{}", env!("CARGO_PKG_VERSION"));

    // Pick the tailoring backend: stub by default, LLM when configured
    let generator: Arc<dyn TextGenerator> = match config.anthropic_api_key.as_deref() {
        Some(api_key) if config.tailor_use_llm => {
            info!("Tailoring backend: LLM (model: {})", llm_client::MODEL);
            Arc::new(LlmGenerator(LlmClient::new(api_key.to_string())))
        }
        _ => {
            info!("Tailoring backend: deterministic stub");
            Arc::new(StubGenerator)
        }
    };

    let state = AppState {
        config: config.clone(),
        generator,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
