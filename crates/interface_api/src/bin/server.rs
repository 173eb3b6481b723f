//! FNOL Router - API Server Binary
//!
//! This binary starts the HTTP API that extracts, validates and routes
//! First Notice of Loss documents.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin fnol-api
//!
//! # Run with environment variables
//! FNOL_PORT=9000 OPENAI_API_KEY=... cargo run --bin fnol-api
//! ```
//!
//! # Environment Variables
//!
//! * `FNOL_HOST` - Server host (default: 0.0.0.0)
//! * `FNOL_PORT` - Server port (default: 8080)
//! * `FNOL_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `FNOL_LOG_JSON` - Emit JSON log lines (default: false)
//! * `FNOL_MAX_UPLOAD_BYTES` - Request body limit (default: 10 MiB)
//! * `FNOL_LLM__BASE_URL` - OpenAI-compatible API base URL
//! * `FNOL_LLM__MODEL` - Model name
//! * `FNOL_LLM__API_KEY` or `OPENAI_API_KEY` - Model API key

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use infra_extraction::OpenAiCompatClient;
use interface_api::{config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// # Errors
///
/// Returns an error if the model client cannot be built or the server
/// fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level, config.log_json);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        model = %config.llm.model,
        "Starting FNOL Router API Server"
    );

    if !config.llm.has_api_key() {
        tracing::warn!("No model API key configured, extraction requests will fail");
    }

    let client = OpenAiCompatClient::new(config.llm.clone())
        .context("Failed to create model client")?;

    let app = create_router(&config, Arc::new(client));

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to defaults if the environment cannot be parsed.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Invalid configuration ({e}), using defaults");
        ApiConfig::default()
    })
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (plain, json) = if json {
        (None, Some(fmt::layer().json().with_target(true)))
    } else {
        (Some(fmt::layer().with_target(true)), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(plain)
        .with(json)
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
