//! Voxpop API
//!
//! HTTP server for customer interview analysis: upload interview documents or
//! post a typed transcript, get back the stored record with its insight
//! report, and browse past interviews.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ApiConfig;
use handlers::{create_router, AppState};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use voxpop_analyzer::Analyzer;
use voxpop_llm::{resolve_api_key, resolve_model, GeminiProvider};
use voxpop_store::SqliteStore;

/// API server error
#[derive(Debug, thiserror::Error)]
pub enum ApiServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Storage error
    #[error("Storage error: {0}")]
    Store(#[from] voxpop_store::StoreError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the API HTTP server
///
/// Opens the database, builds the Gemini-backed analyzer, and serves until
/// the process is stopped.
pub async fn start_server(config: ApiConfig) -> Result<(), ApiServerError> {
    // Initialize tracing, RUST_LOG overriding the "info" default
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Voxpop API");
    info!("Bind address: {}", config.bind_addr());
    info!("Database path: {}", config.database_path);

    let store = SqliteStore::new(&config.database_path)?;

    let api_key = resolve_api_key(config.llm.api_key.clone());
    if api_key.is_none() {
        warn!("No Gemini API key configured; analysis calls will fail");
    }
    let model = resolve_model(config.llm.model.clone());
    info!("LLM model: {}", model);

    let mut provider = GeminiProvider::new(api_key, model);
    if let Some(endpoint) = &config.llm.endpoint {
        provider = provider.with_endpoint(endpoint.clone());
    }
    if let Some(temperature) = config.llm.temperature {
        provider = provider.with_temperature(temperature);
    }

    let state = AppState {
        store: Arc::new(Mutex::new(store)),
        analyzer: Arc::new(Analyzer::new(provider, config.analysis.clone())),
    };

    let app = create_router(state, &config);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("API listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ApiServerError::Server(e.to_string()))?;

    Ok(())
}
