//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No API key available
    #[error("No API key configured. Pass --api-key or set GEMINI_API_KEY.")]
    MissingApiKey,

    /// A file passed on the command line could not be read
    #[error("Cannot read {0}: {1}")]
    FileRead(String, std::io::Error),

    /// Analysis pipeline error
    #[error("Analysis error: {0}")]
    Analysis(#[from] voxpop_analyzer::AnalyzerError),

    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] voxpop_store::StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Interview not found
    #[error("Interview not found: {0}")]
    NotFound(i64),
}
