//! Configuration file parsing for the API server.
//!
//! Loads settings from TOML files including bind address, database path,
//! CORS origins, upload limits, and LLM provider settings.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use voxpop_analyzer::AnalyzerConfig;

/// API configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// API server configuration loaded from TOML
///
/// Every field has a default, so an empty file (or no file at all) yields a
/// runnable local configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 8000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// SQLite database path
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Origins allowed by the CORS layer
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Upper bound on a request body, uploads included (bytes)
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// LLM provider settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Analyzer settings
    #[serde(default)]
    pub analysis: AnalyzerConfig,
}

/// LLM provider settings
///
/// Every field is optional; unset fields fall back to the environment and
/// then to built-in defaults (see the resolution rules in voxpop-llm).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LlmSettings {
    /// Explicit API key; takes precedence over GEMINI_API_KEY / GOOGLE_API_KEY
    pub api_key: Option<String>,

    /// Model name; takes precedence over GEMINI_MODEL
    pub model: Option<String>,

    /// Sampling temperature
    pub temperature: Option<f64>,

    /// API endpoint override (test servers, regional endpoints)
    pub endpoint: Option<String>,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    8000
}

fn default_database_path() -> String {
    "voxpop.db".to_string()
}

/// Default CORS origins: the local Vite dev server
fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}

/// Default upload cap: 10 MiB
fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            database_path: default_database_path(),
            cors_origins: default_cors_origins(),
            max_upload_bytes: default_max_upload_bytes(),
            llm: LlmSettings::default(),
            analysis: AnalyzerConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ApiConfig = toml::from_str(&contents)?;

        config.analysis.validate().map_err(ConfigError::Invalid)?;
        if config.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_upload_bytes must be greater than 0".to_string(),
            ));
        }

        Ok(config)
    }

    /// Create a default configuration for testing (in-memory database)
    pub fn default_test_config() -> Self {
        ApiConfig {
            database_path: ":memory:".to_string(),
            ..ApiConfig::default()
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 8000);
        assert_eq!(config.database_path, "voxpop.db");
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:5173", "http://127.0.0.1:5173"]
        );
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.llm.api_key, None);
    }

    #[test]
    fn test_bind_addr() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: ApiConfig = toml::from_str("").unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.cors_origins.len(), 2);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            database_path = "/var/lib/voxpop/interviews.db"
            cors_origins = ["https://research.example.com"]
            max_upload_bytes = 1048576

            [llm]
            api_key = "config-key"
            model = "gemini-1.5-pro"
            temperature = 0.4

            [analysis]
            product_description = "a field-service scheduling app"
        "#;

        let config: ApiConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.database_path, "/var/lib/voxpop/interviews.db");
        assert_eq!(config.cors_origins, vec!["https://research.example.com"]);
        assert_eq!(config.max_upload_bytes, 1_048_576);
        assert_eq!(config.llm.api_key.as_deref(), Some("config-key"));
        assert_eq!(config.llm.model.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(config.llm.temperature, Some(0.4));
        assert_eq!(config.llm.endpoint, None);
        assert_eq!(
            config.analysis.product_description,
            "a field-service scheduling app"
        );
    }

    #[test]
    fn test_partial_llm_section() {
        let toml = r#"
            [llm]
            model = "gemini-1.5-flash-8b"
        "#;

        let config: ApiConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.llm.model.as_deref(), Some("gemini-1.5-flash-8b"));
        assert_eq!(config.llm.api_key, None);
    }
}
