//! Configuration for the Analyzer

use serde::{Deserialize, Serialize};

/// Product description substituted when a request does not carry one
pub const DEFAULT_PRODUCT_DESCRIPTION: &str = "an early-stage software product";

/// Configuration for the Analyzer
///
/// Resolved once at construction; requests may still override the product
/// description per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Product description used when the request does not supply one
    pub product_description: String,
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.product_description.is_empty() {
            return Err("product_description must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            product_description: DEFAULT_PRODUCT_DESCRIPTION.to_string(),
        }
    }
}
