//! Gemini Provider Implementation
//!
//! Integration with Google's Generative Language REST API
//! (`models/{model}:generateContent`).
//!
//! # Features
//!
//! - Async HTTP communication with the Generative Language API
//! - Configurable endpoint, model, and sampling temperature
//! - Key and model resolution with environment fallbacks
//! - Timeout handling
//!
//! One request per completion. A failed call surfaces as an `LlmError` and is
//! never retried here.
//!
//! # Examples
//!
//! ```no_run
//! use voxpop_llm::GeminiProvider;
//!
//! // Resolve key and model from the environment
//! let provider = GeminiProvider::from_env();
//!
//! // Or configure explicitly
//! let provider = GeminiProvider::new(Some("api-key".to_string()), "gemini-1.5-flash");
//! ```

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use voxpop_domain::traits::LlmProvider as LlmProviderTrait;

use crate::LlmError;

/// Default Generative Language API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model when neither configuration nor environment names one
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default sampling temperature (low, for stable tagged output)
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Default timeout for LLM requests (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Resolve the API key to use
///
/// Precedence: explicit value, then `GEMINI_API_KEY`, then `GOOGLE_API_KEY`.
/// Empty strings count as absent. `None` means calls will fail with
/// [`LlmError::MissingApiKey`]; the provider can still be constructed.
pub fn resolve_api_key(explicit: Option<String>) -> Option<String> {
    explicit
        .filter(|key| !key.is_empty())
        .or_else(|| env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty()))
        .or_else(|| env::var("GOOGLE_API_KEY").ok().filter(|key| !key.is_empty()))
}

/// Resolve the model name to use
///
/// Precedence: explicit value, then `GEMINI_MODEL`, then [`DEFAULT_MODEL`].
pub fn resolve_model(explicit: Option<String>) -> String {
    explicit
        .filter(|model| !model.is_empty())
        .or_else(|| env::var("GEMINI_MODEL").ok().filter(|model| !model.is_empty()))
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

/// Gemini API provider
///
/// This provider sends a single `generateContent` request per completion and
/// normalizes the response body to plain text.
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    temperature: f64,
    client: reqwest::Client,
}

/// Request body for the generateContent API
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Parameters
    ///
    /// - `api_key`: already-resolved API key; `None` makes every call fail
    ///   with [`LlmError::MissingApiKey`]
    /// - `model`: model to use (e.g., "gemini-1.5-flash")
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key,
            temperature: DEFAULT_TEMPERATURE,
            client,
        }
    }

    /// Create a provider from the environment alone
    ///
    /// Key and model follow [`resolve_api_key`] and [`resolve_model`].
    pub fn from_env() -> Self {
        Self::new(resolve_api_key(None), resolve_model(None))
    }

    /// Override the API endpoint (test servers, regional endpoints)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the sampling temperature
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// The model this provider targets
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn request_completion(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, api_key
        );

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::ApiStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(extract_text(&body))
    }
}

/// Pull the completion text out of a generateContent response body
///
/// Prefers the first candidate's part texts, concatenated. A bare JSON string
/// body is used as-is; any other shape is stringified, so downstream parsing
/// still sees line-oriented text it can reject.
fn extract_text(body: &Value) -> String {
    if let Some(parts) = body
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)
    {
        let texts: Vec<&str> = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect();
        if !texts.is_empty() {
            return texts.concat();
        }
    }

    match body {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl LlmProviderTrait for GeminiProvider {
    type Error = LlmError;

    async fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        debug!(model = %self.model, prompt_chars = prompt.len(), "Requesting completion");
        self.request_completion(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_provider_creation() {
        let provider = GeminiProvider::new(Some("key".to_string()), "gemini-1.5-flash");
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model, "gemini-1.5-flash");
        assert_eq!(provider.temperature, DEFAULT_TEMPERATURE);
    }

    #[test]
    fn test_gemini_provider_builders() {
        let provider = GeminiProvider::new(None, DEFAULT_MODEL)
            .with_endpoint("http://localhost:8099")
            .with_temperature(0.7);

        assert_eq!(provider.endpoint, "http://localhost:8099");
        assert_eq!(provider.temperature, 0.7);
    }

    #[test]
    fn test_api_key_resolution_precedence() {
        std::env::set_var("GEMINI_API_KEY", "gemini-env-key");
        std::env::set_var("GOOGLE_API_KEY", "google-env-key");

        assert_eq!(
            resolve_api_key(Some("explicit-key".to_string())),
            Some("explicit-key".to_string())
        );
        assert_eq!(resolve_api_key(None), Some("gemini-env-key".to_string()));

        std::env::remove_var("GEMINI_API_KEY");
        assert_eq!(resolve_api_key(None), Some("google-env-key".to_string()));

        std::env::remove_var("GOOGLE_API_KEY");
        assert_eq!(resolve_api_key(None), None);
        assert_eq!(resolve_api_key(Some(String::new())), None);
    }

    #[test]
    fn test_model_resolution_precedence() {
        std::env::set_var("GEMINI_MODEL", "gemini-env-model");

        assert_eq!(
            resolve_model(Some("gemini-1.5-pro".to_string())),
            "gemini-1.5-pro"
        );
        assert_eq!(resolve_model(None), "gemini-env-model");

        std::env::remove_var("GEMINI_MODEL");
        assert_eq!(resolve_model(None), DEFAULT_MODEL);
    }

    #[test]
    fn test_extract_text_concatenates_candidate_parts() {
        let body = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "#pain \"it is slow\"" },
                        { "text": " - startup lags (frustrated)" }
                    ]
                }
            }]
        });

        assert_eq!(
            extract_text(&body),
            "#pain \"it is slow\" - startup lags (frustrated)"
        );
    }

    #[test]
    fn test_extract_text_bare_string_body() {
        let body = serde_json::json!("#insight plain string body");
        assert_eq!(extract_text(&body), "#insight plain string body");
    }

    #[test]
    fn test_extract_text_stringifies_unknown_shapes() {
        let body = serde_json::json!({ "error": { "message": "quota exhausted" } });
        let text = extract_text(&body);
        assert!(text.contains("quota exhausted"));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let provider = GeminiProvider::new(None, DEFAULT_MODEL);
        let result = provider.complete("test").await;
        assert!(matches!(result, Err(LlmError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_gemini_error_handling() {
        // Unreachable endpoint to trigger a transport error
        let provider = GeminiProvider::new(Some("test-key".to_string()), DEFAULT_MODEL)
            .with_endpoint("http://127.0.0.1:1");

        let result = provider.complete("test").await;
        match result {
            Err(LlmError::Communication(_)) => {}
            other => panic!("Expected Communication error, got {:?}", other),
        }
    }
}
