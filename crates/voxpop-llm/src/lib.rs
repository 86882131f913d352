//! Voxpop LLM Provider Layer
//!
//! Pluggable LLM provider implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from
//! `voxpop-domain`. Providers make exactly one completion attempt per call;
//! retry policy belongs to callers, and the analysis pipeline deliberately
//! treats a failed call as "this document yielded nothing".
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google Generative Language API integration
//!
//! # Examples
//!
//! ```
//! use voxpop_llm::MockProvider;
//! use voxpop_domain::traits::LlmProvider;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let provider = MockProvider::new("Hello from the model!");
//! let result = provider.complete("test prompt").await.unwrap();
//! assert_eq!(result, "Hello from the model!");
//! # });
//! ```

#![warn(missing_docs)]

pub mod gemini;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;
use voxpop_domain::traits::LlmProvider as LlmProviderTrait;

pub use gemini::{resolve_api_key, resolve_model, GeminiProvider};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// API rejected the request with a non-success status
    #[error("API error (HTTP {status}): {message}")]
    ApiStatus {
        /// HTTP status code returned by the API
        status: u16,
        /// Response body, as far as it could be read
        message: String,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// No API key was configured or found in the environment
    #[error("Missing API key")]
    MissingApiKey,

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network
/// calls. Responses are keyed by prompt fragment: the first registered
/// fragment found inside the incoming prompt wins. Analysis prompts embed the
/// transcript, so tests key responses on a distinctive phrase from the
/// document under test.
///
/// # Examples
///
/// ```
/// use voxpop_llm::MockProvider;
/// use voxpop_domain::traits::LlmProvider;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut provider = MockProvider::new("Fallback response");
/// provider.add_response("alpha", "#pain \"it is slow\"");
/// provider.add_response("beta", "no insights here");
///
/// assert_eq!(
///     provider.complete("transcript about alpha").await.unwrap(),
///     "#pain \"it is slow\"",
/// );
/// assert_eq!(provider.complete("unrelated").await.unwrap(), "Fallback response");
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<Vec<(String, String)>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a response for prompts containing the given fragment
    ///
    /// Fragments are checked in registration order; the first match wins.
    pub fn add_response(&mut self, fragment: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push((fragment.into(), response.into()));
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }

    /// Configure an error for prompts containing the given fragment
    pub fn add_error(&mut self, fragment: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push((fragment.into(), "ERROR".to_string()));
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    async fn complete(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        for (fragment, response) in responses.iter() {
            if prompt.contains(fragment.as_str()) {
                if response == "ERROR" {
                    return Err(LlmError::Other("Mock error".to_string()));
                }
                return Ok(response.clone());
            }
        }

        Ok(self.default_response.clone())
    }
}
