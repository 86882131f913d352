//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use async_trait::async_trait;

use crate::{Interview, NewInterview};

/// Trait for LLM completion providers
///
/// Implemented by the infrastructure layer (voxpop-llm)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Error type for provider operations
    type Error;

    /// Generate a text completion for a prompt
    ///
    /// One call, one attempt. Callers decide how a failure degrades.
    async fn complete(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// Trait for storing and retrieving interview records
///
/// Implemented by the infrastructure layer (voxpop-store)
pub trait InterviewStore {
    /// Error type for store operations
    type Error;

    /// Insert a new interview and return the stored record with its id
    fn create_interview(&mut self, interview: NewInterview) -> Result<Interview, Self::Error>;

    /// Get an interview by id
    fn get_interview(&self, id: i64) -> Result<Option<Interview>, Self::Error>;

    /// List all interviews, newest first
    fn list_interviews(&self) -> Result<Vec<Interview>, Self::Error>;
}
