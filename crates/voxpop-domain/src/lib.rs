//! Voxpop Domain Layer
//!
//! This crate contains the core domain model for voxpop, a customer-interview
//! analysis system. It defines the fundamental value objects and the trait
//! interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Insight**: One categorized observation parsed from an LLM's analysis of
//!   a transcript (quote, interpretation, emotion, source file)
//! - **InsightCategory**: The closed set of tags the analysis grammar accepts
//!   (pain, feature, bug, feedback, insight)
//! - **AggregatedAnalysis**: All insights from one request plus the files that
//!   yielded none
//! - **Interview**: The persisted record - title, combined transcript, and the
//!   serialized analysis text
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - Value objects and pure helpers only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions (LLM provider, store)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod insight;
pub mod interview;
pub mod traits;

// Re-exports for convenience
pub use insight::{AggregatedAnalysis, Insight, InsightCategory};
pub use interview::{Interview, NewInterview};
pub use traits::{InterviewStore, LlmProvider};
