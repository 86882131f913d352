//! Interview module - the persisted record of one analysis request

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored interview: combined transcript plus the serialized analysis
///
/// Interviews are created once per request and never mutated. The structured
/// insight values are not persisted; only the rendered analysis text survives,
/// in `analysis`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    /// Auto-assigned identifier (SQLite rowid)
    pub id: i64,

    /// Human-readable title; defaults derive from the first uploaded filename
    pub title: String,

    /// Combined transcript text
    ///
    /// For uploads this is the per-file texts, each prefixed with a
    /// `===== <filename> =====` header line, joined by blank lines. For typed
    /// input it is the submitted transcript verbatim.
    pub transcript: String,

    /// Rendered analysis text, or the fixed no-insights message
    ///
    /// `None` when the typed-transcript path's single LLM call failed.
    pub analysis: Option<String>,

    /// When the record was created (set by the database)
    pub created_at: DateTime<Utc>,
}

/// The fields supplied when creating an interview
///
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInterview {
    /// Title for the stored record
    pub title: String,

    /// Combined transcript text
    pub transcript: String,

    /// Rendered analysis text, if analysis produced one
    pub analysis: Option<String>,
}

impl NewInterview {
    /// Bundle the fields for a store insert
    pub fn new(title: String, transcript: String, analysis: Option<String>) -> Self {
        Self {
            title,
            transcript,
            analysis,
        }
    }
}
