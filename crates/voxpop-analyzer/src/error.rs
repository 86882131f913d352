//! Error types for the Analyzer

use thiserror::Error;

/// Errors that can occur during analysis
///
/// Per-document failures are absorbed by the pipeline (the document is
/// recorded as irrelevant); only `NoExtractableContent` surfaces from
/// [`Analyzer::analyze_documents`].
///
/// [`Analyzer::analyze_documents`]: crate::Analyzer::analyze_documents
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// LLM completion error
    #[error("Completion error: {0}")]
    Completion(String),

    /// No uploaded file yielded any extractable text
    #[error("No extractable text in any uploaded file")]
    NoExtractableContent,
}
