//! Request and result types for analysis

use voxpop_domain::AggregatedAnalysis;

/// One uploaded document awaiting analysis
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Filename label the document was uploaded under
    pub filename: String,

    /// Raw uploaded bytes
    pub content: Vec<u8>,
}

impl SourceDocument {
    /// Bundle a filename and its raw bytes
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }
}

/// Result of analyzing one request's worth of documents
#[derive(Debug, Clone)]
pub struct InterviewAnalysis {
    /// Combined transcript: header-prefixed per-file texts, blank-line joined
    ///
    /// Only documents that yielded text appear here.
    pub transcript: String,

    /// Rendered analysis text, or the fixed no-insights message
    pub report: String,

    /// The structured aggregate the report was rendered from
    pub analysis: AggregatedAnalysis,
}
