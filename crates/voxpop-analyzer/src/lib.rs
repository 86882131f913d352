//! Voxpop Analyzer
//!
//! Turns uploaded customer interview documents into a structured insight report.
//!
//! # Overview
//!
//! The Analyzer is the core pipeline of Voxpop. It extracts text from each
//! uploaded document, asks an LLM to read it as a customer interview, parses
//! the tagged insight lines the model returns, and aggregates everything into
//! one report annotated with source filenames.
//!
//! # Architecture
//!
//! ```text
//! Bytes → Text extraction → Prompt → LLM → Parser → Aggregator → Report
//! ```
//!
//! # Key Features
//!
//! - **Per-Document Analysis**: Each file is prompted and parsed independently
//! - **Forgiving Parsing**: Malformed model output degrades to fewer insights, never errors
//! - **Irrelevant File Tracking**: Files yielding no insights are listed, not dropped silently
//! - **Failure Absorption**: A failed completion costs one document, not the request
//!
//! # Example Usage
//!
//! ```no_run
//! use voxpop_analyzer::{Analyzer, AnalyzerConfig, SourceDocument};
//! use voxpop_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new("#pain \"I always forget things\" – No reminder exists");
//! let analyzer = Analyzer::new(llm, AnalyzerConfig::default());
//!
//! let documents = vec![SourceDocument::new(
//!     "call.txt",
//!     b"Customer: honestly, I always forget things.".to_vec(),
//! )];
//!
//! let result = analyzer.analyze_documents(&documents, None).await?;
//!
//! println!("{}", result.report);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod document;
mod prompt;
mod parser;
mod report;
mod analyzer;


pub use error::AnalyzerError;
pub use config::{AnalyzerConfig, DEFAULT_PRODUCT_DESCRIPTION};
pub use types::{InterviewAnalysis, SourceDocument};
pub use document::text_from_file;
pub use parser::parse_insights;
pub use report::{aggregate, no_insights_message, render_analysis, NO_INSIGHTS_MESSAGE};
pub use analyzer::Analyzer;
