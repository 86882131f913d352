//! Interview analyzer orchestration
//!
//! Drives the full pipeline for one request: extract text from each uploaded
//! document, prompt the model per document, parse and aggregate the insights,
//! and render the stored report.

use std::sync::Arc;

use tracing::{debug, info, warn};
use voxpop_domain::{AggregatedAnalysis, Insight, LlmProvider};

use crate::config::AnalyzerConfig;
use crate::document::text_from_file;
use crate::error::AnalyzerError;
use crate::parser::parse_insights;
use crate::prompt::PromptBuilder;
use crate::report::{aggregate, no_insights_message, render_analysis};
use crate::types::{InterviewAnalysis, SourceDocument};

/// Interview analyzer, generic over the LLM provider
///
/// A failed completion never fails the request; the affected document simply
/// contributes no insights and ends up listed as irrelevant.
pub struct Analyzer<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: AnalyzerConfig,
}

impl<L> Analyzer<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    /// Create a new analyzer with the given provider and configuration
    pub fn new(llm_provider: L, config: AnalyzerConfig) -> Self {
        Self {
            llm_provider: Arc::new(llm_provider),
            config,
        }
    }

    /// Analyze a batch of uploaded documents
    ///
    /// Documents are processed in upload order. Files with no extractable
    /// text are marked irrelevant without a completion call; the error case
    /// is reserved for a batch where no file yielded any text at all.
    pub async fn analyze_documents(
        &self,
        documents: &[SourceDocument],
        product_description: Option<&str>,
    ) -> Result<InterviewAnalysis, AnalyzerError> {
        info!(files = documents.len(), "Starting interview analysis");

        let mut transcript_parts: Vec<String> = Vec::new();
        let mut per_file: Vec<(String, Vec<Insight>)> = Vec::new();

        for document in documents {
            let text = text_from_file(&document.filename, &document.content);
            if text.is_empty() {
                info!(filename = %document.filename, "No text extracted, marking irrelevant");
                per_file.push((document.filename.clone(), Vec::new()));
                continue;
            }

            transcript_parts.push(format!("===== {} =====\n{}", document.filename, text));

            let insights = self.analyze_text(&text, product_description).await;
            debug!(
                filename = %document.filename,
                insights = insights.len(),
                "Document analyzed"
            );
            per_file.push((document.filename.clone(), insights));
        }

        if transcript_parts.is_empty() {
            return Err(AnalyzerError::NoExtractableContent);
        }

        let analysis = aggregate(per_file);
        let report = if analysis.is_empty() {
            no_insights_message(&analysis.irrelevant_files)
        } else {
            render_analysis(&analysis)
        };

        info!(
            insights = analysis.insights.len(),
            irrelevant = analysis.irrelevant_files.len(),
            "Interview analysis complete"
        );

        Ok(InterviewAnalysis {
            transcript: transcript_parts.join("\n\n"),
            report,
            analysis,
        })
    }

    /// Analyze an already-assembled transcript
    ///
    /// Used when an interview arrives as plain text rather than as file
    /// uploads. Returns `None` for a blank transcript or a failed completion,
    /// leaving the interview stored without an analysis.
    pub async fn analyze_transcript(
        &self,
        transcript: &str,
        product_description: Option<&str>,
    ) -> Option<String> {
        if transcript.trim().is_empty() {
            return None;
        }

        let prompt = self.build_prompt(transcript, product_description);
        let response = match self.call_llm(&prompt).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Completion failed, interview stored without analysis");
                return None;
            }
        };

        let analysis = AggregatedAnalysis {
            insights: parse_insights(Some(&response)),
            irrelevant_files: Vec::new(),
        };

        if analysis.is_empty() {
            Some(no_insights_message(&[]))
        } else {
            Some(render_analysis(&analysis))
        }
    }

    /// Prompt the model for one document's text and parse the result
    async fn analyze_text(&self, text: &str, product_description: Option<&str>) -> Vec<Insight> {
        let prompt = self.build_prompt(text, product_description);

        match self.call_llm(&prompt).await {
            Ok(response) => parse_insights(Some(&response)),
            Err(e) => {
                warn!(error = %e, "Completion failed, document contributes no insights");
                Vec::new()
            }
        }
    }

    fn build_prompt(&self, transcript: &str, product_description: Option<&str>) -> String {
        let description = product_description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&self.config.product_description);

        PromptBuilder::new(transcript.to_string())
            .with_product_description(description)
            .build()
    }

    /// One completion attempt; the provider's own HTTP timeout is the only bound
    async fn call_llm(&self, prompt: &str) -> Result<String, AnalyzerError> {
        debug!(prompt_chars = prompt.len(), "Requesting completion");

        let response = self
            .llm_provider
            .complete(prompt)
            .await
            .map_err(|e| AnalyzerError::Completion(e.to_string()))?;

        debug!(response_chars = response.len(), "Received completion");
        Ok(response)
    }
}
