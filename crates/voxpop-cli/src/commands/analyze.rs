//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::fs;
use std::path::{Path, PathBuf};
use voxpop_analyzer::{Analyzer, AnalyzerConfig, SourceDocument};
use voxpop_domain::{InterviewStore, NewInterview};
use voxpop_llm::{resolve_api_key, resolve_model, GeminiProvider};

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    db_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    let api_key = resolve_api_key(args.api_key);
    if api_key.is_none() {
        return Err(CliError::MissingApiKey);
    }

    let documents = read_documents(&args.files)?;

    // Clap guarantees at least one file
    let title = args
        .title
        .unwrap_or_else(|| documents[0].filename.clone());

    let provider = GeminiProvider::new(api_key, resolve_model(args.model));
    let analyzer = Analyzer::new(provider, AnalyzerConfig::default());

    let outcome = analyzer
        .analyze_documents(&documents, args.product_description.as_deref())
        .await?;

    let saved_id = if args.save {
        let mut store = super::open_store(db_path)?;
        let interview = store.create_interview(NewInterview::new(
            title.clone(),
            outcome.transcript.clone(),
            Some(outcome.report.clone()),
        ))?;
        Some(interview.id)
    } else {
        None
    };

    println!(
        "{}",
        formatter.format_report(&title, &outcome.report, saved_id)?
    );

    Ok(())
}

/// Read the given files into source documents, preserving argument order.
fn read_documents(paths: &[PathBuf]) -> Result<Vec<SourceDocument>> {
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let content = fs::read(path)
            .map_err(|e| CliError::FileRead(path.display().to_string(), e))?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        documents.push(SourceDocument::new(filename, content));
    }

    Ok(documents)
}
