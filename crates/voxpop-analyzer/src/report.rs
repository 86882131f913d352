//! Aggregation and report rendering
//!
//! Merges per-document parse results into one [`AggregatedAnalysis`] and
//! renders it back to the line-oriented display form stored with the
//! interview. Rendering is the inverse of parsing for every field except the
//! `[file: ...]` suffix, which only exists in the display form.

use voxpop_domain::{AggregatedAnalysis, Insight};

/// Report text used when no document yielded a single insight
pub const NO_INSIGHTS_MESSAGE: &str =
    "Analysis can't be conducted: no insights were found in the uploaded files.";

const IRRELEVANT_FILES_HEADER: &str =
    "Irrelevant files (not interview transcripts or yielded no insights):";

/// Merge per-document insights into a single analysis
///
/// Documents arrive in upload order and their insights keep that order. A
/// document with no insights contributes its filename to `irrelevant_files`
/// instead, sorted and deduplicated.
pub fn aggregate(per_file: Vec<(String, Vec<Insight>)>) -> AggregatedAnalysis {
    let mut analysis = AggregatedAnalysis::default();

    for (filename, insights) in per_file {
        if insights.is_empty() {
            analysis.irrelevant_files.push(filename);
            continue;
        }
        for mut insight in insights {
            insight.source_filename = Some(filename.clone());
            analysis.insights.push(insight);
        }
    }

    analysis.irrelevant_files.sort();
    analysis.irrelevant_files.dedup();
    analysis
}

/// Render an analysis to its display form
///
/// One line per insight; when any files were irrelevant, a blank line, a
/// header and the sorted filename list follow. An analysis with no insights
/// and no irrelevant files renders as an empty string.
pub fn render_analysis(analysis: &AggregatedAnalysis) -> String {
    let mut lines: Vec<String> = analysis.insights.iter().map(render_insight).collect();

    if !analysis.irrelevant_files.is_empty() {
        let mut files = analysis.irrelevant_files.clone();
        files.sort();
        lines.push(String::new());
        lines.push(IRRELEVANT_FILES_HEADER.to_string());
        lines.push(files.join(", "));
    }

    lines.join("\n").trim().to_string()
}

fn render_insight(insight: &Insight) -> String {
    let mut line = format!("#{}", insight.category);

    let quote = insight.quote.as_deref().unwrap_or("");
    if !quote.is_empty() {
        line.push_str(&format!("\"{}\"", quote));
    }

    if !insight.interpretation.is_empty() {
        let separator = if quote.is_empty() { " " } else { " \u{2013} " };
        line.push_str(separator);
        line.push_str(&insight.interpretation);
    }

    if let Some(emotion) = insight.emotion.as_deref().filter(|e| !e.is_empty()) {
        line.push_str(&format!(" ({})", emotion));
    }

    if let Some(source) = insight.source_filename.as_deref().filter(|s| !s.is_empty()) {
        line.push_str(&format!(" [file: {}]", source));
    }

    line
}

/// Report text for an analysis that produced no insights
///
/// Lists the irrelevant files below the fixed message when there were any.
pub fn no_insights_message(irrelevant_files: &[String]) -> String {
    if irrelevant_files.is_empty() {
        return NO_INSIGHTS_MESSAGE.to_string();
    }

    let mut files = irrelevant_files.to_vec();
    files.sort();
    format!(
        "{}\n\n{}\n{}",
        NO_INSIGHTS_MESSAGE,
        IRRELEVANT_FILES_HEADER,
        files.join(", ")
    )
}
