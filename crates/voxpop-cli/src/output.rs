//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use voxpop_domain::{InsightCategory, Interview};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of stored interviews.
    pub fn format_interviews(&self, interviews: &[Interview]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_interviews_json(interviews),
            OutputFormat::Table => self.format_interviews_table(interviews),
        }
    }

    /// Format interview summaries as JSON.
    fn format_interviews_json(&self, interviews: &[Interview]) -> Result<String> {
        let rows: Vec<serde_json::Value> = interviews
            .iter()
            .map(|interview| {
                serde_json::json!({
                    "id": interview.id,
                    "title": interview.title,
                    "created_at": interview.created_at,
                    "insights": insight_count(interview),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&rows)?)
    }

    /// Format interview summaries as a table.
    fn format_interviews_table(&self, interviews: &[Interview]) -> Result<String> {
        if interviews.is_empty() {
            return Ok(self.colorize("No interviews stored.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Title", "Created", "Insights"]);

        for interview in interviews {
            let id = interview.id.to_string();
            let created = interview.created_at.format("%Y-%m-%d %H:%M").to_string();
            let insights = insight_count(interview).to_string();
            builder.push_record([id.as_str(), &interview.title, &created, &insights]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format a single stored interview.
    pub fn format_interview(
        &self,
        interview: &Interview,
        include_transcript: bool,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_interview_json(interview, include_transcript),
            OutputFormat::Table => Ok(self.format_interview_text(interview, include_transcript)),
        }
    }

    /// Format a full interview record as JSON.
    fn format_interview_json(
        &self,
        interview: &Interview,
        include_transcript: bool,
    ) -> Result<String> {
        let mut doc = serde_json::json!({
            "id": interview.id,
            "title": interview.title,
            "created_at": interview.created_at,
            "analysis": interview.analysis,
        });
        if include_transcript {
            doc["transcript"] = serde_json::json!(interview.transcript);
        }

        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// Format a full interview record as readable text.
    fn format_interview_text(&self, interview: &Interview, include_transcript: bool) -> String {
        let mut sections = Vec::new();

        let header = format!("Interview {}: {}", interview.id, interview.title);
        sections.push(self.colorize(&header, "cyan"));
        sections.push(format!(
            "Created: {}",
            interview.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        match interview.analysis.as_deref() {
            Some(report) => sections.push(format!("\n{}", self.colorize_report(report))),
            None => sections.push(format!("\n{}", self.warning("No analysis stored."))),
        }

        if include_transcript {
            sections.push(format!("\nTranscript:\n{}", interview.transcript));
        }

        sections.join("\n")
    }

    /// Format a freshly produced analysis report.
    ///
    /// Table mode prints the colorized report, plus a confirmation line when
    /// the interview was saved. JSON mode emits one document carrying the
    /// same fields.
    pub fn format_report(&self, title: &str, report: &str, saved_id: Option<i64>) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let doc = serde_json::json!({
                    "title": title,
                    "report": report,
                    "saved_id": saved_id,
                });
                Ok(serde_json::to_string_pretty(&doc)?)
            }
            OutputFormat::Table => {
                let mut output = self.colorize_report(report);
                if let Some(id) = saved_id {
                    output.push_str("\n\n");
                    output.push_str(&self.success(&format!("Saved as interview {}", id)));
                }
                Ok(output)
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize the category tag opening each insight line.
    fn colorize_report(&self, report: &str) -> String {
        if !self.color_enabled {
            return report.to_string();
        }

        report
            .lines()
            .map(|line| self.colorize_insight_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn colorize_insight_line(&self, line: &str) -> String {
        for category in InsightCategory::ALL {
            let tag = format!("#{}", category.as_str());
            if line.starts_with(&tag) {
                let colored_tag = match category {
                    InsightCategory::Pain => tag.red().to_string(),
                    InsightCategory::Feature => tag.cyan().to_string(),
                    InsightCategory::Bug => tag.yellow().to_string(),
                    InsightCategory::Feedback => tag.blue().to_string(),
                    InsightCategory::Insight => tag.green().to_string(),
                };
                return format!("{}{}", colored_tag, &line[tag.len()..]);
            }
        }

        line.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Count the insight lines in an interview's stored analysis.
fn insight_count(interview: &Interview) -> usize {
    interview
        .analysis
        .as_deref()
        .map(|report| report.lines().filter(|line| line.starts_with('#')).count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn create_test_interview() -> Interview {
        Interview {
            id: 7,
            title: "Billing call".to_string(),
            transcript: "Customer: the invoice page is confusing.".to_string(),
            analysis: Some(
                "#pain\"the invoice page is confusing\" – Billing UX is unclear (frustration)\n\
                 #feature\"an export button\" – Wants CSV export"
                    .to_string(),
            ),
            created_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_table_format_lists_interviews() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_interviews(&[create_test_interview()])
            .unwrap();

        assert!(output.contains("Billing call"));
        assert!(output.contains("Insights"));
        assert!(output.contains("2025-03-14"));
        assert!(output.contains('2'));
    }

    #[test]
    fn test_json_format_lists_interviews() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_interviews(&[create_test_interview()])
            .unwrap();

        let rows: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(rows[0]["id"], 7);
        assert_eq!(rows[0]["title"], "Billing call");
        assert_eq!(rows[0]["insights"], 2);
    }

    #[test]
    fn test_empty_list_message() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_interviews(&[]).unwrap();
        assert!(output.contains("No interviews stored."));
    }

    #[test]
    fn test_show_omits_transcript_by_default() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let interview = create_test_interview();

        let output = formatter.format_interview(&interview, false).unwrap();
        assert!(output.contains("Interview 7: Billing call"));
        assert!(output.contains("#pain"));
        assert!(!output.contains("Transcript:"));
        assert!(!output.contains("Customer:"));

        let output = formatter.format_interview(&interview, true).unwrap();
        assert!(output.contains("Transcript:"));
        assert!(output.contains("Customer: the invoice page is confusing."));
    }

    #[test]
    fn test_show_json_includes_analysis() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_interview(&create_test_interview(), false)
            .unwrap();

        let doc: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(doc["id"], 7);
        assert!(doc["analysis"].as_str().unwrap().contains("#pain"));
        assert!(doc.get("transcript").is_none());
    }

    #[test]
    fn test_show_reports_missing_analysis() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut interview = create_test_interview();
        interview.analysis = None;

        let output = formatter.format_interview(&interview, false).unwrap();
        assert!(output.contains("No analysis stored."));
    }

    #[test]
    fn test_report_save_confirmation() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_report("Billing call", "#pain\"slow\" – Slow exports", Some(3))
            .unwrap();

        assert!(output.starts_with("#pain\"slow\""));
        assert!(output.contains("✓ Saved as interview 3"));
    }

    #[test]
    fn test_report_without_save_is_plain() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let report = "#pain\"slow\" – Slow exports";

        let output = formatter.format_report("Billing call", report, None).unwrap();
        assert_eq!(output, report);
    }

    #[test]
    fn test_report_json_document() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_report("Billing call", "#pain\"slow\" – Slow exports", Some(3))
            .unwrap();

        let doc: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(doc["title"], "Billing call");
        assert_eq!(doc["report"], "#pain\"slow\" – Slow exports");
        assert_eq!(doc["saved_id"], 3);
    }

    #[test]
    fn test_success_without_color() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
    }

    #[test]
    fn test_insight_count_skips_non_insight_lines() {
        let mut interview = create_test_interview();
        interview.analysis = Some(
            "#pain\"slow\" – Slow exports [file: a.txt]\n\n\
             Irrelevant files (not interview transcripts or yielded no insights):\nb.txt"
                .to_string(),
        );
        assert_eq!(insight_count(&interview), 1);

        interview.analysis = None;
        assert_eq!(insight_count(&interview), 0);
    }
}
