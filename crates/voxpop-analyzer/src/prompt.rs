//! Prompt construction for interview analysis
//!
//! Builds the completion prompt sent to the LLM for a single transcript.
//! The instructions pin the model to one tagged insight per line so the
//! parser can recover structure from plain text.

const ANALYSIS_INSTRUCTIONS: &str = r#"You are an expert product researcher analyzing a customer interview transcript.

Read the transcript and extract every distinct customer insight. Output one insight per line, in exactly this format:

#<category> "<verbatim customer quote>" – <short interpretation> (<emotion>)

Rules:
- <category> must be exactly one of: pain, feature, bug, feedback, insight
- The quote is optional; when present it must be verbatim from the transcript, in double quotes
- The interpretation is a short researcher's gloss of what the quote reveals
- The emotion is optional; when present it is a single word or short phrase in parentheses at the end of the line
- Every line must start with the # tag
- Do not number the lines, add headings, or write any prose before or after the insights
- If the text is not a customer interview, or contains no usable insights, output nothing"#;

const OUTPUT_FORMAT_REMINDER: &str = "Remember: output ONLY #-tagged insight lines in the format above, one insight per line, no markdown, no explanations.";

/// Builder for interview analysis prompts
pub struct PromptBuilder {
    transcript: String,
    product_description: Option<String>,
}

impl PromptBuilder {
    /// Create a new prompt builder for the given transcript
    pub fn new(transcript: String) -> Self {
        Self {
            transcript,
            product_description: None,
        }
    }

    /// Set the description of the product under research
    pub fn with_product_description(mut self, description: impl Into<String>) -> Self {
        self.product_description = Some(description.into());
        self
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(ANALYSIS_INSTRUCTIONS);
        prompt.push_str("\n\n");

        let description = self
            .product_description
            .as_deref()
            .unwrap_or(crate::config::DEFAULT_PRODUCT_DESCRIPTION);
        prompt.push_str(&format!("Product under research: {}\n\n", description));

        prompt.push_str(&format!(
            "Interview transcript:\n---\n{}\n---\n\n",
            self.transcript
        ));

        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_transcript() {
        let prompt = PromptBuilder::new("I keep losing my notes.".to_string()).build();
        assert!(prompt.contains("I keep losing my notes."));
    }

    #[test]
    fn test_prompt_includes_product_description() {
        let prompt = PromptBuilder::new("transcript".to_string())
            .with_product_description("AcmeCRM, a sales pipeline tool")
            .build();
        assert!(prompt.contains("Product under research: AcmeCRM, a sales pipeline tool"));
    }

    #[test]
    fn test_prompt_defaults_product_description() {
        let prompt = PromptBuilder::new("transcript".to_string()).build();
        assert!(prompt.contains(crate::config::DEFAULT_PRODUCT_DESCRIPTION));
    }

    #[test]
    fn test_prompt_includes_instructions_and_reminder() {
        let prompt = PromptBuilder::new("transcript".to_string()).build();
        assert!(prompt.contains("expert product researcher"));
        assert!(prompt.contains("one of: pain, feature, bug, feedback, insight"));
        assert!(prompt.contains(OUTPUT_FORMAT_REMINDER));
    }

    #[test]
    fn test_transcript_is_delimited() {
        let prompt = PromptBuilder::new("hello".to_string()).build();
        assert!(prompt.contains("Interview transcript:\n---\nhello\n---"));
    }
}
