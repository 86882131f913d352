//! Insight line parser
//!
//! Recovers structured [`Insight`] values from the model's plain-text
//! analysis output. The grammar is one insight per line:
//!
//! ```text
//! #<category> "<quote>" – <interpretation> (<emotion>)
//! ```
//!
//! Quote, interpretation and emotion are each optional; a line missing both
//! quote and interpretation carries no information and is dropped. Lines that
//! do not open with a recognized tag are skipped without error, which lets the
//! parser shrug off any conversational filler the model wraps around its
//! answer.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;
use voxpop_domain::{Insight, InsightCategory};

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();
static QUOTE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN
        .get_or_init(|| Regex::new(r"(?i)^\s*#(pain|feature|bug|feedback|insight)\b").unwrap())
}

fn quote_pattern() -> &'static Regex {
    QUOTE_PATTERN.get_or_init(|| Regex::new(r#""([^"\\]*(?:\\.[^"\\]*)*)""#).unwrap())
}

/// Parse the model's raw analysis output into insights
///
/// `None` (no response at all) and text containing no tagged lines both
/// produce an empty vector. Line order is preserved.
pub fn parse_insights(raw_text: Option<&str>) -> Vec<Insight> {
    let Some(text) = raw_text else {
        return Vec::new();
    };

    let mut insights = Vec::new();
    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || !line.starts_with('#') {
            continue;
        }
        match parse_line(line) {
            Some(insight) => insights.push(insight),
            None => debug!(line, "Skipping unparseable insight line"),
        }
    }
    insights
}

/// Parse one trimmed `#`-prefixed line, or `None` if it carries nothing
fn parse_line(line: &str) -> Option<Insight> {
    let tag_caps = tag_pattern().captures(line)?;
    let category = InsightCategory::from_tag(tag_caps.get(1)?.as_str())?;
    let rest = line[tag_caps.get(0)?.end()..].trim();

    let (quote, candidate) = match quote_pattern().captures(rest) {
        Some(quote_caps) => {
            let quote = quote_caps.get(1)?.as_str().trim().to_string();
            let after = rest[quote_caps.get(0)?.end()..].trim();
            (quote, strip_leading_dash(after))
        }
        None => (String::new(), rest),
    };

    let (interpretation, emotion) = extract_emotion(candidate);
    let interpretation = interpretation
        .trim_matches([' ', '-', '\u{2013}', '\u{2014}'])
        .trim()
        .to_string();

    if quote.is_empty() && interpretation.is_empty() {
        return None;
    }

    let quote = if quote.is_empty() { None } else { Some(quote) };
    Some(Insight::new(category, quote, interpretation, emotion))
}

/// Drop at most one leading dash character, then leading whitespace
///
/// The separator between quote and interpretation is a single `-`, `–` or
/// `—`; longer runs are left for the residual trim.
fn strip_leading_dash(text: &str) -> &str {
    let mut chars = text.chars();
    match chars.next() {
        Some('-') | Some('\u{2013}') | Some('\u{2014}') => chars.as_str().trim_start(),
        _ => text,
    }
}

/// Split a trailing non-empty parenthetical off as the emotion
///
/// `"slow (annoyed)"` becomes `("slow", Some("annoyed"))`; text without a
/// trailing parenthetical, or with an empty `()`, is returned unchanged.
fn extract_emotion(text: &str) -> (String, Option<String>) {
    let text = text.trim();
    if text.ends_with(')') {
        if let Some(open_idx) = text.rfind('(') {
            let inner = text[open_idx + 1..text.len() - 1].trim();
            if !inner.is_empty() {
                return (
                    text[..open_idx].trim_end().to_string(),
                    Some(inner.to_string()),
                );
            }
        }
    }
    (text.to_string(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_canonical_line() {
        let insights = parse_insights(Some(
            r#"#pain "I always forget things" – No reminder exists (frustration)"#,
        ));

        assert_eq!(insights.len(), 1);
        let insight = &insights[0];
        assert_eq!(insight.category, InsightCategory::Pain);
        assert_eq!(insight.quote.as_deref(), Some("I always forget things"));
        assert_eq!(insight.interpretation, "No reminder exists");
        assert_eq!(insight.emotion.as_deref(), Some("frustration"));
        assert_eq!(insight.source_filename, None);
    }

    #[test]
    fn test_none_and_empty_yield_nothing() {
        assert!(parse_insights(None).is_empty());
        assert!(parse_insights(Some("")).is_empty());
        assert!(parse_insights(Some("   \n\n  ")).is_empty());
    }

    #[test]
    fn test_prose_lines_are_skipped() {
        let raw = "Here are the insights I found:\n\n#bug \"it crashed on save\" – Save path is broken\n\nLet me know if you need more!";
        let insights = parse_insights(Some(raw));

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].category, InsightCategory::Bug);
    }

    #[test]
    fn test_tags_match_case_insensitively() {
        let raw = "#PAIN \"slow\" – Too slow\n#Feature \"api\" – Wants an API\n#iNsIgHt \"hmm\" – Curious pattern";
        let insights = parse_insights(Some(raw));

        assert_eq!(insights.len(), 3);
        assert_eq!(insights[0].category, InsightCategory::Pain);
        assert_eq!(insights[1].category, InsightCategory::Feature);
        assert_eq!(insights[2].category, InsightCategory::Insight);
    }

    #[test]
    fn test_tag_requires_word_boundary() {
        assert!(parse_insights(Some("#painkiller \"q\" – not a tag")).is_empty());
        assert!(parse_insights(Some("#insightful observation")).is_empty());
        assert!(parse_insights(Some("#bugs everywhere")).is_empty());
    }

    #[test]
    fn test_unknown_tags_are_skipped() {
        assert!(parse_insights(Some("#wishlist \"pony\" – wants a pony")).is_empty());
    }

    #[test]
    fn test_line_without_quote() {
        let insights = parse_insights(Some("#feedback onboarding felt confusing (confusion)"));

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].quote, None);
        assert_eq!(insights[0].interpretation, "onboarding felt confusing");
        assert_eq!(insights[0].emotion.as_deref(), Some("confusion"));
    }

    #[test]
    fn test_line_with_quote_only() {
        let insights = parse_insights(Some(r#"#feature "dark mode""#));

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].quote.as_deref(), Some("dark mode"));
        assert_eq!(insights[0].interpretation, "");
        assert_eq!(insights[0].emotion, None);
    }

    #[test]
    fn test_contentless_lines_are_dropped() {
        assert!(parse_insights(Some("#pain")).is_empty());
        assert!(parse_insights(Some(r#"#pain """#)).is_empty());
        assert!(parse_insights(Some("#pain – –")).is_empty());
    }

    #[test]
    fn test_separator_dash_variants() {
        for raw in [
            r#"#feature "want dark mode" - UI request"#,
            r#"#feature "want dark mode" – UI request"#,
            r#"#feature "want dark mode" — UI request"#,
            r#"#feature "want dark mode" UI request"#,
        ] {
            let insights = parse_insights(Some(raw));
            assert_eq!(insights.len(), 1, "raw: {raw}");
            assert_eq!(insights[0].quote.as_deref(), Some("want dark mode"), "raw: {raw}");
            assert_eq!(insights[0].interpretation, "UI request", "raw: {raw}");
        }
    }

    #[test]
    fn test_double_dash_separator() {
        let insights = parse_insights(Some(r#"#bug "it crashed" -- intermittent data loss"#));

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].interpretation, "intermittent data loss");
    }

    #[test]
    fn test_whitespace_behind_dash_is_trimmed() {
        let insights = parse_insights(Some("#pain -\tneeds work"));

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].quote, None);
        assert_eq!(insights[0].interpretation, "needs work");

        let insights = parse_insights(Some("#bug \"it broke\" – -\tcrashes on save"));
        assert_eq!(insights[0].interpretation, "crashes on save");
    }

    #[test]
    fn test_escaped_quotes_are_kept_raw() {
        let insights = parse_insights(Some(
            r#"#insight "she said \"wow\" twice" – strong reaction"#,
        ));

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].quote.as_deref(), Some(r#"she said \"wow\" twice"#));
        assert_eq!(insights[0].interpretation, "strong reaction");
    }

    #[test]
    fn test_parses_line_with_incidental_quotes() {
        // The first quoted span wins; text before it is not interpretation.
        let insights = parse_insights(Some(r#"#insight the word "flow" came up three times"#));

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].quote.as_deref(), Some("flow"));
        assert_eq!(insights[0].interpretation, "came up three times");
    }

    #[test]
    fn test_empty_parenthetical_is_not_an_emotion() {
        let insights = parse_insights(Some("#pain the spinner never stops ()"));

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].interpretation, "the spinner never stops ()");
        assert_eq!(insights[0].emotion, None);
    }

    #[test]
    fn test_multiword_emotion() {
        let insights = parse_insights(Some(
            r#"#feedback "love it" – very positive (pleasant surprise)"#,
        ));

        assert_eq!(insights[0].emotion.as_deref(), Some("pleasant surprise"));
    }

    #[test]
    fn test_line_order_is_preserved() {
        let raw = "#pain \"a\" – first\n#feature \"b\" – second\n#bug \"c\" – third";
        let insights = parse_insights(Some(raw));

        let interpretations: Vec<&str> =
            insights.iter().map(|i| i.interpretation.as_str()).collect();
        assert_eq!(interpretations, ["first", "second", "third"]);
    }

    #[test]
    fn test_leading_whitespace_is_tolerated() {
        let insights = parse_insights(Some("   #pain \"slow export\" – Export takes minutes"));
        assert_eq!(insights.len(), 1);
    }

    #[test]
    fn test_quote_whitespace_is_trimmed() {
        let insights = parse_insights(Some(r#"#pain "  padded quote  " – spacing"#));
        assert_eq!(insights[0].quote.as_deref(), Some("padded quote"));
    }
}
