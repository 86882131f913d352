//! Insight module - the structured output of interview analysis

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of categories an insight can carry
///
/// The analysis prompt instructs the model to open each insight line with one
/// of these tags (`#pain`, `#feature`, ...). Tags are matched
/// case-insensitively at parse time; the canonical serialized form is
/// lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    /// A pain point or frustration voiced by the customer
    Pain,
    /// A feature request or wished-for capability
    Feature,
    /// A defect report
    Bug,
    /// General product feedback
    Feedback,
    /// A broader observation about the customer or their workflow
    Insight,
}

impl InsightCategory {
    /// All categories, in the order the prompt lists them
    pub const ALL: [InsightCategory; 5] = [
        InsightCategory::Pain,
        InsightCategory::Feature,
        InsightCategory::Bug,
        InsightCategory::Feedback,
        InsightCategory::Insight,
    ];

    /// Parse a tag word (without the leading `#`), case-insensitively
    ///
    /// # Examples
    ///
    /// ```
    /// use voxpop_domain::InsightCategory;
    ///
    /// assert_eq!(InsightCategory::from_tag("PAIN"), Some(InsightCategory::Pain));
    /// assert_eq!(InsightCategory::from_tag("wishlist"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "pain" => Some(Self::Pain),
            "feature" => Some(Self::Feature),
            "bug" => Some(Self::Bug),
            "feedback" => Some(Self::Feedback),
            "insight" => Some(Self::Insight),
            _ => None,
        }
    }

    /// Canonical lowercase form, as used in display lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pain => "pain",
            Self::Feature => "feature",
            Self::Bug => "bug",
            Self::Feedback => "feedback",
            Self::Insight => "insight",
        }
    }
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One categorized observation parsed from the model's analysis output
///
/// Insights are transient request-scoped values; only their serialized display
/// form is persisted (as part of [`Interview::analysis`]).
///
/// [`Interview::analysis`]: crate::Interview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Which tag the line carried
    pub category: InsightCategory,

    /// Verbatim customer quote, when the model supplied one
    pub quote: Option<String>,

    /// The analyst gloss; empty only when a quote is present
    pub interpretation: String,

    /// Short emotion annotation taken from a trailing parenthetical
    pub emotion: Option<String>,

    /// Which uploaded file the insight came from
    ///
    /// Attached during aggregation, never by the parser itself.
    pub source_filename: Option<String>,
}

impl Insight {
    /// Create an insight with no source file attached
    pub fn new(
        category: InsightCategory,
        quote: Option<String>,
        interpretation: String,
        emotion: Option<String>,
    ) -> Self {
        Self {
            category,
            quote,
            interpretation,
            emotion,
            source_filename: None,
        }
    }
}

/// The merged result of analyzing one request's worth of documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedAnalysis {
    /// All insights, per-document order preserved, documents in upload order
    pub insights: Vec<Insight>,

    /// Files that yielded no insights, sorted and deduplicated
    pub irrelevant_files: Vec<String>,
}

impl AggregatedAnalysis {
    /// True when no document yielded a single insight
    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }
}
