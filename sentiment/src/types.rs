//! Wire types for the batch analysis response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// LABEL
// =============================================================================

/// Sentiment classification attached to a single feedback line.
///
/// The backend contract names three labels. Anything else is kept verbatim in
/// [`SentimentLabel::Other`] so it can still be displayed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    /// A label outside the contract, preserved as sent.
    Other(String),
}

impl SentimentLabel {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for SentimentLabel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            "neutral" => Self::Neutral,
            _ => Self::Other(raw),
        }
    }
}

impl From<SentimentLabel> for String {
    fn from(label: SentimentLabel) -> Self {
        match label {
            SentimentLabel::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// Classification of one submitted line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItemResult {
    pub text: String,
    pub score: f64,
    pub label: SentimentLabel,
}

/// Aggregate distribution computed by the backend over the whole batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total: u64,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
    pub avg_score: f64,
}

impl AggregateStats {
    /// Sum of the three label percentages. Expected to be ~100 when
    /// `total > 0`.
    #[must_use]
    pub fn percentage_sum(&self) -> f64 {
        self.positive_pct + self.negative_pct + self.neutral_pct
    }
}

/// Successful response body of `POST /feedback/analyze-batch`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// One entry per submitted line, in submission order.
    pub items: Vec<FeedbackItemResult>,
    pub stats: AggregateStats,
}
