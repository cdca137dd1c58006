//! Pure presentation mappings shared by the dashboard and the CLI.
//!
//! Label → style class, number formatting, and the row/segment view models
//! the results table and distribution summary render from.

#[cfg(test)]
#[path = "present_test.rs"]
mod present_test;

use crate::types::{AggregateStats, AnalysisResult, SentimentLabel};

pub const PILL_POSITIVE: &str = "pill pillPos";
pub const PILL_NEGATIVE: &str = "pill pillNeg";
pub const PILL_NEUTRAL: &str = "pill pillNeu";

/// Pill class for a label. Unrecognized labels get the neutral styling.
#[must_use]
pub fn label_class(label: &SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => PILL_POSITIVE,
        SentimentLabel::Negative => PILL_NEGATIVE,
        SentimentLabel::Neutral | SentimentLabel::Other(_) => PILL_NEUTRAL,
    }
}

/// `33.333` → `"33.33%"`.
#[must_use]
pub fn format_pct(value: f64) -> String {
    format!("{value:.2}%")
}

/// `0.11666` → `"0.1167"`.
#[must_use]
pub fn format_score(value: f64) -> String {
    format!("{value:.4}")
}

/// CSS width for a stacked-bar segment, clamped to `0%..=100%`.
#[must_use]
pub fn bar_width(value: f64) -> String {
    let clamped = if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 };
    format!("{clamped}%")
}

#[must_use]
pub fn analyze_button_caption(loading: bool) -> &'static str {
    if loading { "Analyzing…" } else { "Analyze" }
}

// =============================================================================
// DISTRIBUTION
// =============================================================================

/// One bucket of the mood distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct DistributionSegment {
    pub label: &'static str,
    pub value: f64,
    /// `value` formatted as a percentage.
    pub text: String,
    pub segment_class: &'static str,
    pub dot_class: &'static str,
}

/// Buckets in display order: positive, neutral, negative.
#[must_use]
pub fn distribution(stats: &AggregateStats) -> [DistributionSegment; 3] {
    let segment = |label, value: f64, segment_class, dot_class| DistributionSegment {
        label,
        value,
        text: format_pct(value),
        segment_class,
        dot_class,
    };
    [
        segment("Positive", stats.positive_pct, "seg segPos", "dot dotPos"),
        segment("Neutral", stats.neutral_pct, "seg segNeu", "dot dotNeu"),
        segment("Negative", stats.negative_pct, "seg segNeg", "dot dotNeg"),
    ]
}

/// Headline tile above the results table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: String,
    /// Rendered in a monospace face.
    pub mono: bool,
}

/// Positive, neutral, negative percentages followed by the average score.
#[must_use]
pub fn kpis(stats: &AggregateStats) -> [Kpi; 4] {
    [
        Kpi { label: "Positive", value: format_pct(stats.positive_pct), mono: false },
        Kpi { label: "Neutral", value: format_pct(stats.neutral_pct), mono: false },
        Kpi { label: "Negative", value: format_pct(stats.negative_pct), mono: false },
        Kpi { label: "Average score", value: format_score(stats.avg_score), mono: true },
    ]
}

// =============================================================================
// RESULTS TABLE
// =============================================================================

/// One rendered line of the results table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub text: String,
    pub label: String,
    pub pill_class: &'static str,
    pub score: String,
}

/// Table rows in submission order.
#[must_use]
pub fn result_rows(result: &AnalysisResult) -> Vec<ResultRow> {
    result
        .items
        .iter()
        .map(|item| ResultRow {
            text: item.text.clone(),
            label: item.label.to_string(),
            pill_class: label_class(&item.label),
            score: format_score(item.score),
        })
        .collect()
}
