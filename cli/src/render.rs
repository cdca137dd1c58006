//! Plain-text rendering of an analysis result for the terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use sentiment::AnalysisResult;
use sentiment::present::{distribution, format_score, result_rows};

/// Distribution summary followed by the per-line table.
#[must_use]
pub fn render_result(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Mood distribution ({} lines)", result.stats.total);
    for segment in distribution(&result.stats) {
        let _ = writeln!(out, "  {:<14}{:>8}", segment.label, segment.text);
    }
    let _ = writeln!(out, "  {:<14}{:>8}", "Average score", format_score(result.stats.avg_score));

    out.push('\n');
    let _ = writeln!(out, "{:<10}{:>8}  COMMENT", "SENTIMENT", "SCORE");
    for row in result_rows(result) {
        let _ = writeln!(out, "{:<10}{:>8}  {}", row.label, row.score, row.text);
    }
    out
}
