use super::*;
use sentiment::{AggregateStats, FeedbackItemResult, SentimentLabel};

fn sample() -> AnalysisResult {
    AnalysisResult {
        items: vec![
            FeedbackItemResult { text: "Love it".into(), score: 0.9, label: SentimentLabel::Positive },
            FeedbackItemResult { text: "Too slow".into(), score: -0.6, label: SentimentLabel::Negative },
        ],
        stats: AggregateStats { total: 2, positive_pct: 50.0, negative_pct: 50.0, neutral_pct: 0.0, avg_score: 0.15 },
    }
}

#[test]
fn summary_lists_buckets_in_display_order() {
    let text = render_result(&sample());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Mood distribution (2 lines)");
    assert_eq!(lines[1], "  Positive        50.00%");
    assert_eq!(lines[2], "  Neutral          0.00%");
    assert_eq!(lines[3], "  Negative        50.00%");
    assert_eq!(lines[4], "  Average score   0.1500");
}

#[test]
fn table_rows_follow_submission_order() {
    let text = render_result(&sample());
    let rows: Vec<&str> = text.lines().skip_while(|l| !l.starts_with("SENTIMENT")).collect();
    assert_eq!(rows[0], "SENTIMENT    SCORE  COMMENT");
    assert_eq!(rows[1], "positive    0.9000  Love it");
    assert_eq!(rows[2], "negative   -0.6000  Too slow");
}
