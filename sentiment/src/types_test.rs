use super::*;
use serde_json::json;

#[test]
fn known_labels_parse_to_variants() {
    let parsed: Vec<SentimentLabel> = serde_json::from_value(json!(["positive", "negative", "neutral"])).unwrap();
    assert_eq!(
        parsed,
        vec![SentimentLabel::Positive, SentimentLabel::Negative, SentimentLabel::Neutral]
    );
}

#[test]
fn unknown_label_is_preserved_verbatim() {
    let label: SentimentLabel = serde_json::from_value(json!("mixed")).unwrap();
    assert_eq!(label, SentimentLabel::Other("mixed".to_owned()));
    assert_eq!(label.as_str(), "mixed");
    assert_eq!(serde_json::to_value(&label).unwrap(), json!("mixed"));
}

#[test]
fn labels_are_case_sensitive() {
    let label: SentimentLabel = serde_json::from_value(json!("Positive")).unwrap();
    assert_eq!(label, SentimentLabel::Other("Positive".to_owned()));
}

#[test]
fn non_string_label_is_rejected() {
    assert!(serde_json::from_value::<SentimentLabel>(json!(1)).is_err());
}

#[test]
fn label_display_matches_wire_form() {
    assert_eq!(SentimentLabel::Negative.to_string(), "negative");
}

#[test]
fn analysis_result_parses_documented_shape() {
    let body = json!({
        "items": [{ "text": "Love it", "score": 0.9, "label": "positive" }],
        "stats": {
            "total": 1,
            "positive_pct": 100.0,
            "negative_pct": 0.0,
            "neutral_pct": 0.0,
            "avg_score": 0.9
        }
    });
    let result: AnalysisResult = serde_json::from_value(body).unwrap();
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].label, SentimentLabel::Positive);
    assert_eq!(result.stats.total, 1);
}

#[test]
fn missing_stats_fails_to_parse() {
    let body = json!({ "items": [] });
    assert!(serde_json::from_value::<AnalysisResult>(body).is_err());
}

#[test]
fn negative_total_fails_to_parse() {
    let body = json!({
        "total": -1,
        "positive_pct": 0.0,
        "negative_pct": 0.0,
        "neutral_pct": 0.0,
        "avg_score": 0.0
    });
    assert!(serde_json::from_value::<AggregateStats>(body).is_err());
}

#[test]
fn percentage_sum_adds_three_buckets() {
    let stats = AggregateStats {
        total: 3,
        positive_pct: 33.33,
        negative_pct: 33.33,
        neutral_pct: 33.34,
        avg_score: 0.1167,
    };
    assert!((stats.percentage_sum() - 100.0).abs() < 1e-9);
}
