use super::*;
use sentiment::{AggregateStats, SessionState};

fn loading_controller() -> SessionController {
    let mut controller = SessionController::with_input("Love it\nToo slow");
    assert!(controller.begin_analysis().is_some());
    controller
}

#[test]
fn apply_outcome_success_shows_result() {
    let mut controller = loading_controller();
    let result = AnalysisResult {
        items: Vec::new(),
        stats: AggregateStats { total: 0, positive_pct: 0.0, negative_pct: 0.0, neutral_pct: 0.0, avg_score: 0.0 },
    };
    apply_outcome(&mut controller, Ok(result.clone()));
    assert_eq!(controller.result(), Some(&result));
}

#[test]
fn apply_outcome_error_sets_banner() {
    let mut controller = loading_controller();
    apply_outcome(&mut controller, Err(crate::net::api::not_available()));
    assert!(matches!(controller.state(), SessionState::Error(_)));
    assert_eq!(controller.error_message(), Some("Network error: not available on server"));
}

#[test]
fn apply_outcome_when_idle_is_ignored() {
    let mut controller = SessionController::with_input("Love it");
    apply_outcome(&mut controller, Err(crate::net::api::not_available()));
    assert_eq!(controller.state(), &SessionState::Idle);
}
