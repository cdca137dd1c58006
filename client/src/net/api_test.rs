use super::*;
use sentiment::{AnalysisErrorKind, normalize};

#[test]
fn not_available_is_transport_error() {
    let err = not_available();
    assert_eq!(err.kind(), AnalysisErrorKind::Transport);
    assert_eq!(err.to_string(), "request failed: not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn analyze_batch_outside_browser_reports_unavailable() {
    let batch = normalize("Love it");
    assert_eq!(analyze_batch(&batch).await, Err(not_available()));
}
