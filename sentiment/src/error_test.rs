use super::*;

#[test]
fn kind_matches_variant() {
    assert_eq!(AnalysisError::EmptyBatch.kind(), AnalysisErrorKind::EmptyBatch);
    assert_eq!(AnalysisError::transport("down").kind(), AnalysisErrorKind::Transport);
    assert_eq!(
        AnalysisError::HttpStatus { status: 500, message: String::new() }.kind(),
        AnalysisErrorKind::HttpStatus
    );
    assert_eq!(AnalysisError::malformed("x").kind(), AnalysisErrorKind::MalformedResponse);
}

#[test]
fn status_only_for_http_status() {
    assert_eq!(AnalysisError::HttpStatus { status: 503, message: "busy".into() }.status(), Some(503));
    assert_eq!(AnalysisError::transport("x").status(), None);
}

#[test]
fn user_message_includes_status_and_body() {
    let err = AnalysisError::HttpStatus { status: 500, message: "server error".into() };
    assert_eq!(err.user_message(), "Analyze failed (500): server error");
}

#[test]
fn user_message_without_body_keeps_status() {
    let err = AnalysisError::HttpStatus { status: 502, message: "  ".into() };
    assert_eq!(err.user_message(), "Analyze failed (502)");
}

#[test]
fn transport_without_detail_falls_back_to_generic() {
    assert_eq!(AnalysisError::transport("").user_message(), GENERIC_FAILURE_MESSAGE);
}

#[test]
fn transport_with_detail_mentions_network() {
    let msg = AnalysisError::transport("connection refused").user_message();
    assert!(msg.starts_with("Network error"));
    assert!(msg.contains("connection refused"));
}

#[test]
fn malformed_message_mentions_detail() {
    let msg = AnalysisError::malformed("missing field `stats`").user_message();
    assert!(msg.contains("missing field `stats`"));
}

#[test]
fn display_formats_status() {
    let err = AnalysisError::HttpStatus { status: 404, message: "Not Found".into() };
    assert_eq!(err.to_string(), "analyze failed (404): Not Found");
}

#[test]
fn transport_error_converts_into_analysis_error() {
    let err: AnalysisError = TransportError::new("dns failure").into();
    assert_eq!(err, AnalysisError::Transport { message: "dns failure".into() });
}
