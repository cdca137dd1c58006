use super::*;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};

async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[test]
fn new_rejects_non_http_base_url() {
    let err = ReqwestTransport::new("ftp://example.test", None).unwrap_err();
    assert!(matches!(err, CliError::InvalidBaseUrl(url) if url == "ftp://example.test"));
}

#[test]
fn new_trims_trailing_slash() {
    let transport = ReqwestTransport::new("http://127.0.0.1:8000/", None).unwrap();
    assert_eq!(transport.base_url(), "http://127.0.0.1:8000");
}

#[tokio::test]
async fn post_json_sends_content_type_and_body() {
    let router = Router::new().route(
        "/echo",
        post(|headers: HeaderMap, body: String| async move {
            let content_type = headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_owned();
            format!("{content_type}|{body}")
        }),
    );
    let base = spawn_stub(router).await;
    let transport = ReqwestTransport::new(&base, None).unwrap();

    let reply = transport.post_json("/echo", "{\"feedback\":[\"a\"]}".into()).await.unwrap();
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body.as_deref(), Some("application/json|{\"feedback\":[\"a\"]}"));
}

#[tokio::test]
async fn error_status_keeps_reason_and_body() {
    let router = Router::new().route("/boom", post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "server error") }));
    let base = spawn_stub(router).await;
    let transport = ReqwestTransport::new(&base, None).unwrap();

    let reply = transport.post_json("/boom", String::new()).await.unwrap();
    assert_eq!(reply.status, 500);
    assert_eq!(reply.reason, "Internal Server Error");
    assert_eq!(reply.body.as_deref(), Some("server error"));
}

#[tokio::test]
async fn get_reaches_health() {
    let router = Router::new().route("/health", get(|| async { "{\"status\":\"ok\"}" }));
    let base = spawn_stub(router).await;
    let transport = ReqwestTransport::new(&base, None).unwrap();

    let reply = transport.get("/health").await.unwrap();
    assert!(reply.is_success());
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let transport = ReqwestTransport::new(&format!("http://{addr}"), None).unwrap();

    let err = transport.post_json("/feedback/analyze-batch", "{}".into()).await.unwrap_err();
    assert!(!err.message().is_empty());
}
