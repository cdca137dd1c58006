//! Backend forwarding for `/feedback/*` and `/health`.
//!
//! The dashboard's browser code only ever talks to its own origin; these
//! handlers relay each request to `API_PROXY_TARGET` and hand the backend's
//! status, `content-type`, and body back unchanged.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Forward the request to the same path and query on the backend.
///
/// An unreachable backend yields `502 Bad Gateway` with a plain-text body.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    let url = format!("{}{path}", state.proxy_target);
    tracing::debug!(%method, %url, "proxy");

    let mut request = state.http.request(method, &url).body(body);
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        request = request.header(CONTENT_TYPE, content_type.clone());
    }

    match request.send().await {
        Ok(upstream) => relay(upstream).await,
        Err(e) => {
            tracing::warn!(%url, error = %e, "backend unreachable");
            (StatusCode::BAD_GATEWAY, format!("backend unreachable: {e}")).into_response()
        }
    }
}

async fn relay(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let body = match upstream.bytes().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "backend response unreadable");
            return (StatusCode::BAD_GATEWAY, format!("backend response unreadable: {e}")).into_response();
        }
    };

    let mut response = (status, body).into_response();
    let response_headers = response.headers_mut();
    response_headers.remove(CONTENT_TYPE);
    if let Some(content_type) = content_type {
        response_headers.insert(CONTENT_TYPE, content_type);
    }
    response
}
