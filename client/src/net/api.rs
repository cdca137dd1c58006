//! REST calls to the analysis backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, routed through
//! [`sentiment::AnalysisClient`] for encoding, status mapping, and
//! validation.
//! Server-side (SSR): stub returning a transport error since the request is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `AnalysisError` instead of panics; the session
//! controller turns it into the banner message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use sentiment::{AnalysisError, AnalysisResult, FeedbackBatch};

/// Error returned when analysis is attempted outside the browser.
#[must_use]
pub fn not_available() -> AnalysisError {
    AnalysisError::transport("not available on server")
}

/// `fetch`-backed transport for same-origin requests.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl sentiment::HttpTransport for BrowserTransport {
    async fn post_json(&self, path: &str, body: String) -> Result<sentiment::HttpReply, sentiment::TransportError> {
        let request = gloo_net::http::Request::post(path)
            .header("Content-Type", sentiment::JSON_CONTENT_TYPE)
            .body(body)
            .map_err(|e| sentiment::TransportError::new(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| sentiment::TransportError::new(e.to_string()))?;
        let status = resp.status();
        let reason = resp.status_text();
        // Best-effort: an unreadable body must not hide the status.
        let body = resp.text().await.ok();
        Ok(sentiment::HttpReply { status, reason, body })
    }
}

/// Submit `batch` to `POST /feedback/analyze-batch`.
///
/// # Errors
///
/// Returns the client's [`AnalysisError`]; on the server always
/// [`not_available`].
pub async fn analyze_batch(batch: &FeedbackBatch) -> Result<AnalysisResult, AnalysisError> {
    #[cfg(feature = "hydrate")]
    {
        sentiment::AnalysisClient::new(BrowserTransport)
            .analyze(batch)
            .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = batch;
        Err(not_available())
    }
}
