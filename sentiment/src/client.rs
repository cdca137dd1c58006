//! Batch analysis client.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AnalysisClient`] owns the request/response contract of
//! `POST /feedback/analyze-batch`: JSON encoding of the batch, status
//! mapping, schema parsing, and defensive validation. The raw HTTP exchange
//! sits behind [`HttpTransport`] so the browser (`gloo-net`) and native
//! (`reqwest`) front-ends share every line of that contract.
//!
//! TRADE-OFFS
//! ==========
//! No retries, no timeout of its own, no caching. Each call issues a fresh
//! request and relies on whatever timeout the transport was built with.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;

use crate::batch::FeedbackBatch;
use crate::error::{AnalysisError, TransportError};
use crate::types::{AggregateStats, AnalysisResult};

/// Fixed endpoint path for batch analysis.
pub const ANALYZE_BATCH_PATH: &str = "/feedback/analyze-batch";
/// Backend liveness probe.
pub const HEALTH_PATH: &str = "/health";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Allowed drift of the percentage sum from 100. The backend rounds each
/// bucket to two decimals.
const PERCENT_SUM_TOLERANCE: f64 = 0.1;

// =============================================================================
// TRANSPORT SEAM
// =============================================================================

/// Status line and best-effort body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    /// Reason phrase for `status` (`"Internal Server Error"`); may be empty.
    pub reason: String,
    /// Response body, or `None` when reading it failed.
    pub body: Option<String>,
}

impl HttpReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a JSON `POST` and hands back whatever the server answered.
///
/// Implementations return `Err` only when no response was received. Any
/// status, including 4xx/5xx, is an `Ok(HttpReply)`.
#[async_trait::async_trait(?Send)]
pub trait HttpTransport {
    /// `POST` `body` to `path` with `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the request could not be sent or no
    /// response arrived.
    async fn post_json(&self, path: &str, body: String) -> Result<HttpReply, TransportError>;
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Serialize)]
struct AnalyzeBatchRequest<'a> {
    feedback: &'a [String],
}

/// Client for the batch analysis endpoint.
#[derive(Clone, Debug)]
pub struct AnalysisClient<T> {
    transport: T,
}

impl<T: HttpTransport> AnalysisClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit `batch` and return the validated per-line and aggregate result.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::EmptyBatch`] if `batch` has no lines (nothing is sent).
    /// - [`AnalysisError::Transport`] if no response was received.
    /// - [`AnalysisError::HttpStatus`] for a non-2xx status.
    /// - [`AnalysisError::MalformedResponse`] if the body does not match the schema.
    pub async fn analyze(&self, batch: &FeedbackBatch) -> Result<AnalysisResult, AnalysisError> {
        if batch.is_empty() {
            return Err(AnalysisError::EmptyBatch);
        }
        let body = encode_request(batch)?;
        tracing::debug!(lines = batch.len(), path = ANALYZE_BATCH_PATH, "submitting feedback batch");

        let outcome = match self.transport.post_json(ANALYZE_BATCH_PATH, body).await {
            Ok(reply) => decode_reply(reply, batch),
            Err(err) => Err(AnalysisError::from(err)),
        };
        match &outcome {
            Ok(result) => tracing::debug!(items = result.items.len(), total = result.stats.total, "batch analyzed"),
            Err(err) => tracing::warn!(kind = ?err.kind(), status = ?err.status(), error = %err, "batch analysis failed"),
        }
        outcome
    }
}

/// Serialize `batch` as the `{"feedback": [...]}` request body.
///
/// # Errors
///
/// Returns [`AnalysisError::Transport`] if the body cannot be encoded.
pub fn encode_request(batch: &FeedbackBatch) -> Result<String, AnalysisError> {
    serde_json::to_string(&AnalyzeBatchRequest { feedback: batch.lines() })
        .map_err(|e| AnalysisError::transport(format!("could not encode request: {e}")))
}

/// Map an HTTP reply for `batch` onto the analysis outcome.
///
/// # Errors
///
/// See [`AnalysisClient::analyze`].
pub fn decode_reply(reply: HttpReply, batch: &FeedbackBatch) -> Result<AnalysisResult, AnalysisError> {
    if !reply.is_success() {
        let message = match reply.body {
            Some(text) if !text.trim().is_empty() => text.trim().to_owned(),
            _ => reply.reason,
        };
        return Err(AnalysisError::HttpStatus { status: reply.status, message });
    }

    let Some(body) = reply.body else {
        return Err(AnalysisError::transport("response body could not be read"));
    };
    let result: AnalysisResult = serde_json::from_str(&body).map_err(|e| AnalysisError::malformed(e.to_string()))?;
    validate_result(&result, batch)?;
    Ok(result)
}

/// Check the response against the submitted batch and the stats invariants.
///
/// # Errors
///
/// Returns [`AnalysisError::MalformedResponse`] describing the first violation.
pub fn validate_result(result: &AnalysisResult, batch: &FeedbackBatch) -> Result<(), AnalysisError> {
    if result.items.len() != batch.len() {
        return Err(AnalysisError::malformed(format!(
            "expected {} items, got {}",
            batch.len(),
            result.items.len()
        )));
    }
    validate_stats(&result.stats, result.items.len())
}

fn validate_stats(stats: &AggregateStats, item_count: usize) -> Result<(), AnalysisError> {
    if usize::try_from(stats.total).map_or(true, |total| total != item_count) {
        return Err(AnalysisError::malformed(format!(
            "stats.total is {} but {item_count} items were returned",
            stats.total
        )));
    }
    for (name, value) in [
        ("positive_pct", stats.positive_pct),
        ("negative_pct", stats.negative_pct),
        ("neutral_pct", stats.neutral_pct),
    ] {
        if !(0.0..=100.0).contains(&value) {
            return Err(AnalysisError::malformed(format!("stats.{name} out of range: {value}")));
        }
    }
    if stats.total > 0 && (stats.percentage_sum() - 100.0).abs() > PERCENT_SUM_TOLERANCE {
        return Err(AnalysisError::malformed(format!(
            "percentages sum to {:.2}, expected 100",
            stats.percentage_sum()
        )));
    }
    if !stats.avg_score.is_finite() {
        return Err(AnalysisError::malformed("stats.avg_score is not a finite number"));
    }
    Ok(())
}
