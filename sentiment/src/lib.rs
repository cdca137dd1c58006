//! Feedback sentiment core: batch normalization, the analysis client, the
//! dashboard session state machine, and presentation helpers.
//!
//! This crate is UI-framework agnostic so the Leptos dashboard and the
//! terminal front-end drive the exact same orchestration. Network access goes
//! through the [`HttpTransport`] seam; each front-end plugs in its own.

pub mod batch;
pub mod client;
pub mod error;
pub mod present;
pub mod session;
pub mod types;

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures;

pub use batch::{FeedbackBatch, normalize};
pub use client::{ANALYZE_BATCH_PATH, AnalysisClient, HEALTH_PATH, HttpReply, HttpTransport, JSON_CONTENT_TYPE};
pub use error::{AnalysisError, AnalysisErrorKind, TransportError};
pub use session::{SessionController, SessionState};
pub use types::{AggregateStats, AnalysisResult, FeedbackItemResult, SentimentLabel};
