//! Dashboard session state machine.
//!
//! DESIGN
//! ======
//! `SessionController` owns the raw input buffer, its derived batch, and the
//! visible request state. Nothing else mutates them. Analysis is split into
//! [`SessionController::begin_analysis`] and
//! [`SessionController::complete_analysis`] around the single network await,
//! so reactive front-ends can hold the controller in a signal and never keep
//! a borrow across the suspension point.
//!
//! TRADE-OFFS
//! ==========
//! There is no cancellation and no request sequence number. The `Loading`
//! guard keeps at most one request outstanding, and its resolution always
//! applies even if the input was edited meanwhile.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::batch::{FeedbackBatch, normalize};
use crate::client::{AnalysisClient, HttpTransport};
use crate::error::AnalysisError;
use crate::types::AnalysisResult;

/// Visible request lifecycle. Exactly one variant is active.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Success(AnalysisResult),
    /// Human-readable failure message.
    Error(String),
}

impl SessionState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Success(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Short lowercase name, used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }
}

/// Owner of the input buffer, the derived batch, and the request state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionController {
    raw_input: String,
    batch: FeedbackBatch,
    state: SessionState,
}

impl SessionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an idle session pre-filled with `raw`.
    pub fn with_input(raw: impl Into<String>) -> Self {
        let mut controller = Self::new();
        controller.set_input(raw);
        controller
    }

    #[must_use]
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Replace the input buffer and recompute the batch.
    ///
    /// Allowed in any state. While `Loading` the in-flight request is left
    /// alone and the state does not change.
    pub fn set_input(&mut self, raw: impl Into<String>) {
        self.raw_input = raw.into();
        self.batch = normalize(&self.raw_input);
    }

    #[must_use]
    pub fn batch(&self) -> &FeedbackBatch {
        &self.batch
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.batch.len()
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Whether the analyze action is enabled: a non-empty batch and no
    /// request outstanding.
    #[must_use]
    pub fn can_analyze(&self) -> bool {
        !self.is_loading() && !self.batch.is_empty()
    }

    #[must_use]
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.state.result()
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.state.error()
    }

    /// Enter `Loading` and return the batch to submit.
    ///
    /// Returns `None` and changes nothing when a request is already
    /// outstanding or the batch is empty. Any previous result or error is
    /// dropped on entry.
    pub fn begin_analysis(&mut self) -> Option<FeedbackBatch> {
        if !self.can_analyze() {
            tracing::debug!(state = self.state.name(), lines = self.batch.len(), "analyze ignored");
            return None;
        }
        tracing::debug!(from = self.state.name(), lines = self.batch.len(), "analysis started");
        self.state = SessionState::Loading;
        Some(self.batch.clone())
    }

    /// Apply the outcome of the outstanding request.
    ///
    /// Returns `false` (and leaves the state untouched) when no request was
    /// outstanding.
    pub fn complete_analysis(&mut self, outcome: Result<AnalysisResult, AnalysisError>) -> bool {
        if !self.is_loading() {
            tracing::warn!(state = self.state.name(), "analysis outcome arrived with no request outstanding");
            return false;
        }
        self.state = match outcome {
            Ok(result) => SessionState::Success(result),
            Err(err) => SessionState::Error(err.user_message()),
        };
        tracing::debug!(state = self.state.name(), "analysis finished");
        true
    }

    /// Run one full analysis round trip with `client`.
    ///
    /// A no-op when the analyze action is disabled.
    pub async fn analyze<T: HttpTransport>(&mut self, client: &AnalysisClient<T>) -> &SessionState {
        if let Some(batch) = self.begin_analysis() {
            let outcome = client.analyze(&batch).await;
            self.complete_analysis(outcome);
        }
        &self.state
    }
}
