//! Analysis error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every failure of a batch analysis lands in one [`AnalysisError`] variant.
//! None of them are fatal: the session controller renders them into a single
//! user-visible message and the user can edit and retry.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown when a failure carries no usable detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "Analysis failed. Please try again.";

/// Discriminant of [`AnalysisError`], handy for logging and assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisErrorKind {
    EmptyBatch,
    Transport,
    HttpStatus,
    MalformedResponse,
}

/// Errors produced by [`crate::AnalysisClient::analyze`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// The batch had no lines; no request was issued.
    #[error("feedback batch is empty")]
    EmptyBatch,

    /// The request never reached the server or no response came back.
    #[error("request failed: {message}")]
    Transport { message: String },

    /// The server answered with a non-success status.
    #[error("analyze failed ({status}): {message}")]
    HttpStatus { status: u16, message: String },

    /// Success status, but the body does not match the response schema.
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },
}

impl AnalysisError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse { message: message.into() }
    }

    #[must_use]
    pub fn kind(&self) -> AnalysisErrorKind {
        match self {
            Self::EmptyBatch => AnalysisErrorKind::EmptyBatch,
            Self::Transport { .. } => AnalysisErrorKind::Transport,
            Self::HttpStatus { .. } => AnalysisErrorKind::HttpStatus,
            Self::MalformedResponse { .. } => AnalysisErrorKind::MalformedResponse,
        }
    }

    /// HTTP status for [`AnalysisError::HttpStatus`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable rendering for the dashboard error banner.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyBatch => "Enter at least one feedback line.".to_owned(),
            Self::Transport { message } if message.trim().is_empty() => GENERIC_FAILURE_MESSAGE.to_owned(),
            Self::Transport { message } => format!("Network error: {}", message.trim()),
            Self::HttpStatus { status, message } if message.trim().is_empty() => {
                format!("Analyze failed ({status})")
            }
            Self::HttpStatus { status, message } => format!("Analyze failed ({status}): {}", message.trim()),
            Self::MalformedResponse { message } if message.trim().is_empty() => {
                "Unexpected response from server.".to_owned()
            }
            Self::MalformedResponse { message } => {
                format!("Unexpected response from server: {}", message.trim())
            }
        }
    }
}

/// Failure of the underlying HTTP exchange before any status was received.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TransportError> for AnalysisError {
    fn from(err: TransportError) -> Self {
        Self::Transport { message: err.message }
    }
}
