//! `reqwest`-backed transport for the analysis client.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use sentiment::{HttpReply, HttpTransport, JSON_CONTENT_TYPE, TransportError};

use crate::CliError;

/// Sends requests to `base_url` joined with the request path.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport for `base_url`, optionally bounding each request.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] unless `base_url` is an
    /// `http://` or `https://` URL, and [`CliError::Http`] if the client
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, CliError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { client: builder.build()?, base_url: base_url.to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET path`, reported the same way as [`HttpTransport::post_json`].
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response was received.
    pub async fn get(&self, path: &str) -> Result<HttpReply, TransportError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        Ok(into_reply(response).await)
    }
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, path: &str, body: String) -> Result<HttpReply, TransportError> {
        tracing::debug!(url = %self.url(path), bytes = body.len(), "POST");
        let response = self
            .client
            .post(self.url(path))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;
        Ok(into_reply(response).await)
    }
}

async fn into_reply(response: reqwest::Response) -> HttpReply {
    let status = response.status();
    let reason = status.canonical_reason().unwrap_or_default().to_owned();
    let body = match response.text().await {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!(error = %e, "response body could not be read");
            None
        }
    };
    HttpReply { status: status.as_u16(), reason, body }
}
