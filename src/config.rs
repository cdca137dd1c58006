//! Server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TARGET: &str = "http://localhost:8000";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid API_PROXY_TARGET '{0}' (expected an http:// or https:// URL)")]
    InvalidProxyTarget(String),
    #[error("invalid PROXY_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend base URL without a trailing `/`.
    pub proxy_target: String,
    pub proxy_timeout: Duration,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_PROXY_TARGET`: default `http://localhost:8000`
    /// - `PROXY_TIMEOUT_SECS`: default 30, must be positive
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injected variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let proxy_target = parse_proxy_target(lookup("API_PROXY_TARGET").as_deref())?;

        let timeout_secs = match lookup("PROXY_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_PROXY_TIMEOUT_SECS,
        };

        Ok(Self { port, proxy_target, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_proxy_target(raw: Option<&str>) -> Result<String, ConfigError> {
    let target = raw.map_or(DEFAULT_PROXY_TARGET, str::trim).trim_end_matches('/');
    if target.starts_with("http://") || target.starts_with("https://") {
        Ok(target.to_string())
    } else {
        Err(ConfigError::InvalidProxyTarget(target.to_string()))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
