//! Runtime configuration.
//!
//! Resolves the API base URL and request timeout from CLI/env values, and
//! wraps the access token so it is wiped from memory on drop.

use std::time::Duration;

use reqwest::Url;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Connection settings shared by every request of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    api_url: String,
    timeout: Duration,
}

impl Settings {
    /// Settings for `api_url` with the default timeout.
    ///
    /// A trailing `/` is trimmed so endpoint paths can be appended directly.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidApiUrl` unless the URL is http(s) with a
    /// host and carries no query or fragment.
    pub fn new(api_url: &str) -> Result<Self> {
        let invalid = || ConfigError::InvalidApiUrl(api_url.to_string());

        let url = Url::parse(api_url.trim()).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(invalid().into());
        }
        // Endpoint paths are appended to the base, so anything after the
        // path would swallow them.
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid().into());
        }

        let api_url = url.as_str().trim_end_matches('/').to_string();
        debug!(%api_url, "resolved api url");

        Ok(Self {
            api_url,
            timeout: constants::REQUEST_TIMEOUT,
        })
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            timeout: constants::REQUEST_TIMEOUT,
        }
    }
}

/// Wrap a token, rejecting blank ones.
///
/// # Errors
///
/// Returns `ConfigError::MissingToken` if the token is empty or whitespace.
pub fn token(raw: impl Into<String>) -> Result<Zeroizing<String>> {
    let token = Zeroizing::new(raw.into());
    if token.trim().is_empty() {
        return Err(ConfigError::MissingToken.into());
    }
    Ok(token)
}
