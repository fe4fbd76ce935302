//! GitHub REST API client.
//!
//! Fetches scope public keys and writes sealed secrets. One request per call,
//! no retries: every failure goes straight back to the caller.

mod transport;

pub use transport::{HttpTransport, Method, Request, Response, Transport};

use serde_json::Value;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::config::Settings;
use crate::core::constants;
use crate::core::domain::{PublicKeyRecord, SecretSubmission};
use crate::core::scope::Scope;
use crate::error::{ApiError, Result};

/// Authenticated client for one API base URL.
pub struct GitHub<T = HttpTransport> {
    transport: T,
    settings: Settings,
    token: Zeroizing<String>,
}

impl GitHub<HttpTransport> {
    /// Client over the network.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn new(settings: Settings, token: Zeroizing<String>) -> Result<Self> {
        let transport = HttpTransport::new(&settings)?;
        Ok(Self::with_transport(transport, settings, token))
    }
}

impl<T: Transport> GitHub<T> {
    pub fn with_transport(transport: T, settings: Settings, token: Zeroizing<String>) -> Self {
        Self {
            transport,
            settings,
            token,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request(&self, method: Method, url: String, body: Option<String>) -> Request {
        Request {
            method,
            url,
            headers: vec![
                ("Accept", constants::ACCEPT.to_string()),
                ("Authorization", format!("Bearer {}", self.token.as_str())),
                ("X-GitHub-Api-Version", constants::API_VERSION.to_string()),
            ],
            body,
        }
    }

    /// Fetch the scope's current public key.
    ///
    /// # Errors
    ///
    /// - `ApiError::Http` on a non-2xx status
    /// - `ApiError::MalformedResponse` if the body lacks `key`/`key_id`
    /// - `ApiError::Transport` if no response arrived in time
    pub fn fetch_public_key(&self, scope: &Scope) -> Result<PublicKeyRecord> {
        let url = scope.key_endpoint(self.settings.api_url());
        debug!(%url, "fetching {} public key", scope.kind());

        let response = self.transport.send(&self.request(Method::Get, url, None))?;
        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            }
            .into());
        }

        let record = PublicKeyRecord::from_json(&response.body)?;
        debug!(key_id = %record.key_id, "fetched {} public key", scope.kind());
        Ok(record)
    }

    /// Create or update secret `name` in `scope`.
    ///
    /// Any `message` GitHub returns is logged as a warning whatever the
    /// status, and handed back on success.
    ///
    /// # Errors
    ///
    /// - `ApiError::Http` on a non-2xx status
    /// - `ApiError::Transport` if no response arrived in time
    pub fn put_secret(
        &self,
        scope: &Scope,
        name: &str,
        submission: &SecretSubmission,
    ) -> Result<Option<String>> {
        let url = scope.write_endpoint(self.settings.api_url(), name);
        debug!(%url, "writing {} secret", scope.kind());

        let request = self.request(Method::Put, url, Some(submission.to_json()?));
        let response = self.transport.send(&request)?;

        let message = extract_message(&response.body);
        if let Some(message) = &message {
            warn!(status = response.status, "{}", message);
        }

        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            }
            .into());
        }

        Ok(message)
    }
}

/// Human-readable `message` from a response body, if it is JSON and has one.
///
/// Non-JSON bodies (including the empty body of a 201/204) yield `None`.
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}
