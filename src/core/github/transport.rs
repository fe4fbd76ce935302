//! HTTP transport.
//!
//! The [`Transport`] trait is the seam between the protocol and the wire:
//! production uses [`HttpTransport`] (blocking reqwest), tests substitute a
//! recording fake.

use std::fmt;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::trace;

use crate::core::config::Settings;
use crate::core::constants;
use crate::error::{ApiError, Result};

/// HTTP methods the protocol uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
        }
    }
}

/// A fully formed request.
#[derive(Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<String>,
}

impl Request {
    /// Value of header `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(n, v)| {
                if n.eq_ignore_ascii_case("authorization") {
                    (*n, "<redacted>")
                } else {
                    (*n, v.as_str())
                }
            })
            .collect();
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body_len", &self.body.as_ref().map(String::len))
            .finish()
    }
}

/// Status and raw body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the response, whatever its status.
pub trait Transport {
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when no response was received
    /// (connection failure, timeout). Non-2xx statuses are not errors here.
    fn send(&self, request: &Request) -> Result<Response>;
}

/// Blocking reqwest transport with a fixed timeout and no retries.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the TLS backend cannot be initialized.
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(constants::USER_AGENT)
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &Request) -> Result<Response> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Put => self.client.put(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = builder.send().map_err(ApiError::Transport)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(ApiError::Transport)?;

        trace!(status, body_len = body.len(), "response received");

        Ok(Response { status, body })
    }
}
