//! Test support utilities for ghsecret integration tests.
//!
//! Provides a mock GitHub API, a matching keypair, and helper commands.

#![allow(dead_code)]

pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use recorder::Recorder;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use crypto_box::aead::OsRng;
use crypto_box::SecretKey;
use mockito::{Matcher, Mock, ServerGuard};

/// Test environment: a mock GitHub API plus the private key behind the
/// public key it serves.
///
/// Each test gets its own server, so tests can run in parallel.
pub struct Test {
    /// Mock GitHub REST API
    pub server: ServerGuard,
    /// Private half of the served public key
    pub secret_key: SecretKey,
}

impl Test {
    /// Create a new test environment.
    pub fn new() -> Self {
        Self {
            server: mockito::Server::new(),
            secret_key: SecretKey::generate(&mut OsRng),
        }
    }

    /// Base URL of the mock API.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Base64 public key served by the mock API.
    pub fn public_key(&self) -> String {
        BASE64.encode(self.secret_key.public_key().as_bytes())
    }

    /// JSON body of a public-key response.
    pub fn public_key_body(&self) -> String {
        serde_json::json!({ "key_id": KEY_ID, "key": self.public_key() }).to_string()
    }

    /// Mock the public-key endpoint under `secrets_path`, requiring the
    /// standard GitHub headers.
    pub fn mock_public_key(&mut self, secrets_path: &str) -> Mock {
        let body = self.public_key_body();
        with_github_headers(
            self.server
                .mock("GET", format!("{}/public-key", secrets_path).as_str()),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(1)
        .create()
    }

    /// Mock the write endpoint `path`, answering `status` with `body`.
    pub fn mock_put(&mut self, path: &str, status: usize, body: &str) -> Mock {
        with_github_headers(self.server.mock("PUT", path))
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(
                serde_json::json!({ "key_id": KEY_ID }),
            ))
            .with_status(status)
            .with_body(body)
            .expect(1)
            .create()
    }

    /// Mock an endpoint that must never be called.
    pub fn mock_never(&mut self, method: &str) -> Mock {
        self.server
            .mock(method, Matcher::Any)
            .with_status(500)
            .expect(0)
            .create()
    }

    /// Open a base64 sealed value with the test private key.
    pub fn open(&self, sealed: &str) -> String {
        open_with(&self.secret_key, sealed)
    }
}

/// Require the headers every GitHub request must carry.
pub fn with_github_headers(mock: Mock) -> Mock {
    mock.match_header("accept", "application/vnd.github+json")
        .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
        .match_header("x-github-api-version", "2022-11-28")
        .match_header("user-agent", Matcher::Regex("^ghsecret/".to_string()))
}

/// Open a base64 sealed value with `secret_key`.
pub fn open_with(secret_key: &SecretKey, sealed: &str) -> String {
    let bytes = BASE64.decode(sealed).expect("sealed value is not base64");
    let plain = secret_key.unseal(&bytes).expect("sealed value does not open");
    String::from_utf8(plain).expect("opened value is not utf-8")
}
