//! Public key record.
//!
//! A scope's current encryption key as returned by GitHub.

use serde::Deserialize;

use crate::core::types::KeyId;
use crate::error::{ApiError, Result};

/// A scope's public key and its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicKeyRecord {
    /// Base64 Curve25519 public key
    pub key: String,
    /// Identifier submitted alongside the ciphertext
    pub key_id: KeyId,
}

impl PublicKeyRecord {
    /// Parse a public-key response body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MalformedResponse` if the body is not JSON or
    /// `key`/`key_id` are missing or not strings.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| ApiError::MalformedResponse(format!("public key: {}", e)).into())
    }
}
