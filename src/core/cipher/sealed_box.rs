//! Sealed-box backend.
//!
//! X25519 + XSalsa20-Poly1305 with an ephemeral sender key, byte-compatible
//! with libsodium's `crypto_box_seal`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use crypto_box::aead::OsRng;
use crypto_box::PublicKey;
use tracing::trace;

use super::Cipher;
use crate::error::{CipherError, Result};

/// Curve25519 public key size in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Anonymous sealed-box cipher.
pub struct SealedBox;

impl Cipher for SealedBox {
    type Recipient = PublicKey;

    fn seal(&self, plaintext: &str, recipient: &PublicKey) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "sealing");

        let sealed = recipient
            .seal(&mut OsRng, plaintext.as_bytes())
            .map_err(|e| CipherError::SealFailed(e.to_string()))?;

        trace!(ciphertext_len = sealed.len(), "sealed");

        Ok(BASE64.encode(sealed))
    }
}

/// Decode a base64 public key as returned by GitHub.
///
/// # Errors
///
/// Returns `CipherError::InvalidKey` if decoding fails or the key is not
/// exactly [`PUBLIC_KEY_LEN`] bytes.
pub fn parse_public_key(key: &str) -> Result<PublicKey> {
    let bytes = BASE64
        .decode(key.trim())
        .map_err(|e| CipherError::InvalidKey(format!("not valid base64: {}", e)))?;

    let raw: [u8; PUBLIC_KEY_LEN] = bytes.as_slice().try_into().map_err(|_| {
        CipherError::InvalidKey(format!(
            "expected {} bytes, got {}",
            PUBLIC_KEY_LEN,
            bytes.len()
        ))
    })?;

    Ok(PublicKey::from(raw))
}
