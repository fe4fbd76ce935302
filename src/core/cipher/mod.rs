//! Cryptographic operations.
//!
//! GitHub encrypts Actions secrets with libsodium sealed boxes: the client
//! seals under the scope's Curve25519 public key and only GitHub, holding the
//! private key, can open the result. This module only ever seals.

use crate::error::Result;

mod sealed_box;

pub use sealed_box::{parse_public_key, SealedBox, PUBLIC_KEY_LEN};

/// One-way sealing backend.
///
/// Recipients are backend-specific; for [`SealedBox`] they are raw
/// Curve25519 public keys.
pub trait Cipher {
    /// Type representing a recipient public key.
    type Recipient;

    /// Seal plaintext so only the recipient can open it.
    ///
    /// # Returns
    ///
    /// Base64 ciphertext, different on every call.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if sealing fails.
    fn seal(&self, plaintext: &str, recipient: &Self::Recipient) -> Result<String>;
}

/// Seal `plaintext` under a base64-encoded public key.
///
/// Convenience wrapper around [`parse_public_key`] and `SealedBox::seal`.
///
/// # Errors
///
/// Returns `CipherError::InvalidKey` if the key is not base64 or not
/// [`PUBLIC_KEY_LEN`] bytes long.
pub fn seal(public_key: &str, plaintext: &str) -> Result<String> {
    let recipient = parse_public_key(public_key)?;
    SealedBox.seal(plaintext, &recipient)
}
