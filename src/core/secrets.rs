//! Secret save pipeline.
//!
//! validate → fetch key → seal → submit, strictly in that order. Any error
//! aborts the remaining steps; nothing local needs undoing.

use std::fmt;

use tracing::{debug, info};

use crate::core::cipher;
use crate::core::domain::SecretSubmission;
use crate::core::github::{GitHub, Transport};
use crate::core::scope::Scope;
use crate::core::types::KeyId;
use crate::core::validation;
use crate::error::Result;

/// Pipeline stage reached by an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    KeyFetched,
    Sealed,
    Submitted,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::KeyFetched => "key-fetched",
            Stage::Sealed => "sealed",
            Stage::Submitted => "submitted",
        };
        f.write_str(name)
    }
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    /// Key the secret was sealed under
    pub key_id: KeyId,
    /// `message` GitHub attached to the response, if any
    pub message: Option<String>,
}

/// Seal `value` and store it as secret `name` in `scope`.
///
/// Validation (secret name, scope identifiers, organization visibility)
/// happens before any request is sent.
///
/// # Errors
///
/// - `ValidationError` for inconsistent arguments (no request sent)
/// - `ApiError` for HTTP failures or a malformed key response
/// - `CipherError` if GitHub's public key cannot be used
pub fn save<T: Transport>(
    github: &GitHub<T>,
    scope: &Scope,
    name: &str,
    value: &str,
) -> Result<Saved> {
    validation::validate_secret_name(name)?;
    scope.validate()?;
    debug!(stage = %Stage::Start, %scope, secret = name, "saving secret");

    let key = github.fetch_public_key(scope)?;
    debug!(stage = %Stage::KeyFetched, key_id = %key.key_id);

    let encrypted = cipher::seal(&key.key, value)?;
    debug!(stage = %Stage::Sealed);

    let submission = SecretSubmission::new(encrypted, key.key_id, scope);
    let message = github.put_secret(scope, name, &submission)?;
    debug!(stage = %Stage::Submitted);

    info!(%scope, secret = name, "secret saved");

    Ok(Saved {
        key_id: submission.key_id,
        message,
    })
}
