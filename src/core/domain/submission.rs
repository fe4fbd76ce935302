//! Secret submission payload.

use serde::Serialize;

use crate::core::scope::{OrgAccess, Scope};
use crate::core::types::{EncryptedValue, KeyId};
use crate::error::Result;

/// JSON body of a secret write request.
///
/// Organization access fields are flattened in only for organization scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretSubmission {
    pub encrypted_value: EncryptedValue,
    pub key_id: KeyId,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub access: Option<OrgAccess>,
}

impl SecretSubmission {
    /// Build the payload for `scope` from a sealed value and its key id.
    pub fn new(encrypted_value: EncryptedValue, key_id: KeyId, scope: &Scope) -> Self {
        Self {
            encrypted_value,
            key_id,
            access: scope.extra_fields().cloned(),
        }
    }

    /// Serialize to the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
