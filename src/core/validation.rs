//! Input validation for ghsecret operations.
//!
//! Everything here runs before the first network call.

use crate::core::scope::{SelectedRepositories, Visibility};
use crate::error::{Result, ValidationError};

/// Prefix GitHub reserves for its own secrets.
const RESERVED_PREFIX: &str = "GITHUB_";

/// Validate a secret name.
///
/// GitHub secret names:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot start with the reserved `GITHUB_` prefix (any case)
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ValidationError::InvalidSecretName` if the name is invalid.
pub fn validate_secret_name(name: &str) -> Result<()> {
    let invalid = |reason: String| -> crate::error::Error {
        ValidationError::InvalidSecretName {
            name: name.to_string(),
            reason,
        }
        .into()
    };

    let first = match name.chars().next() {
        Some(c) => c,
        None => return Err(invalid("name is empty".to_string())),
    };

    if first.is_ascii_digit() {
        return Err(invalid("cannot start with a digit".to_string()));
    }

    if let Some((i, ch)) = name
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_alphanumeric() && *ch != '_')
    {
        return Err(invalid(format!(
            "invalid character '{}' at position {}. Only letters, digits, and underscore are allowed",
            ch,
            i + 1
        )));
    }

    if name.len() >= RESERVED_PREFIX.len()
        && name[..RESERVED_PREFIX.len()].eq_ignore_ascii_case(RESERVED_PREFIX)
    {
        return Err(invalid(format!(
            "the {} prefix is reserved by github",
            RESERVED_PREFIX
        )));
    }

    Ok(())
}

/// Whether an organization's visibility agrees with its repository selection.
///
/// Repository ids must be given if and only if visibility is `selected`.
pub fn visibility_matches_selection(
    visibility: Visibility,
    selected: &SelectedRepositories,
) -> bool {
    let is_selected = visibility == Visibility::Selected;
    let has_repositories = !selected.is_empty();
    is_selected == has_repositories
}

/// Require a non-blank scope identifier.
///
/// # Errors
///
/// Returns `ValidationError::EmptyIdentifier` naming `field`.
pub fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyIdentifier(field).into());
    }
    Ok(())
}
