//! Error types.
//!
//! One top-level [`Error`] nests an enum per concern so callers can match on
//! the failure class (validation, API, cipher, configuration).

use thiserror::Error;

use crate::core::scope::Visibility;

/// Top-level error for every ghsecret operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Caller-supplied arguments that are inconsistent or malformed.
///
/// Raised before any network call; never retried.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error(
        "visibility '{visibility}' does not match the selected repositories ({selected} given): \
         'selected' visibility requires repository ids, and repository ids require 'selected' visibility"
    )]
    VisibilityMismatch {
        visibility: Visibility,
        selected: usize,
    },

    #[error("invalid secret name '{name}': {reason}")]
    InvalidSecretName { name: String, reason: String },

    #[error("{0} must not be empty")]
    EmptyIdentifier(&'static str),
}

/// Failures talking to the GitHub REST API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("github returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("malformed response from github: {0}")]
    MalformedResponse(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Failures sealing a secret.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid public key: {0}")]
    InvalidKey(String),

    #[error("sealing failed: {0}")]
    SealFailed(String),
}

/// Invalid runtime configuration or input.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no github token provided")]
    MissingToken,

    #[error("invalid api url '{0}': expected an http or https base url without query or fragment")]
    InvalidApiUrl(String),

    #[error("failed to read secret value: {0}")]
    Input(String),
}

impl Error {
    /// HTTP status carried by the error, if GitHub answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(ApiError::Http { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
