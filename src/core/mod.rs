//! Core library components.
//!
//! The secret-sealing and submission protocol: scopes, the sealed-box cipher,
//! the GitHub API client and the pipeline tying them together.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod github;
pub mod scope;
pub mod secrets;
pub mod types;
pub mod validation;
