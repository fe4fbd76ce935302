//! Constants used throughout ghsecret.
//!
//! Centralizes GitHub API details and environment variable names.

use std::time::Duration;

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST API version pinned on every request.
pub const API_VERSION: &str = "2022-11-28";

/// Media type GitHub recommends for REST requests.
pub const ACCEPT: &str = "application/vnd.github+json";

/// Client-side timeout for each request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable holding the access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL (set by GitHub Actions runners).
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "GHSECRET_LOG";

/// Set to `json` for one JSON object per log line.
pub const LOG_FORMAT_ENV: &str = "GHSECRET_LOG_FORMAT";

/// User agent sent with every request; GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!("ghsecret/", env!("CARGO_PKG_VERSION"));
