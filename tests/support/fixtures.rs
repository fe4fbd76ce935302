//! Test fixtures and constants.

/// Token every test request carries.
pub const TOKEN: &str = "ghp_test_token";

/// Key id served by the mock public-key endpoints.
pub const KEY_ID: &str = "568250167242549743";

/// Secrets path of the standard test repository.
pub const REPO_SECRETS: &str = "/repos/acme/widgets/actions/secrets";

/// Secrets path of the standard test environment.
pub const ENV_SECRETS: &str = "/repositories/424242/environments/production/secrets";

/// Secrets path of the standard test organization.
pub const ORG_SECRETS: &str = "/orgs/acme/actions/secrets";

/// Typical GitHub 404 body.
pub const NOT_FOUND_BODY: &str =
    r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#;

/// Plaintexts exercising multi-byte UTF-8 and edge shapes.
pub const AWKWARD_VALUES: &[&str] = &[
    "",
    "hello world",
    "こんにちは世界",
    "🚀🎉💯",
    "line1\nline2\n",
    "  padded  ",
    "quote\"back\\slash$HOME`cmd`",
];
