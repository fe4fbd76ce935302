//! Tests for `ghsecret env`.

use crate::support::*;

#[test]
fn test_env_saves_secret() {
    let mut t = Test::new();
    let key = t.mock_public_key(ENV_SECRETS);
    let put = t.mock_put(&format!("{}/DB_PASSWORD", ENV_SECRETS), 201, "");

    let output = t.env("DB_PASSWORD", "s3cr3t");
    assert_success(&output);
    assert_stdout_contains(&output, "environment 424242/production");

    key.assert();
    put.assert();
}

#[test]
fn test_env_body_has_no_organization_fields() {
    let mut t = Test::new();
    let _key = t.mock_public_key(ENV_SECRETS);
    let put = t
        .server
        .mock("PUT", format!("{}/DB_PASSWORD", ENV_SECRETS).as_str())
        .match_body(mockito::Matcher::Regex(
            r#"^\{"encrypted_value":"[A-Za-z0-9+/=]+","key_id":"568250167242549743"\}$"#
                .to_string(),
        ))
        .with_status(201)
        .expect(1)
        .create();

    let output = t.env("DB_PASSWORD", "s3cr3t");
    assert_success(&output);
    put.assert();
}

#[test]
fn test_env_legacy_flags() {
    let mut t = Test::new();
    let _key = t.mock_public_key(ENV_SECRETS);
    let put = t.mock_put(&format!("{}/DB_PASSWORD", ENV_SECRETS), 201, "");

    let output = t
        .cmd()
        .args(["env", "--destination-github-token", TOKEN])
        .args(["--secret-name", "DB_PASSWORD", "--secret-value", "s3cr3t"])
        .args(["--destination-repository-id", "424242"])
        .args(["--destination-environment", "production"])
        .output()
        .unwrap();
    assert_success(&output);
    put.assert();
}

#[test]
fn test_env_missing_environment_is_usage_error() {
    let mut t = Test::new();
    let never = t.mock_never("GET");

    let output = t
        .cmd()
        .args(["env", "--token", TOKEN, "--secret-name", "X", "--secret-value", "v"])
        .args(["--repository-id", "424242"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
    never.assert();
}
