//! Tests for `ghsecret org`.

use crate::support::*;
use mockito::Matcher;
use serde_json::json;

#[test]
fn test_org_selected_repositories() {
    let mut t = Test::new();
    let key = t.mock_public_key(ORG_SECRETS);
    let put = t
        .server
        .mock("PUT", format!("{}/NPM_TOKEN", ORG_SECRETS).as_str())
        .match_body(Matcher::PartialJson(json!({
            "key_id": KEY_ID,
            "visibility": "selected",
            "selected_repository_ids": [123, 456]
        })))
        .with_status(201)
        .expect(1)
        .create();

    let output = t.org("NPM_TOKEN", "npm_abc", "selected", Some("123, 456"));
    assert_success(&output);
    assert_stdout_contains(&output, "organization acme");

    key.assert();
    put.assert();
}

#[test]
fn test_org_all_visibility() {
    let mut t = Test::new();
    let _key = t.mock_public_key(ORG_SECRETS);
    let put = t
        .server
        .mock("PUT", format!("{}/NPM_TOKEN", ORG_SECRETS).as_str())
        .match_body(Matcher::PartialJson(json!({
            "visibility": "all",
            "selected_repository_ids": []
        })))
        .with_status(204)
        .expect(1)
        .create();

    let output = t.org("NPM_TOKEN", "npm_abc", "all", None);
    assert_success(&output);
    put.assert();
}

#[test]
fn test_org_selected_without_ids_rejected_before_network() {
    let mut t = Test::new();
    let get = t.mock_never("GET");
    let put = t.mock_never("PUT");

    let output = t.org("NPM_TOKEN", "npm_abc", "selected", None);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "visibility");
    assert_stderr_contains(&output, "--selected-repository-ids");

    get.assert();
    put.assert();
}

#[test]
fn test_org_ids_without_selected_rejected_before_network() {
    let mut t = Test::new();
    let get = t.mock_never("GET");
    let put = t.mock_never("PUT");

    let output = t.org("NPM_TOKEN", "npm_abc", "private", Some("123"));
    assert_failure(&output);
    assert_stderr_contains(&output, "visibility 'private'");

    get.assert();
    put.assert();
}

#[test]
fn test_org_unknown_visibility_is_usage_error() {
    let mut t = Test::new();
    let never = t.mock_never("GET");

    let output = t.org("NPM_TOKEN", "npm_abc", "public", None);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
    assert_stderr_contains(&output, "public");
    never.assert();
}

#[test]
fn test_org_non_numeric_ids_are_usage_error() {
    let mut t = Test::new();
    let never = t.mock_never("GET");

    let output = t.org("NPM_TOKEN", "npm_abc", "selected", Some("123,widgets"));
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
    assert_stderr_contains(&output, "widgets");
    never.assert();
}

#[test]
fn test_org_github_message_is_warned() {
    let mut t = Test::new();
    let _key = t.mock_public_key(ORG_SECRETS);
    let _put = t.mock_put(
        &format!("{}/NPM_TOKEN", ORG_SECRETS),
        201,
        r#"{"message":"Secret visibility will change on next sync"}"#,
    );

    let output = t.org("NPM_TOKEN", "npm_abc", "all", None);
    assert_success(&output);
    assert_stderr_contains(&output, "Secret visibility will change on next sync");
}
