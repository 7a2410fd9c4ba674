//! Tests for configuration layer precedence.

use rstest::rstest;
use serde_json::{Value, json};

use super::helpers::build_config_from_layers;
use crate::LintChangedConfig;

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"extensions": "js"})), ("file", json!({"extensions": "ts"}))],
    "extensions",
    "ts",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"token": "file-token"})), ("environment", json!({"token": "env-token"}))],
    "token",
    "env-token",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![
        ("environment", json!({"lint_command": "eslint"})),
        ("cli", json!({"lint_command": "npx eslint"}))
    ],
    "lint_command",
    "npx eslint",
    "CLI should override environment"
)]
#[case::cli_wins_over_every_layer(
    vec![
        ("defaults", json!({"api_url": "default"})),
        ("file", json!({"api_url": "file"})),
        ("environment", json!({"api_url": "env"})),
        ("cli", json!({"api_url": "cli"}))
    ],
    "api_url",
    "cli",
    "CLI should win for api_url"
)]
fn test_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] field: &str,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let config = build_config_from_layers(&layers);

    let actual = match field {
        "extensions" => config.extensions.as_deref(),
        "token" => config.token.as_deref(),
        "lint_command" => config.lint_command.as_deref(),
        "api_url" => config.api_url.as_deref(),
        _ => panic!("unknown field: {field}"),
    };

    assert_eq!(actual, Some(expected), "{message}");
}

#[rstest]
fn numeric_pull_request_number_is_merged() {
    let config = build_config_from_layers(&[
        ("file", json!({"owner": "octo", "repo": "repo", "pr_number": 7})),
        ("environment", json!({"pr_number": 8})),
    ]);

    assert_eq!(config.owner.as_deref(), Some("octo"));
    assert_eq!(config.repo.as_deref(), Some("repo"));
    assert_eq!(config.pr_number, Some(8), "environment should win");
}

#[rstest]
fn unset_layers_leave_fields_empty() {
    let defaults =
        serde_json::to_value(LintChangedConfig::default()).expect("defaults should serialise");
    let config = build_config_from_layers(&[("defaults", defaults)]);

    assert!(config.token.is_none());
    assert!(config.extensions.is_none());
    assert!(config.pr_number.is_none());
    assert!(config.lint_command.is_none());
}
