//! Tests for field resolution methods (`resolve_token`, `require_extensions`).

use rstest::rstest;

use crate::LintChangedConfig;
use crate::github::error::IntakeError;

#[rstest]
fn resolve_token_returns_value_when_present() {
    let config = LintChangedConfig {
        token: Some("my-token".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.resolve_token().ok(),
        Some("my-token".to_owned()),
        "should return the token"
    );
}

#[rstest]
fn resolve_token_returns_error_when_none() {
    let _guard = env_lock::lock_env([
        ("GITHUB_TOKEN", None::<&str>),
        ("INPUT_REPO-TOKEN", None::<&str>),
    ]);
    let config = LintChangedConfig::default();

    assert_eq!(config.resolve_token(), Err(IntakeError::MissingToken));
}

#[rstest]
fn resolve_token_prefers_action_input_over_legacy_variable() {
    let _guard = env_lock::lock_env([
        ("GITHUB_TOKEN", Some("legacy-token")),
        ("INPUT_REPO-TOKEN", Some("input-token")),
    ]);
    let config = LintChangedConfig::default();

    assert_eq!(config.resolve_token().ok(), Some("input-token".to_owned()));
}

#[rstest]
fn resolve_token_falls_back_to_legacy_variable() {
    let _guard = env_lock::lock_env([
        ("GITHUB_TOKEN", Some("legacy-token")),
        ("INPUT_REPO-TOKEN", Some("  ")),
    ]);
    let config = LintChangedConfig::default();

    assert_eq!(config.resolve_token().ok(), Some("legacy-token".to_owned()));
}

#[rstest]
fn require_extensions_parses_comma_separated_list() {
    let config = LintChangedConfig {
        extensions: Some(" ts , js".to_owned()),
        ..Default::default()
    };

    let filter = config
        .require_extensions()
        .expect("extensions should be present");

    assert_eq!(filter.extensions().collect::<Vec<_>>(), ["ts", "js"]);
}

#[rstest]
fn require_extensions_reads_action_input() {
    let _guard = env_lock::lock_env([("INPUT_EXTENSIONS", Some("tsx"))]);
    let config = LintChangedConfig::default();

    let filter = config
        .require_extensions()
        .expect("extensions should come from the action input");

    assert!(filter.matches("src/App.tsx"));
}

#[rstest]
#[case::missing(None)]
#[case::blank(Some(" , "))]
fn require_extensions_rejects_missing_or_blank(#[case] extensions: Option<&str>) {
    let _guard = env_lock::lock_env([("INPUT_EXTENSIONS", None::<&str>)]);
    let config = LintChangedConfig {
        extensions: extensions.map(str::to_owned),
        ..Default::default()
    };

    assert_eq!(
        config.require_extensions(),
        Err(IntakeError::MissingExtensions)
    );
}

#[rstest]
fn blank_configured_token_falls_back_to_action_input() {
    let _guard = env_lock::lock_env([
        ("GITHUB_TOKEN", None::<&str>),
        ("INPUT_REPO-TOKEN", Some("input-token")),
    ]);
    let config = LintChangedConfig {
        token: Some("   ".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.resolve_token().ok(), Some("input-token".to_owned()));
}

#[rstest]
fn blank_configured_extensions_fall_back_to_action_input() {
    let _guard = env_lock::lock_env([("INPUT_EXTENSIONS", Some("ts"))]);
    let config = LintChangedConfig {
        extensions: Some(String::new()),
        ..Default::default()
    };

    let filter = config
        .require_extensions()
        .expect("extensions should come from the action input");

    assert_eq!(filter.extensions().collect::<Vec<_>>(), ["ts"]);
}
