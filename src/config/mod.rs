//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.lint-changed.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `LINT_CHANGED_TOKEN`,
//!    `LINT_CHANGED_EXTENSIONS`, and so on
//! 4. **Command-line arguments** – `--token`/`-t`, `--extensions`/`-e`, ...
//!
//! When neither the token nor the extension list is configured, the GitHub
//! Actions inputs (`INPUT_REPO-TOKEN`, `INPUT_EXTENSIONS`) and the legacy
//! `GITHUB_TOKEN` variable are consulted.
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! extensions = "ts, tsx, js"
//! lint_command = "npx eslint"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::filter::ExtensionFilter;
use crate::github::error::IntakeError;

const TOKEN_INPUT_VAR: &str = "INPUT_REPO-TOKEN";
const EXTENSIONS_INPUT_VAR: &str = "INPUT_EXTENSIONS";
const LEGACY_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use lint_changed::LintChangedConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = LintChangedConfig::load().expect("failed to load configuration");
/// let token = config.resolve_token().expect("token required");
/// let filter = config.require_extensions().expect("extensions required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "LINT_CHANGED",
    discovery(
        dotfile_name = ".lint-changed.toml",
        config_file_name = "lint-changed.toml",
        app_name = "lint-changed"
    )
)]
pub struct LintChangedConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `LINT_CHANGED_TOKEN`, `INPUT_REPO-TOKEN`, or
    ///   `GITHUB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Comma-separated file extensions to keep, e.g. `"ts, js"`.
    ///
    /// Can be provided via:
    /// - CLI: `--extensions <LIST>` or `-e <LIST>`
    /// - Environment: `LINT_CHANGED_EXTENSIONS` or `INPUT_EXTENSIONS`
    /// - Config file: `extensions = "..."`
    #[ortho_config(cli_short = 'e')]
    pub extensions: Option<String>,

    /// GitHub pull request URL to inspect instead of the Actions context.
    #[ortho_config(cli_short = 'u')]
    pub pr_url: Option<String>,

    /// Repository owner (e.g., "octocat").
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name (e.g., "hello-world").
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Pull request number.
    #[ortho_config(cli_short = 'n')]
    pub pr_number: Option<u64>,

    /// GraphQL endpoint or API root for GitHub Enterprise installations.
    #[ortho_config()]
    pub api_url: Option<String>,

    /// Lint command run with the matching paths appended, e.g.
    /// `"npx eslint --max-warnings 0"`.
    #[ortho_config(cli_short = 'l')]
    pub lint_command: Option<String>,
}

impl LintChangedConfig {
    /// Resolves the token from configuration, the Actions `repo-token`
    /// input, or the legacy `GITHUB_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, IntakeError> {
        non_blank(self.token.as_deref())
            .or_else(|| non_blank_var(TOKEN_INPUT_VAR))
            .or_else(|| non_blank_var(LEGACY_TOKEN_VAR))
            .ok_or(IntakeError::MissingToken)
    }

    /// Builds the extension filter from configuration or the Actions
    /// `extensions` input.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingExtensions`] when no extension list is
    /// configured or the list holds no usable entries.
    pub fn require_extensions(&self) -> Result<ExtensionFilter, IntakeError> {
        let list = non_blank(self.extensions.as_deref())
            .or_else(|| non_blank_var(EXTENSIONS_INPUT_VAR))
            .ok_or(IntakeError::MissingExtensions)?;

        let filter = ExtensionFilter::parse(&list);
        if filter.is_empty() {
            return Err(IntakeError::MissingExtensions);
        }
        Ok(filter)
    }

    /// Checks that the pull request options do not contradict each other.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] when only one of `owner` and
    /// `repo` is set, or when `pr_url` is combined with `pr_number`.
    pub fn validate(&self) -> Result<(), IntakeError> {
        match (&self.owner, &self.repo) {
            (Some(_), None) => {
                return Err(IntakeError::Configuration {
                    message: "repository name is required with --owner (use --repo or -r)"
                        .to_owned(),
                });
            }
            (None, Some(_)) => {
                return Err(IntakeError::Configuration {
                    message: "repository owner is required with --repo (use --owner or -o)"
                        .to_owned(),
                });
            }
            _ => {}
        }

        if self.pr_url.is_some() && self.pr_number.is_some() {
            return Err(IntakeError::Configuration {
                message: "--pr-url and --pr-number cannot be used together".to_owned(),
            });
        }

        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|candidate| !candidate.trim().is_empty())
        .map(ToOwned::to_owned)
}

fn non_blank_var(name: &str) -> Option<String> {
    non_blank(env::var(name).ok().as_deref())
}

#[cfg(test)]
mod tests;
