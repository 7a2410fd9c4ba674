//! Pull request context discovery.
//!
//! Inside a GitHub Actions run the target pull request is described by
//! environment variables and the webhook event payload. Explicit
//! configuration takes precedence over both.

use std::env;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

use super::error::IntakeError;
use super::locator::{PullRequestLocator, api_base_from_endpoint};
use crate::config::LintChangedConfig;

const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
const EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";
const GRAPHQL_URL_VAR: &str = "GITHUB_GRAPHQL_URL";

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<EventPullRequest>,
}

#[derive(Debug, Deserialize)]
struct EventPullRequest {
    number: u64,
}

/// Values a GitHub Actions runner provides about the current run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionsContext {
    repository: Option<String>,
    pull_request_number: Option<u64>,
    graphql_url: Option<String>,
}

impl ActionsContext {
    /// Reads `GITHUB_REPOSITORY`, `GITHUB_GRAPHQL_URL`, and the pull request
    /// number from the event payload at `GITHUB_EVENT_PATH`.
    ///
    /// Unset or blank variables are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Io`] when the event payload cannot be read and
    /// [`IntakeError::Configuration`] when it is not valid JSON.
    pub fn from_env() -> Result<Self, IntakeError> {
        let pull_request_number = match non_blank_var(EVENT_PATH_VAR) {
            Some(event_path) => read_event_number(&Utf8PathBuf::from(event_path))?,
            None => None,
        };

        Ok(Self {
            repository: non_blank_var(REPOSITORY_VAR),
            pull_request_number,
            graphql_url: non_blank_var(GRAPHQL_URL_VAR),
        })
    }

    /// Sets the `owner/repo` slug.
    #[must_use]
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    /// Sets the pull request number taken from the event payload.
    #[must_use]
    pub const fn with_pull_request_number(mut self, number: u64) -> Self {
        self.pull_request_number = Some(number);
        self
    }

    /// Sets the GraphQL endpoint URL.
    #[must_use]
    pub fn with_graphql_url(mut self, url: impl Into<String>) -> Self {
        self.graphql_url = Some(url.into());
        self
    }

    /// Works out which pull request to inspect.
    ///
    /// `pr_url` wins outright. Otherwise the number comes from `pr_number`
    /// or the event payload, the repository from `owner`/`repo` or
    /// `GITHUB_REPOSITORY`, and the API root from `api_url`,
    /// `GITHUB_GRAPHQL_URL`, or github.com. Returns `Ok(None)` when there is
    /// no pull request number anywhere.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Configuration`] when a pull request number is
    /// known but the repository is not, and the locator errors for malformed
    /// URLs, slugs, or numbers.
    pub fn resolve_locator(
        &self,
        config: &LintChangedConfig,
    ) -> Result<Option<PullRequestLocator>, IntakeError> {
        let configured_base = config
            .api_url
            .as_deref()
            .map(api_base_from_endpoint)
            .transpose()?;

        if let Some(pr_url) = config.pr_url.as_deref() {
            let locator = PullRequestLocator::parse(pr_url)?;
            return Ok(Some(match configured_base {
                Some(api_base) => locator.with_api_base(api_base),
                None => locator,
            }));
        }

        let Some(number) = config.pr_number.or(self.pull_request_number) else {
            return Ok(None);
        };

        let (owner, repository) = self.repository_slug(config)?;
        let api_base = match (configured_base, self.graphql_url.as_deref()) {
            (Some(api_base), _) => Some(api_base),
            (None, Some(endpoint)) => Some(api_base_from_endpoint(endpoint)?),
            (None, None) => None,
        };

        let locator = match api_base {
            Some(base) => PullRequestLocator::from_parts(base, owner, repository, number)?,
            None => PullRequestLocator::on_github(owner, repository, number)?,
        };
        Ok(Some(locator))
    }

    fn repository_slug<'a>(
        &'a self,
        config: &'a LintChangedConfig,
    ) -> Result<(&'a str, &'a str), IntakeError> {
        if let (Some(owner), Some(repo)) = (config.owner.as_deref(), config.repo.as_deref()) {
            return Ok((owner, repo));
        }

        let slug = self
            .repository
            .as_deref()
            .ok_or_else(|| IntakeError::Configuration {
                message: format!(
                    "pull request repository is unknown (set --owner and --repo or \
                     {REPOSITORY_VAR})"
                ),
            })?;

        slug.split_once('/')
            .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty() && !repo.contains('/'))
            .ok_or_else(|| IntakeError::Configuration {
                message: format!("{REPOSITORY_VAR} must be owner/repo, got {slug}"),
            })
    }
}

/// Reads the pull request number from a webhook event payload.
///
/// Payloads of events other than pull requests carry no `pull_request`
/// object and yield `None`.
///
/// # Errors
///
/// Returns [`IntakeError::Io`] when the file cannot be read and
/// [`IntakeError::Configuration`] when it is not valid JSON.
pub fn read_event_number(event_path: &Utf8Path) -> Result<Option<u64>, IntakeError> {
    let contents = fs::read_to_string(event_path).map_err(|error| IntakeError::Io {
        message: format!("failed to read event payload {event_path}: {error}"),
    })?;

    let payload: EventPayload =
        serde_json::from_str(&contents).map_err(|error| IntakeError::Configuration {
            message: format!("event payload {event_path} is not valid JSON: {error}"),
        })?;

    Ok(payload.pull_request.map(|pull_request| pull_request.number))
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
