//! Error types exposed by the GitHub intake layer.

use thiserror::Error;

/// Errors surfaced while reading configuration or communicating with GitHub.
///
/// Variants fall into two families. Configuration failures (missing token,
/// missing extensions, malformed pull request references) are fatal before
/// any request is sent. Transport failures (see
/// [`IntakeError::is_transport_failure`]) are raised by a single page fetch
/// and stop pagination without discarding files collected so far.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeError {
    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// No file extensions were configured.
    #[error("at least one file extension is required")]
    MissingExtensions,

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The provided URL could not be parsed.
    #[error("pull request URL is invalid: {0}")]
    InvalidUrl(String),

    /// The pull request path is incomplete.
    #[error("pull request URL must match /owner/repo/pull/<number>")]
    MissingPathSegments,

    /// The pull request number is not a valid integer.
    #[error("pull request number must be a positive integer")]
    InvalidPullRequestNumber,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body or GraphQL error messages describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Error message from GitHub.
        message: String,
    },

    /// The response did not have the shape of a changed files page.
    #[error("unexpected response from GitHub: {message}")]
    UnexpectedResponse {
        /// Description of the mismatch.
        message: String,
    },

    /// The repository owning the pull request could not be resolved.
    #[error("repository {owner}/{repository} was not found")]
    RepositoryNotFound {
        /// Repository owner.
        owner: String,
        /// Repository name.
        repository: String,
    },

    /// GitHub reported more pages without supplying a continuation cursor.
    #[error("GitHub reported another page of changed files without a cursor")]
    MissingCursor,

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The lint command could not be started.
    #[error("failed to run lint command `{command}`: {message}")]
    Lint {
        /// Program that was being launched.
        command: String,
        /// Error detail from the process spawn.
        message: String,
    },
}

impl IntakeError {
    /// Returns true when the error came from a single remote call that did
    /// not complete successfully.
    ///
    /// These are the failures the changed files intake absorbs: pagination
    /// stops, and the files gathered from earlier pages are still returned.
    #[must_use]
    pub const fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. }
                | Self::Api { .. }
                | Self::Network { .. }
                | Self::RateLimitExceeded { .. }
                | Self::UnexpectedResponse { .. }
                | Self::RepositoryNotFound { .. }
                | Self::MissingCursor
        )
    }

    /// Returns true when the error means the run cannot start at all.
    #[must_use]
    pub const fn is_configuration_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingToken
                | Self::MissingExtensions
                | Self::Configuration { .. }
                | Self::InvalidUrl(_)
                | Self::MissingPathSegments
                | Self::InvalidPullRequestNumber
        )
    }
}
