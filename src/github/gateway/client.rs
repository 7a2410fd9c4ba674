//! Authenticated Octocrab client rooted at the pull request's API base.

use http::Uri;
use octocrab::Octocrab;
use url::Url;

use crate::github::error::IntakeError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Creates a client whose relative `/graphql` route resolves against
/// `api_base`: `https://api.github.com/graphql` for github.com and
/// `https://<host>/api/graphql` for an Enterprise server.
///
/// # Errors
///
/// `IntakeError::InvalidUrl` when `api_base` is not a valid URI, or the
/// mapped Octocrab error when the client cannot be assembled.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &Url,
) -> Result<Octocrab, IntakeError> {
    let graphql_root = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| IntakeError::InvalidUrl(format!("{api_base}: {error}")))?;

    let builder = Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(graphql_root)
        .map_err(|error| map_octocrab_error("configure GraphQL root", &error))?;

    builder
        .build()
        .map_err(|error| map_octocrab_error("build GitHub client", &error))
}
