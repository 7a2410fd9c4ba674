//! GraphQL gateway for a pull request's changed files.

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::error::IntakeError;
use crate::github::locator::{PersonalAccessToken, PullRequestLocator};
use crate::github::models::{ApiChangedFilesResponse, ChangedFilesRequest};
use crate::github::pagination::{Cursor, FilePage};

use super::ChangedFilesGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

const GRAPHQL_ROUTE: &str = "/graphql";

/// Octocrab-backed gateway issuing one GraphQL query per page.
pub struct OctocrabChangedFilesGateway {
    client: Octocrab,
}

impl OctocrabChangedFilesGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token and pull request locator.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidUrl` when the base URI cannot be parsed or
    /// `IntakeError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &PullRequestLocator,
    ) -> Result<Self, IntakeError> {
        let octocrab = build_octocrab_client(token, locator.api_base())?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl ChangedFilesGateway for OctocrabChangedFilesGateway {
    async fn changed_files_page(
        &self,
        locator: &PullRequestLocator,
        cursor: Option<Cursor>,
    ) -> Result<FilePage, IntakeError> {
        let request = ChangedFilesRequest::new(locator, cursor.as_ref());
        let response: ApiChangedFilesResponse = self
            .client
            .post(GRAPHQL_ROUTE, Some(&request))
            .await
            .map_err(|error| map_octocrab_error("changed files", &error))?;

        let page = response.into_page(locator)?;
        tracing::debug!(
            "fetched {count} changed files for {locator} (more pages: {more})",
            count = page.len(),
            more = page.has_next_page()
        );
        Ok(page)
    }
}
