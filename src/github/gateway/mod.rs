//! Gateways for loading changed files through Octocrab.
//!
//! The trait-based design enables mocking in tests while the Octocrab
//! implementation issues the GraphQL requests.

mod changed_files;
mod client;
mod error_mapping;

pub use changed_files::OctocrabChangedFilesGateway;

use async_trait::async_trait;

use crate::github::error::IntakeError;
use crate::github::locator::PullRequestLocator;
use crate::github::pagination::{Cursor, FilePage};

/// Gateway that can fetch one page of a pull request's changed files.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChangedFilesGateway: Send + Sync {
    /// Fetch the page of changed files that starts after `cursor`.
    ///
    /// `None` requests the first page. A pull request that does not exist,
    /// or has no file collection, yields an empty terminal page rather than
    /// an error.
    async fn changed_files_page(
        &self,
        locator: &PullRequestLocator,
        cursor: Option<Cursor>,
    ) -> Result<FilePage, IntakeError>;
}
