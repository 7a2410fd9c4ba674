//! GitHub changed files intake.
//!
//! This module wraps Octocrab to page through a pull request's changed files
//! over the GraphQL API. Errors are mapped into user-friendly variants so
//! that callers can surface precise failures without exposing Octocrab
//! internals.

pub mod context;
pub mod error;
pub mod gateway;
pub mod intake;
pub mod locator;
pub mod models;
pub mod pagination;

pub use context::ActionsContext;
pub use error::IntakeError;
pub use gateway::{ChangedFilesGateway, OctocrabChangedFilesGateway};
pub use intake::{ChangedFiles, ChangedFilesIntake, changed_file_pages};
pub use locator::{
    PersonalAccessToken, PullRequestLocator, PullRequestNumber, RepositoryName, RepositoryOwner,
};
pub use pagination::{Cursor, FILES_PAGE_SIZE, FilePage};

#[cfg(test)]
pub use gateway::MockChangedFilesGateway;

#[cfg(test)]
mod tests;
