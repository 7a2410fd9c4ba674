//! Library crate collecting the files changed in a GitHub pull request.
//!
//! The library wraps Octocrab to page through a pull request's changed files
//! over GitHub's GraphQL API, keeps the paths whose extension is on an
//! allow-list, and hands them to a lint command. A page fetch that fails
//! part-way through stops pagination without discarding the files already
//! collected.

pub mod config;
pub mod filter;
pub mod github;
pub mod lint;

pub use config::LintChangedConfig;
pub use filter::ExtensionFilter;
pub use github::{
    ActionsContext, ChangedFiles, ChangedFilesGateway, ChangedFilesIntake, Cursor, FilePage,
    IntakeError, OctocrabChangedFilesGateway, PersonalAccessToken, PullRequestLocator,
};
pub use lint::{LintCommand, LintOutcome};
