//! CLI operation handlers.
//!
//! - [`changed_files`]: resolve the pull request, collect its changed files,
//!   print them, and hand them to the linter
//!
//! Output formatting utilities are in [`output`].

pub mod changed_files;
pub mod output;

#[cfg(test)]
pub mod test_utils;
