//! Hands the collected paths to an external lint command.

use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

use crate::github::error::IntakeError;

/// A lint program and the arguments that precede the file paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintCommand {
    program: String,
    arguments: Vec<String>,
}

/// Result of handing files to the linter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintOutcome {
    /// No files matched, so the linter was not started.
    Skipped,
    /// The linter ran and exited successfully.
    Passed,
    /// The linter ran and reported a failure.
    Failed {
        /// Exit code, when the process exited normally.
        code: Option<i32>,
    },
}

impl LintOutcome {
    /// Returns true unless the linter reported a failure.
    #[must_use]
    pub const fn is_success(self) -> bool {
        !matches!(self, Self::Failed { .. })
    }

    fn from_status(status: ExitStatus) -> Self {
        if status.success() {
            Self::Passed
        } else {
            Self::Failed {
                code: status.code(),
            }
        }
    }
}

impl LintCommand {
    /// Splits a whitespace-separated command line such as
    /// `"npx eslint --max-warnings 0"`.
    ///
    /// Returns `None` for a blank command line.
    #[must_use]
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut words = command_line.split_whitespace().map(ToOwned::to_owned);
        let program = words.next()?;
        Some(Self {
            program,
            arguments: words.collect(),
        })
    }

    /// Program to execute.
    #[must_use]
    pub const fn program(&self) -> &str {
        self.program.as_str()
    }

    /// Full argument list for `files`: the configured arguments followed by
    /// each path.
    #[must_use]
    pub fn arguments_for<'a>(&'a self, files: &'a [String]) -> Vec<&'a str> {
        self.arguments
            .iter()
            .chain(files)
            .map(String::as_str)
            .collect()
    }

    /// Runs the linter over `files`, inheriting stdio.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Lint`] when the process cannot be started.
    pub async fn run(&self, files: &[String]) -> Result<LintOutcome, IntakeError> {
        if files.is_empty() {
            tracing::info!("no matching files; skipping {}", self.program);
            return Ok(LintOutcome::Skipped);
        }

        tracing::debug!("running {} over {} files", self.program, files.len());
        let status = Command::new(&self.program)
            .args(self.arguments_for(files))
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|error| IntakeError::Lint {
                command: self.program.clone(),
                message: error.to_string(),
            })?;

        Ok(LintOutcome::from_status(status))
    }
}
