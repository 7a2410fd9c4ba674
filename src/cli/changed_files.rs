//! Changed files operation: collect, print, lint.

use std::io::{self, Write};
use std::process::ExitCode;

use lint_changed::{
    ActionsContext, ChangedFilesGateway, ChangedFilesIntake, ExtensionFilter, IntakeError,
    LintChangedConfig, LintCommand, LintOutcome, OctocrabChangedFilesGateway, PersonalAccessToken,
    PullRequestLocator,
};

use super::output::write_files_to;

/// How a run ended when no fatal error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The run was not triggered by a pull request; nothing was printed.
    NoPullRequest,
    /// Files were collected and printed.
    Collected {
        /// False when pagination stopped on an error.
        complete: bool,
        /// Linter result, when a lint command is configured.
        lint: Option<LintOutcome>,
    },
}

impl RunStatus {
    /// Returns true when every page was fetched and the linter, if any,
    /// passed.
    #[must_use]
    pub fn is_success(self) -> bool {
        match self {
            Self::NoPullRequest => true,
            Self::Collected { complete, lint } => {
                complete && lint.is_none_or(LintOutcome::is_success)
            }
        }
    }

    /// Process exit code for this status.
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Runs the changed files operation against GitHub.
///
/// # Errors
///
/// Returns configuration errors (missing token or extensions, malformed pull
/// request references) before any request is made, and
/// [`IntakeError::Io`] or [`IntakeError::Lint`] when output or the linter
/// fails. Page fetch failures are not errors here; they are reported through
/// [`RunStatus::Collected`].
pub async fn run(config: &LintChangedConfig) -> Result<RunStatus, IntakeError> {
    config.validate()?;
    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let filter = config.require_extensions()?;

    let context = ActionsContext::from_env()?;
    let Some(locator) = context.resolve_locator(config)? else {
        tracing::debug!("no pull request in context; nothing to lint");
        return Ok(RunStatus::NoPullRequest);
    };

    let gateway = OctocrabChangedFilesGateway::for_token(&token, &locator)?;
    let lint = config.lint_command.as_deref().and_then(LintCommand::parse);

    collect_and_lint(
        &gateway,
        &locator,
        &filter,
        lint.as_ref(),
        &mut io::stdout(),
    )
    .await
}

/// Collects the pull request's matching files, writes them to `writer`, and
/// runs `lint` over them.
///
/// Files recovered before a page fetch failure are still written and linted.
///
/// # Errors
///
/// Returns [`IntakeError::Io`] when writing fails and [`IntakeError::Lint`]
/// when the linter cannot be started.
pub async fn collect_and_lint<Gateway, W>(
    gateway: &Gateway,
    locator: &PullRequestLocator,
    filter: &ExtensionFilter,
    lint: Option<&LintCommand>,
    writer: &mut W,
) -> Result<RunStatus, IntakeError>
where
    Gateway: ChangedFilesGateway,
    W: Write,
{
    let changed = ChangedFilesIntake::new(gateway)
        .collect(locator, filter)
        .await;

    write_files_to(writer, changed.files())?;

    let lint_outcome = match lint {
        Some(command) => Some(command.run(changed.files()).await?),
        None => None,
    };

    Ok(RunStatus::Collected {
        complete: changed.is_complete(),
        lint: lint_outcome,
    })
}
