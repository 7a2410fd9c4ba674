//! lint-changed CLI entrypoint.
//!
//! Prints the pull request's changed files that match the configured
//! extensions and hands them to the lint command. The process fails when
//! configuration is missing, when pagination stopped part-way (after
//! printing what was recovered), or when the linter fails.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use lint_changed::{IntakeError, LintChangedConfig};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let result = match load_config() {
        Ok(config) => cli::changed_files::run(&config).await,
        Err(error) => Err(error),
    };

    match result {
        Ok(status) => status.exit_code(),
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs to stderr so stdout carries only file paths. `RUST_LOG` overrides
/// the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`IntakeError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<LintChangedConfig, IntakeError> {
    LintChangedConfig::load().map_err(|error| IntakeError::Configuration {
        message: error.to_string(),
    })
}
