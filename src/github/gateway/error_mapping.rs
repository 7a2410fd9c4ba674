//! Error mapping helpers for the Octocrab gateway.

use http::StatusCode;

use crate::github::error::IntakeError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks if an octocrab error means the body was not the JSON we expected.
const fn is_decode_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Json { .. } | octocrab::Error::Serde { .. }
    )
}

/// Checks whether the GitHub error represents a rate limit error based on the
/// HTTP status and message / documentation URL content.
pub(super) fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let is_rate_limit_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> IntakeError {
    if let octocrab::Error::GitHub { source, .. } = error {
        let status = source.status_code;
        let message = &source.message;
        return if is_rate_limit_error(source) {
            IntakeError::RateLimitExceeded {
                message: format!("{operation} failed: {message}"),
            }
        } else if is_auth_failure(status) {
            IntakeError::Authentication {
                message: format!("{operation} failed: GitHub returned {status} {message}"),
            }
        } else {
            IntakeError::Api {
                message: format!("{operation} failed with status {status}: {message}"),
            }
        };
    }

    if is_network_error(error) {
        return IntakeError::Network {
            message: format!("{operation} failed: {}", error_detail(error)),
        };
    }

    if is_decode_error(error) {
        return IntakeError::UnexpectedResponse {
            message: format!(
                "{operation} returned an unreadable body: {}",
                error_detail(error)
            ),
        };
    }

    IntakeError::Api {
        message: format!("{operation} failed: {}", error_detail(error)),
    }
}

/// Describes an octocrab error by its source chain, one line per cause.
///
/// Octocrab's own `Display` appends a captured backtrace, which is noise in
/// a CLI error message.
fn error_detail(error: &octocrab::Error) -> String {
    let mut causes = Vec::new();
    let mut next = std::error::Error::source(error);
    while let Some(cause) = next {
        causes.push(first_line(&cause.to_string()));
        next = cause.source();
    }

    if causes.is_empty() {
        first_line(&error.to_string())
    } else {
        causes.join(": ")
    }
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or_default().trim().to_owned()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::first_line;

    #[rstest]
    #[case::single("connection refused", "connection refused")]
    #[case::with_backtrace(
        "Service Error: client error (Connect)\n   0: std::backtrace::Backtrace::capture\n   1: octocrab",
        "Service Error: client error (Connect)"
    )]
    #[case::empty("", "")]
    fn first_line_drops_trailing_frames(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(first_line(text), expected);
    }
}
