//! GraphQL payloads for the changed files query.
//!
//! Types prefixed with `Api` are internal deserialisation targets that
//! convert into [`FilePage`].

use serde::{Deserialize, Serialize};

use crate::github::error::IntakeError;
use crate::github::locator::PullRequestLocator;
use crate::github::pagination::{Cursor, FILES_PAGE_SIZE, FilePage};

pub(crate) const CHANGED_FILES_QUERY: &str = r"
query ChangedFilesBatch($owner: String!, $repo: String!, $prNumber: Int!, $first: Int!, $cursor: String) {
  repository(owner: $owner, name: $repo) {
    pullRequest(number: $prNumber) {
      files(first: $first, after: $cursor) {
        pageInfo {
          hasNextPage
          endCursor
        }
        totalCount
        edges {
          cursor
          node {
            path
          }
        }
      }
    }
  }
}
";

const NOT_FOUND: &str = "NOT_FOUND";
const RATE_LIMITED: &str = "RATE_LIMITED";

/// Request body for a single changed files page.
#[derive(Debug, Serialize)]
pub(crate) struct ChangedFilesRequest<'a> {
    query: &'static str,
    variables: ChangedFilesVariables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangedFilesVariables<'a> {
    owner: &'a str,
    repo: &'a str,
    pr_number: u64,
    first: u8,
    cursor: Option<&'a str>,
}

impl<'a> ChangedFilesRequest<'a> {
    pub(crate) fn new(locator: &'a PullRequestLocator, cursor: Option<&'a Cursor>) -> Self {
        Self {
            query: CHANGED_FILES_QUERY,
            variables: ChangedFilesVariables {
                owner: locator.owner().as_str(),
                repo: locator.repository().as_str(),
                pr_number: locator.number().get(),
                first: FILES_PAGE_SIZE,
                cursor: cursor.map(Cursor::as_str),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiChangedFilesResponse {
    data: Option<ApiData>,
    #[serde(default)]
    errors: Vec<ApiGraphqlError>,
}

#[derive(Debug, Deserialize)]
struct ApiData {
    repository: Option<ApiRepository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiRepository {
    pull_request: Option<ApiPullRequest>,
}

#[derive(Debug, Deserialize)]
struct ApiPullRequest {
    files: Option<ApiFileConnection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiFileConnection {
    page_info: ApiPageInfo,
    #[serde(default)]
    edges: Vec<ApiFileEdge>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiFileEdge {
    node: Option<ApiFileNode>,
}

#[derive(Debug, Deserialize)]
struct ApiFileNode {
    path: String,
}

#[derive(Debug, Deserialize)]
struct ApiGraphqlError {
    #[serde(rename = "type")]
    kind: Option<String>,
    message: String,
}

impl ApiGraphqlError {
    fn is_not_found(&self) -> bool {
        self.kind.as_deref() == Some(NOT_FOUND)
    }
}

impl From<ApiFileConnection> for FilePage {
    fn from(connection: ApiFileConnection) -> Self {
        let items = connection
            .edges
            .into_iter()
            .filter_map(|edge| edge.node)
            .map(|node| node.path)
            .collect();

        Self::new(items).with_page_info(
            connection.page_info.has_next_page,
            connection.page_info.end_cursor.map(Cursor::new),
        )
    }
}

impl ApiChangedFilesResponse {
    /// Converts the GraphQL response into a page of file paths.
    ///
    /// A missing pull request, or one without a file collection, yields an
    /// empty terminal page even when GitHub attached `NOT_FOUND` errors. A
    /// missing repository and any other GraphQL error are failures.
    pub(crate) fn into_page(self, locator: &PullRequestLocator) -> Result<FilePage, IntakeError> {
        let Self { data, errors } = self;

        let Some(payload) = data else {
            return Err(graphql_failure(&errors));
        };

        let Some(repository) = payload.repository else {
            if errors.iter().all(ApiGraphqlError::is_not_found) {
                return Err(IntakeError::RepositoryNotFound {
                    owner: locator.owner().as_str().to_owned(),
                    repository: locator.repository().as_str().to_owned(),
                });
            }
            return Err(graphql_failure(&errors));
        };

        let Some(connection) = repository.pull_request.and_then(|pr| pr.files) else {
            if errors.iter().any(|error| !error.is_not_found()) {
                return Err(graphql_failure(&errors));
            }
            tracing::warn!("pull request {locator} has no changed files collection");
            return Ok(FilePage::empty());
        };

        if errors.is_empty() {
            Ok(connection.into())
        } else {
            Err(graphql_failure(&errors))
        }
    }
}

fn graphql_failure(errors: &[ApiGraphqlError]) -> IntakeError {
    if errors.is_empty() {
        return IntakeError::UnexpectedResponse {
            message: "response carried neither data nor errors".to_owned(),
        };
    }

    let message = errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    if errors
        .iter()
        .any(|error| error.kind.as_deref() == Some(RATE_LIMITED))
    {
        IntakeError::RateLimitExceeded { message }
    } else {
        IntakeError::Api { message }
    }
}
