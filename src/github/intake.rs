//! Changed files intake: pages through a pull request's files and filters
//! the accumulated list.

use futures::stream::{self, Stream, StreamExt};

use super::error::IntakeError;
use super::gateway::ChangedFilesGateway;
use super::locator::PullRequestLocator;
use super::pagination::{Cursor, FilePage};
use crate::filter::ExtensionFilter;

/// Outcome of collecting a pull request's changed files.
///
/// The file list is always usable. When pagination stopped early, `failure`
/// holds the error from the page fetch that failed and `files` holds the
/// matching paths from the pages fetched before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFiles {
    files: Vec<String>,
    pages_fetched: usize,
    failure: Option<IntakeError>,
}

impl ChangedFiles {
    /// Filtered paths, in page order then within-page order.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Number of pages fetched successfully.
    #[must_use]
    pub const fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Error that stopped pagination, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&IntakeError> {
        self.failure.as_ref()
    }

    /// Returns true if every available page was retrieved.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Next step of the pagination loop.
enum PageRequest {
    Fetch(Option<Cursor>),
    Fail(IntakeError),
    Finished,
}

impl PageRequest {
    fn after(page: &FilePage) -> Self {
        if !page.has_next_page() {
            return Self::Finished;
        }
        page.end_cursor()
            .map_or(Self::Fail(IntakeError::MissingCursor), |cursor| {
                Self::Fetch(Some(cursor.clone()))
            })
    }
}

/// Lazily fetches pages of changed files, one request at a time.
///
/// The stream ends after the first terminal page or the first error, so
/// nothing is requested beyond what the consumer polls.
pub fn changed_file_pages<'a, Gateway>(
    gateway: &'a Gateway,
    locator: &'a PullRequestLocator,
) -> impl Stream<Item = Result<FilePage, IntakeError>> + 'a
where
    Gateway: ChangedFilesGateway,
{
    stream::unfold(PageRequest::Fetch(None), move |request| async move {
        match request {
            PageRequest::Fetch(cursor) => {
                match gateway.changed_files_page(locator, cursor).await {
                    Ok(page) => {
                        let next = PageRequest::after(&page);
                        Some((Ok(page), next))
                    }
                    Err(error) => Some((Err(error), PageRequest::Finished)),
                }
            }
            PageRequest::Fail(error) => Some((Err(error), PageRequest::Finished)),
            PageRequest::Finished => None,
        }
    })
}

#[derive(Default)]
struct Accumulated {
    paths: Vec<String>,
    pages_fetched: usize,
    failure: Option<IntakeError>,
}

impl Accumulated {
    fn absorb(mut self, result: Result<FilePage, IntakeError>) -> Self {
        match result {
            Ok(page) => {
                self.pages_fetched += 1;
                self.paths.extend(page.into_items());
            }
            Err(error) => self.failure = Some(error),
        }
        self
    }
}

/// Collects a pull request's changed files using a gateway.
pub struct ChangedFilesIntake<'client, Gateway>
where
    Gateway: ChangedFilesGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> ChangedFilesIntake<'client, Gateway>
where
    Gateway: ChangedFilesGateway,
{
    /// Create a new intake using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Fetch every page of changed files and keep those accepted by `filter`.
    ///
    /// Pages are requested sequentially until GitHub reports no further
    /// pages. A failed fetch ends pagination: the failure is logged and
    /// carried in the returned [`ChangedFiles`] alongside the matching paths
    /// from earlier pages. The filter runs once, over the full accumulated
    /// list.
    pub async fn collect(
        &self,
        locator: &PullRequestLocator,
        filter: &ExtensionFilter,
    ) -> ChangedFiles {
        let accumulated = changed_file_pages(self.client, locator)
            .fold(Accumulated::default(), |accumulated, result| async move {
                accumulated.absorb(result)
            })
            .await;

        let Accumulated {
            paths,
            pages_fetched,
            failure,
        } = accumulated;
        let total = paths.len();
        let files = filter.apply(paths);

        match &failure {
            Some(error) => tracing::error!(
                "error occurred getting changed files for {locator} after {pages_fetched} \
                 pages: {error}"
            ),
            None => tracing::info!(
                "collected {total} changed files for {locator} across {pages_fetched} pages, \
                 {matching} matching",
                matching = files.len()
            ),
        }

        ChangedFiles {
            files,
            pages_fetched,
            failure,
        }
    }
}
