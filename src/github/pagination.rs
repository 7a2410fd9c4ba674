//! Cursor pagination types for changed file listings.
//!
//! GitHub's GraphQL API pages connections with opaque cursors. A `FilePage`
//! captures one batch of file paths together with the continuation data the
//! next request needs.

/// Number of files requested per GraphQL call.
pub const FILES_PAGE_SIZE: u8 = 100;

/// Opaque continuation token identifying where the next page begins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor(String);

impl Cursor {
    /// Wraps a cursor value returned by GitHub.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw cursor value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Cursor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// One page of changed file paths.
///
/// # Example
///
/// ```
/// use lint_changed::github::pagination::{Cursor, FilePage};
///
/// let page = FilePage::new(vec!["src/lib.rs".to_owned()])
///     .with_next(Some(Cursor::new("Y3Vyc29yOjE=")));
/// assert!(page.has_next_page());
/// assert_eq!(page.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePage {
    items: Vec<String>,
    end_cursor: Option<Cursor>,
    has_next_page: bool,
}

impl FilePage {
    /// Creates a terminal page holding `items`.
    #[must_use]
    pub const fn new(items: Vec<String>) -> Self {
        Self {
            items,
            end_cursor: None,
            has_next_page: false,
        }
    }

    /// Creates the page returned when the pull request or its file
    /// collection does not exist.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Marks the page as followed by another page.
    ///
    /// `end_cursor` is the cursor GitHub returned for this page. Passing
    /// `None` still flags the page as non-terminal; the intake treats that as
    /// a malformed response.
    #[must_use]
    pub fn with_next(mut self, end_cursor: Option<Cursor>) -> Self {
        self.end_cursor = end_cursor;
        self.has_next_page = true;
        self
    }

    /// Sets the raw pagination metadata reported by GitHub.
    #[must_use]
    pub fn with_page_info(mut self, has_next_page: bool, end_cursor: Option<Cursor>) -> Self {
        self.has_next_page = has_next_page;
        self.end_cursor = end_cursor;
        self
    }

    /// File paths in the order GitHub returned them.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Consumes the page, returning its paths.
    #[must_use]
    pub fn into_items(self) -> Vec<String> {
        self.items
    }

    /// Cursor to request the following page with, if any.
    #[must_use]
    pub const fn end_cursor(&self) -> Option<&Cursor> {
        self.end_cursor.as_ref()
    }

    /// Returns true if GitHub reported further pages.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Number of paths on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the page holds no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
