//! Tests for [`FilePage`] construction and accessors.

use rstest::rstest;

use crate::github::{Cursor, FilePage};

#[rstest]
fn new_page_is_terminal() {
    let page = FilePage::new(vec!["a.ts".to_owned()]);

    assert!(!page.has_next_page(), "new pages are terminal");
    assert!(page.end_cursor().is_none(), "no cursor expected");
    assert_eq!(page.len(), 1);
}

#[rstest]
fn empty_page_is_terminal_and_empty() {
    let page = FilePage::empty();

    assert!(page.is_empty());
    assert!(!page.has_next_page());
}

#[rstest]
#[case::more_with_cursor(true, Some("Y3Vyc29yOjEwMA=="))]
#[case::more_without_cursor(true, None)]
#[case::last_with_cursor(false, Some("Y3Vyc29yOjM="))]
fn page_info_is_kept_verbatim(#[case] has_next_page: bool, #[case] cursor: Option<&str>) {
    let page = FilePage::new(Vec::new()).with_page_info(has_next_page, cursor.map(Cursor::new));

    assert_eq!(page.has_next_page(), has_next_page);
    assert_eq!(page.end_cursor().map(Cursor::as_str), cursor);
}

#[rstest]
fn into_items_preserves_order() {
    let page = FilePage::new(vec!["z.ts".to_owned(), "a.ts".to_owned()]);

    assert_eq!(page.into_items(), ["z.ts", "a.ts"]);
}
