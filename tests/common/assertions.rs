//! Domain-specific assertions for clinked harnesses.
//!
//! These wrap `pretty_assertions` so a failing page comparison shows a
//! readable diff of titles instead of whole articles.

#![allow(dead_code)]

use clinked_core::{Article, Page};

/// Titles of `items`, in order.
pub fn titles(items: &[Article]) -> Vec<String> {
    items.iter().map(|a| a.title.clone()).collect()
}

/// Assert that a slice of articles holds exactly these titles, in order.
#[macro_export]
macro_rules! assert_titles {
    ($items:expr, $expected:expr) => {{
        let actual = $crate::common::titles(&$items);
        let expected: Vec<String> = $expected.iter().map(|s| s.to_string()).collect();
        pretty_assertions::assert_eq!(actual, expected);
    }};
}

/// Assert the count metadata of a page.
pub fn assert_page_shape(page: &Page<Article>, len: usize, total_elements: u64, total_pages: u64) {
    assert_eq!(
        (page.items.len(), page.total_elements, page.total_pages),
        (len, total_elements, total_pages),
        "(items, totalElements, totalPages) mismatch"
    );
}
