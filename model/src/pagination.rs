//! Page arithmetic for the board list.
//!
//! The backend pages are zero-based and only report whether the current page
//! is the last one, so the total is an estimate: when more pages exist the UI
//! advertises exactly one more.

use crate::board::BoardPage;

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Number of pages to offer, derived from the `last` flag and page `number`.
#[must_use]
pub fn total_pages(page: &BoardPage) -> u32 {
    if page.last { page.number.saturating_add(1) } else { page.number.saturating_add(2) }
}

/// Convert the UI's one-based page into the backend's zero-based index.
#[must_use]
pub fn to_request_page(current: u32) -> u32 {
    current.saturating_sub(1)
}

/// One-based page numbers to render as buttons.
#[must_use]
pub fn page_numbers(total: u32) -> Vec<u32> {
    (1..=total).collect()
}
