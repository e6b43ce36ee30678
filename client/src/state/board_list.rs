//! Board-list state for the paged moderation table.

use model::filter::{Column, filter_rows};
use model::pagination::total_pages;
use model::view::board_row;
use model::{BoardPage, BoardRow};

#[cfg(test)]
#[path = "board_list_test.rs"]
mod board_list_test;

/// Rows of the current page plus loading flags.
///
/// The current page and search term live in their own signals so that typing
/// a search term never retriggers a fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardListState {
    pub rows: Vec<BoardRow>,
    pub loading: bool,
    pub total_pages: u32,
}

impl BoardListState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_page(&mut self, page: &BoardPage) {
        self.rows = page.content.iter().map(board_row).collect();
        self.total_pages = total_pages(page);
        self.loading = false;
    }

    /// A failed fetch leaves an empty table rather than stale rows.
    pub fn fail(&mut self) {
        self.rows.clear();
        self.loading = false;
    }

    /// Rows matching the search term on the visible columns.
    #[must_use]
    pub fn visible_rows(&self, search: &str) -> Vec<BoardRow> {
        filter_rows(&self.rows, search, &Column::VISIBLE)
    }
}
