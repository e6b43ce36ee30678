//! Client-side search over the board list table.

use crate::view::BoardRow;

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// A column of the board list table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    AuthorId,
    AuthorNickname,
    Title,
    CreatedAt,
    Manage,
}

impl Column {
    /// Columns shown by default, in display order.
    pub const VISIBLE: [Column; 5] =
        [Column::AuthorId, Column::AuthorNickname, Column::Title, Column::CreatedAt, Column::Manage];

    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::AuthorId => "ID",
            Self::AuthorNickname => "Nickname",
            Self::Title => "Title",
            Self::CreatedAt => "Date",
            Self::Manage => "Manage",
        }
    }

    #[must_use]
    pub fn value(self, row: &BoardRow) -> &str {
        match self {
            Self::AuthorId => &row.author_id,
            Self::AuthorNickname => &row.author_nickname,
            Self::Title => &row.title,
            Self::CreatedAt => &row.created_at,
            Self::Manage => &row.manage,
        }
    }
}

/// Whether any visible column contains `term`, ignoring case.
#[must_use]
pub fn row_matches(row: &BoardRow, term: &str, columns: &[Column]) -> bool {
    let needle = term.to_lowercase();
    columns.iter().any(|col| col.value(row).to_lowercase().contains(&needle))
}

/// Rows matching `term` on the given columns, in their original order.
#[must_use]
pub fn filter_rows(rows: &[BoardRow], term: &str, columns: &[Column]) -> Vec<BoardRow> {
    rows.iter().filter(|row| row_matches(row, term, columns)).cloned().collect()
}
