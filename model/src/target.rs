//! Endpoint paths for the admin board API.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "target_test.rs"]
mod target_test;

/// Which entity a delete call affects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetType {
    Board,
    Comment,
}

impl TargetType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Board => "BOARD",
            Self::Comment => "COMMENT",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `GET /admin/boards?page&size` with a zero-based page.
#[must_use]
pub fn boards_endpoint(page: u32, size: u32) -> String {
    format!("/admin/boards?page={page}&size={size}")
}

/// `GET /admin/boards/{id}`.
#[must_use]
pub fn board_detail_endpoint(board_id: i64) -> String {
    format!("/admin/boards/{board_id}")
}

/// `DELETE /admin/boards?targetType&targetId`.
#[must_use]
pub fn delete_endpoint(target: TargetType, target_id: i64) -> String {
    format!("/admin/boards?targetType={target}&targetId={target_id}")
}

/// Join a configured base URL and an endpoint path.
#[must_use]
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{endpoint}", base_url.trim_end_matches('/'))
}

/// Client-side route for the board list.
pub const LIST_ROUTE: &str = "/admin/board";

/// Client-side route for one board's detail view.
#[must_use]
pub fn detail_route(board_id: i64) -> String {
    format!("{LIST_ROUTE}/{board_id}")
}

/// Client-side route for one board's detail view with comments.
#[must_use]
pub fn comments_route(board_id: i64) -> String {
    format!("{LIST_ROUTE}/{board_id}/comments")
}
