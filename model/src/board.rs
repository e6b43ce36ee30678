//! Raw board records as returned by the admin backend.
//!
//! Everything except `boardId` is optional on the wire; defaults are applied
//! later by [`crate::view`], not here, so the raw types stay faithful to what
//! the server actually sent.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::comment::RawComment;

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

/// Board category discriminator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardType {
    #[serde(rename = "PROMOTION")]
    Promotion,
    /// Any other category the backend sends.
    #[default]
    #[serde(other)]
    General,
}

/// Author identifier; the backend has sent both login strings and numeric ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorId {
    Number(i64),
    Text(String),
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A board post as the backend describes it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBoard {
    pub board_id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author_id: Option<AuthorId>,
    #[serde(default)]
    pub author_nickname: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub comment_count: Option<u64>,
    #[serde(default)]
    pub board_type: Option<BoardType>,
    #[serde(default)]
    pub img_urls: Option<Vec<String>>,
    #[serde(default)]
    pub is_deleted: Option<bool>,
    #[serde(default)]
    pub special_message: Option<String>,
}

/// One page of `GET /admin/boards`.
///
/// `number` is zero-based; `last` marks the final page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardPage {
    pub content: Vec<RawBoard>,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub number: u32,
}

/// Body of `GET /admin/boards/{id}`.
///
/// `board_detail` is optional so a response missing the key can be reported
/// as a shape error by [`crate::response::ApiResponse::into_board_detail`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDetailResponse {
    #[serde(default)]
    pub board_detail: Option<RawBoard>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<RawComment>,
}

/// Treat an explicit `null` sequence the same as a missing one.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
