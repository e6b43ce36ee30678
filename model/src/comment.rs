//! Raw comment tree node.

use serde::{Deserialize, Serialize};

use crate::board::{AuthorId, null_as_empty};

/// A comment and its replies, nested to arbitrary depth.
///
/// `parent_id` is a back-reference for display only; the tree structure is
/// carried entirely by `children`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComment {
    pub comment_id: i64,
    #[serde(default)]
    pub writer: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub member_id: Option<AuthorId>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub deleted: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub children: Vec<RawComment>,
}

impl RawComment {
    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        let mut total = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            total += 1;
            stack.extend(node.children.iter());
        }
        total
    }
}
