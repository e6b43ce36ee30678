//! Comment tree flattening.
//!
//! The backend returns comments already nested by reply. The comments view
//! renders a flat list indented by depth, so the tree is walked pre-order:
//! each node is emitted, then its whole subtree, then its next sibling.
//!
//! The walk keeps an explicit stack of sibling iterators instead of
//! recursing, so reply depth never touches the call stack.

use std::slice;

use time::Date;

use crate::comment::RawComment;
use crate::view::{CommentView, comment_view};

#[cfg(test)]
#[path = "flatten_test.rs"]
mod flatten_test;

/// Flatten root comments into pre-order display order.
///
/// Root nodes get `reply_level` 0 and every child one more than its parent.
/// `parent_id` is copied through untouched; structure comes only from
/// `children`. `today` dates comments that carry no timestamp.
#[must_use]
pub fn flatten_comments(roots: &[RawComment], today: Date) -> Vec<CommentView> {
    let total = roots.iter().map(RawComment::subtree_len).sum();
    let mut flat = Vec::with_capacity(total);
    let mut stack: Vec<(slice::Iter<'_, RawComment>, usize)> = vec![(roots.iter(), 0)];

    while let Some((siblings, level)) = stack.last_mut() {
        let level = *level;
        let Some(node) = siblings.next() else {
            stack.pop();
            continue;
        };
        flat.push(comment_view(node, level, today));
        if !node.children.is_empty() {
            stack.push((node.children.iter(), level + 1));
        }
    }

    flat
}
