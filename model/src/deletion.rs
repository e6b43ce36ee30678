//! Local tracking of comments deleted during a moderation session.
//!
//! Ids are recorded only after the server confirms a delete. The set is
//! display state for the comments view and is never sent anywhere.

use std::collections::BTreeSet;

use crate::view::CommentView;

#[cfg(test)]
#[path = "deletion_test.rs"]
mod deletion_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeletionTracker {
    deleted: BTreeSet<i64>,
    has_changes: bool,
}

impl DeletionTracker {
    /// Record a server-confirmed delete. Repeats are no-ops on the set.
    pub fn mark_deleted(&mut self, comment_id: i64) {
        self.deleted.insert(comment_id);
        self.has_changes = true;
    }

    #[must_use]
    pub fn contains(&self, comment_id: i64) -> bool {
        self.deleted.contains(&comment_id)
    }

    /// Deleted either by the server before load or during this session.
    #[must_use]
    pub fn is_deleted(&self, comment: &CommentView) -> bool {
        comment.deleted || self.contains(comment.id)
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deleted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty()
    }

    /// End the session; deletions were already applied server-side.
    pub fn finish(&mut self) {
        self.deleted.clear();
        self.has_changes = false;
    }
}
