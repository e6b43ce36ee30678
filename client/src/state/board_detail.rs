//! State for the board detail and detail-with-comments views.

use model::flatten::flatten_comments;
use model::view::board_view;
use model::{BoardView, CommentView, DeletionTracker, RawBoard, RawComment};
use time::Date;

#[cfg(test)]
#[path = "board_detail_test.rs"]
mod board_detail_test;

/// What the open confirmation dialog will delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingDelete {
    Board(i64),
    Comment(i64),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardDetailState {
    pub board: Option<BoardView>,
    pub comments: Vec<CommentView>,
    pub loading: bool,
    pub deletions: DeletionTracker,
    pub pending_delete: Option<PendingDelete>,
}

impl Default for BoardDetailState {
    fn default() -> Self {
        Self {
            board: None,
            comments: Vec::new(),
            loading: true,
            deletions: DeletionTracker::default(),
            pending_delete: None,
        }
    }
}

impl BoardDetailState {
    /// Replace the view with freshly fetched records.
    pub fn load(&mut self, board: &RawBoard, comments: &[RawComment], today: Date) {
        self.board = Some(board_view(board));
        self.comments = flatten_comments(comments, today);
        self.deletions = DeletionTracker::default();
        self.pending_delete = None;
        self.loading = false;
    }

    pub fn fail(&mut self) {
        self.board = None;
        self.comments.clear();
        self.loading = false;
    }

    pub fn request_delete(&mut self, target: PendingDelete) {
        self.pending_delete = Some(target);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Record a delete the server has already confirmed.
    pub fn comment_deleted(&mut self, comment_id: i64) {
        self.deletions.mark_deleted(comment_id);
        self.pending_delete = None;
    }

    #[must_use]
    pub fn is_comment_deleted(&self, comment: &CommentView) -> bool {
        self.deletions.is_deleted(comment)
    }

    /// The "take down" action is only offered for live posts.
    #[must_use]
    pub fn can_delete_board(&self) -> bool {
        self.board.as_ref().is_some_and(|b| !b.is_deleted)
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.deletions.has_changes()
    }

    /// Clear the local session before leaving the comments view.
    pub fn finish(&mut self) {
        self.deletions.finish();
        self.pending_delete = None;
    }
}
