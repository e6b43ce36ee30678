use super::*;

fn comment(id: i64, deleted: bool) -> CommentView {
    CommentView { id, deleted, ..CommentView::default() }
}

#[test]
fn new_tracker_has_no_changes() {
    let tracker = DeletionTracker::default();
    assert!(tracker.is_empty());
    assert!(!tracker.has_changes());
}

#[test]
fn marking_twice_keeps_one_entry() {
    let mut tracker = DeletionTracker::default();
    tracker.mark_deleted(7);
    tracker.mark_deleted(7);
    assert_eq!(tracker.len(), 1);
    assert!(tracker.contains(7));
    assert!(tracker.has_changes());
}

#[test]
fn is_deleted_honors_server_flag_and_local_set() {
    let mut tracker = DeletionTracker::default();
    tracker.mark_deleted(2);
    assert!(tracker.is_deleted(&comment(1, true)));
    assert!(tracker.is_deleted(&comment(2, false)));
    assert!(!tracker.is_deleted(&comment(3, false)));
}

#[test]
fn finish_clears_session() {
    let mut tracker = DeletionTracker::default();
    tracker.mark_deleted(1);
    tracker.finish();
    assert!(tracker.is_empty());
    assert!(!tracker.has_changes());
    assert!(!tracker.is_deleted(&comment(1, false)));
}
