use model::RawBoard;

use super::*;

fn raw(id: i64, title: &str) -> RawBoard {
    RawBoard {
        board_id: id,
        title: Some(title.to_owned()),
        author_nickname: Some(format!("user{id}")),
        ..RawBoard::default()
    }
}

#[test]
fn default_state_is_idle_and_empty() {
    let state = BoardListState::default();
    assert!(state.rows.is_empty());
    assert!(!state.loading);
    assert_eq!(state.total_pages, 0);
}

#[test]
fn apply_page_maps_rows_and_totals() {
    let mut state = BoardListState::default();
    state.begin_load();
    state.apply_page(&BoardPage { content: vec![raw(1, "a"), raw(2, "b")], last: false, number: 0 });
    assert!(!state.loading);
    assert_eq!(state.rows.len(), 2);
    assert_eq!(state.rows[1].manage, "/admin/board/2");
    assert_eq!(state.total_pages, 2);
}

#[test]
fn fail_clears_rows() {
    let mut state = BoardListState::default();
    state.apply_page(&BoardPage { content: vec![raw(1, "a")], last: true, number: 0 });
    state.begin_load();
    state.fail();
    assert!(state.rows.is_empty());
    assert!(!state.loading);
}

#[test]
fn visible_rows_filters_by_search() {
    let mut state = BoardListState::default();
    state.apply_page(&BoardPage { content: vec![raw(1, "Hello"), raw(2, "Bye")], last: true, number: 0 });
    let hits = state.visible_rows("hell");
    assert_eq!(hits.iter().map(|r| r.board_id).collect::<Vec<_>>(), vec![1]);
    assert_eq!(state.visible_rows("").len(), 2);
}
