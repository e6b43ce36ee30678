use super::*;

fn row(id: i64, author: &str, nickname: &str, title: &str) -> BoardRow {
    BoardRow {
        board_id: id,
        author_id: author.to_owned(),
        author_nickname: nickname.to_owned(),
        title: title.to_owned(),
        created_at: "2025. 1. 2.".to_owned(),
        manage: format!("/admin/board/{id}"),
    }
}

fn rows() -> Vec<BoardRow> {
    vec![row(1, "alice", "Alice", "Hello World"), row(2, "bob", "Bobby", "Weekly promo"), row(3, "carol", "", "Notice")]
}

#[test]
fn empty_term_matches_everything() {
    assert_eq!(filter_rows(&rows(), "", &Column::VISIBLE).len(), 3);
}

#[test]
fn match_is_case_insensitive() {
    let hits = filter_rows(&rows(), "WORLD", &Column::VISIBLE);
    assert_eq!(hits.iter().map(|r| r.board_id).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn matches_any_visible_column() {
    let hits = filter_rows(&rows(), "bobby", &Column::VISIBLE);
    assert_eq!(hits.len(), 1);
    let by_link = filter_rows(&rows(), "/admin/board/3", &Column::VISIBLE);
    assert_eq!(by_link.iter().map(|r| r.board_id).collect::<Vec<_>>(), vec![3]);
}

#[test]
fn hidden_columns_are_not_searched() {
    assert!(filter_rows(&rows(), "notice", &[Column::AuthorId]).is_empty());
    assert_eq!(filter_rows(&rows(), "notice", &[Column::Title]).len(), 1);
}

#[test]
fn order_is_preserved() {
    let hits = filter_rows(&rows(), "2025", &Column::VISIBLE);
    assert_eq!(hits.iter().map(|r| r.board_id).collect::<Vec<_>>(), vec![1, 2, 3]);
}
