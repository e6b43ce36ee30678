use super::*;

#[test]
fn target_type_wire_names() {
    assert_eq!(TargetType::Board.as_str(), "BOARD");
    assert_eq!(TargetType::Comment.to_string(), "COMMENT");
}

#[test]
fn boards_endpoint_formats_paging_query() {
    assert_eq!(boards_endpoint(0, 20), "/admin/boards?page=0&size=20");
}

#[test]
fn board_detail_endpoint_formats_id() {
    assert_eq!(board_detail_endpoint(42), "/admin/boards/42");
}

#[test]
fn delete_endpoint_formats_target_query() {
    assert_eq!(delete_endpoint(TargetType::Board, 3), "/admin/boards?targetType=BOARD&targetId=3");
    assert_eq!(delete_endpoint(TargetType::Comment, 9), "/admin/boards?targetType=COMMENT&targetId=9");
}

#[test]
fn join_url_strips_trailing_slash() {
    assert_eq!(join_url("https://api.example.com/", "/admin/boards/1"), "https://api.example.com/admin/boards/1");
    assert_eq!(join_url("", "/admin/boards/1"), "/admin/boards/1");
}

#[test]
fn client_routes_nest_under_list() {
    assert_eq!(detail_route(5), "/admin/board/5");
    assert_eq!(comments_route(5), "/admin/board/5/comments");
}
