use std::collections::HashMap;

use axum::Router;
use axum::extract::{Path, Query};
use axum::http::{HeaderMap as AxumHeaders, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::json;

use super::*;

async fn spawn_backend(app: Router) -> AdminClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    AdminClient::new(ApiConfig::new(format!("http://{addr}"), "test-token")).expect("client")
}

fn json_body(body: &'static str) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}

// =============================================================
// normalization over the wire
// =============================================================

#[tokio::test]
async fn empty_response_is_synthetic_success() {
    let app = Router::new().route("/admin/boards", get(|| async { StatusCode::OK }).delete(|| async { StatusCode::OK }));
    let client = spawn_backend(app).await;
    let response = client.delete_board(3).await.expect("delete");
    assert_eq!(response, ApiResponse::Success { message: None });
    assert!(response.is_success());
}

#[tokio::test]
async fn whitespace_json_body_is_synthetic_success() {
    let app = Router::new().route("/admin/boards", get(|| async { json_body("   ") }).delete(|| async { json_body("  ") }));
    let client = spawn_backend(app).await;
    assert_eq!(client.delete_comment(1).await, Ok(ApiResponse::Success { message: None }));
}

#[tokio::test]
async fn invalid_json_body_is_success_with_text() {
    let app = Router::new().route("/admin/boards", get(|| async { json_body("not json") }).delete(|| async { json_body("not json") }));
    let client = spawn_backend(app).await;
    assert_eq!(
        client.delete_comment(1).await,
        Ok(ApiResponse::Success { message: Some("not json".to_owned()) })
    );
}

#[tokio::test]
async fn server_error_carries_status() {
    let app = Router::new().route("/admin/boards/{id}", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let client = spawn_backend(app).await;
    let err = client.board_detail(1).await.expect_err("500");
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("500"));
}

// =============================================================
// typed operations
// =============================================================

#[tokio::test]
async fn requests_carry_bearer_and_json_headers() {
    async fn echo_headers(headers: AxumHeaders) -> impl IntoResponse {
        let value_of = |name: header::HeaderName| {
            headers.get(name).and_then(|v| v.to_str().ok()).unwrap_or_default().to_owned()
        };
        axum::Json(json!({
            "authorization": value_of(header::AUTHORIZATION),
            "contentType": value_of(header::CONTENT_TYPE),
        }))
    }
    let app = Router::new().route("/echo", get(echo_headers));
    let client = spawn_backend(app).await;
    let response = client.call(Method::GET, "/echo", &[], None).await.expect("echo");
    assert_eq!(
        response,
        ApiResponse::Json(json!({ "authorization": "Bearer test-token", "contentType": "application/json" }))
    );
}

#[tokio::test]
async fn list_boards_sends_paging_query() {
    async fn list(Query(query): Query<HashMap<String, String>>) -> impl IntoResponse {
        let number: u32 = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(99);
        let size = query.get("size").cloned().unwrap_or_default();
        axum::Json(json!({
            "content": [ { "boardId": 1, "title": format!("size {size}") } ],
            "last": false,
            "number": number,
        }))
    }
    let app = Router::new().route("/admin/boards", get(list));
    let client = spawn_backend(app).await;
    let page = client.list_boards(2, 20).await.expect("page");
    assert_eq!(page.number, 2);
    assert!(!page.last);
    assert_eq!(page.content[0].title.as_deref(), Some("size 20"));
}

#[tokio::test]
async fn delete_sends_target_type_and_id() {
    async fn delete(Query(query): Query<HashMap<String, String>>) -> impl IntoResponse {
        axum::Json(json!({
            "success": true,
            "message": format!("{}:{}", query["targetType"], query["targetId"]),
        }))
    }
    let app = Router::new().route("/admin/boards", axum::routing::delete(delete));
    let client = spawn_backend(app).await;
    let response = client.delete_comment(17).await.expect("delete");
    assert!(response.is_success());
    assert_eq!(response.message(), Some("COMMENT:17"));
}

#[tokio::test]
async fn board_detail_decodes_tree() {
    async fn detail(Path(id): Path<i64>) -> impl IntoResponse {
        axum::Json(json!({
            "boardDetail": { "boardId": id, "title": "post" },
            "comments": [ { "commentId": 1, "children": [ { "commentId": 2, "parentId": 1 } ] } ],
        }))
    }
    let app = Router::new().route("/admin/boards/{id}", get(detail));
    let client = spawn_backend(app).await;
    let (board, comments) = client.board_detail(8).await.expect("detail");
    assert_eq!(board.board_id, 8);
    assert_eq!(comments[0].children[0].comment_id, 2);
}

#[tokio::test]
async fn board_detail_without_key_is_shape_error() {
    let app = Router::new().route("/admin/boards/{id}", get(|| async { axum::Json(json!({ "comments": [] })) }));
    let client = spawn_backend(app).await;
    assert_eq!(client.board_detail(1).await, Err(ApiError::Shape("boardDetail")));
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let client = AdminClient::new(ApiConfig::new("http://127.0.0.1:9", "t")).expect("client");
    assert!(matches!(client.list_boards(0, 20).await, Err(ApiError::Network(_))));
}
