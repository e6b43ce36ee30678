use clap::Parser;
use serde_json::json;

use super::*;

#[test]
fn confirmation_accepts_y_and_yes_only() {
    assert!(is_confirmed("y\n"));
    assert!(is_confirmed(" YES "));
    assert!(!is_confirmed(""));
    assert!(!is_confirmed("n"));
    assert!(!is_confirmed("yep"));
}

#[test]
fn list_defaults_to_first_page() {
    let cli = Cli::try_parse_from(["board-admin-cli", "--base-url", "http://x", "--access-token", "t", "list"])
        .expect("parse");
    match cli.command {
        Command::List { page, size, search, json } => {
            assert_eq!(page, 1);
            assert_eq!(size, DEFAULT_PAGE_SIZE);
            assert!(search.is_empty());
            assert!(!json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn list_rejects_page_zero() {
    let parsed = Cli::try_parse_from([
        "board-admin-cli",
        "--base-url",
        "http://x",
        "--access-token",
        "t",
        "list",
        "--page",
        "0",
    ]);
    assert!(parsed.is_err());
}

#[test]
fn delete_comment_parses_yes_flag() {
    let cli = Cli::try_parse_from([
        "board-admin-cli",
        "--base-url",
        "http://x",
        "--access-token",
        "t",
        "delete-comment",
        "42",
        "--yes",
    ])
    .expect("parse");
    assert!(matches!(cli.command, Command::DeleteComment { comment_id: 42, yes: true }));
}

#[test]
fn accepted_deletion_reports_target() {
    let outcome = delete_outcome(TargetType::Board, ApiResponse::Success { message: None }).expect("accepted");
    assert_eq!(outcome, "BOARD deleted");
}

#[test]
fn rejected_deletion_carries_server_message() {
    let response = ApiResponse::Json(json!({ "success": false, "error": "forbidden", "message": "not allowed" }));
    let err = delete_outcome(TargetType::Comment, response).expect_err("rejected");
    assert_eq!(err.to_string(), "COMMENT deletion rejected: not allowed");
}
