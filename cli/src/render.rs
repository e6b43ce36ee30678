//! Plain-text rendering of the admin views.

use std::fmt::Write as _;

use model::filter::Column;
use model::{BoardRow, BoardView, CommentView, DeletionTracker};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

const DELETED_COMMENT: &str = "(deleted comment)";

/// Tab-separated table of rows followed by a page footer.
pub fn render_rows(rows: &[BoardRow], current_page: u32, total_pages: u32) -> String {
    let mut out = String::new();
    let header: Vec<&str> = Column::VISIBLE.iter().map(|c| c.header()).collect();
    let _ = writeln!(out, "{}", header.join("\t"));
    for row in rows {
        let cells: Vec<&str> = Column::VISIBLE.iter().map(|c| c.value(row)).collect();
        let _ = writeln!(out, "{}", cells.join("\t"));
    }
    let _ = write!(out, "page {current_page} of {total_pages}");
    out
}

/// Post header, body and first image.
pub fn render_board(board: &BoardView) -> String {
    let mut out = String::new();
    if let Some(notice) = board.deleted_notice() {
        let _ = writeln!(out, "[{notice}]");
    } else if board.is_deleted {
        let _ = writeln!(out, "[deleted]");
    }
    let _ = writeln!(out, "#{} {}", board.id, board.title);
    let _ = writeln!(out, "Author: {} · {} · ♥ {} · {} comments", board.author, board.date, board.likes, board.comments);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", board.content);
    if let Some(image) = board.primary_image() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Image: {image}");
    }
    out
}

/// Flattened comments indented two spaces per reply level.
///
/// Comments whose member id matches `post_author_id` are labelled as the author's.
pub fn render_comments(comments: &[CommentView], deletions: &DeletionTracker, post_author_id: Option<&str>) -> String {
    let mut out = String::new();
    for comment in comments {
        let indent = "  ".repeat(comment.reply_level);
        let marker = if comment.reply_level > 0 { "↳ " } else { "" };
        if deletions.is_deleted(comment) {
            let _ = writeln!(out, "{indent}{marker}[{}] {DELETED_COMMENT}", comment.id);
            continue;
        }
        let _ = write!(out, "{indent}{marker}[{}] {} ({}): {}", comment.id, comment.display_author(post_author_id), comment.date, comment.content);
        if comment.likes > 0 {
            let _ = write!(out, " ♥ {}", comment.likes);
        }
        let _ = writeln!(out);
    }
    out
}
