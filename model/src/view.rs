//! Raw records to display-ready view models.
//!
//! Every transform here is total: absent optional fields get defaults
//! (anonymous author, zero counts, empty image list) instead of failing.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::board::{BoardType, RawBoard};
use crate::comment::RawComment;
use crate::{ANONYMOUS_AUTHOR, POST_AUTHOR_LABEL, date, target};

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Display category derived from [`BoardType`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Promotion,
    #[default]
    General,
}

/// Board as shown by the detail views.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_id: Option<String>,
    pub date: String,
    pub likes: u64,
    pub comments: u64,
    pub category: Category,
    pub images: Vec<String>,
    pub is_deleted: bool,
    pub special_message: Option<String>,
}

impl BoardView {
    /// First image URL, which is the only one the detail view renders.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Notice shown above a deleted post, when the server supplied one.
    #[must_use]
    pub fn deleted_notice(&self) -> Option<&str> {
        if self.is_deleted { self.special_message.as_deref() } else { None }
    }
}

/// One row of the board list table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRow {
    pub board_id: i64,
    pub author_id: String,
    pub author_nickname: String,
    pub title: String,
    pub created_at: String,
    pub manage: String,
}

/// Flattened comment with its depth in the reply tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub date: String,
    pub user_id: Option<String>,
    pub reply_level: usize,
    pub parent_id: Option<i64>,
    pub likes: u64,
    pub deleted: bool,
}

impl CommentView {
    /// Whether the comment was written by the post's author.
    ///
    /// Both ids must be present; ids compare by their text form, so a numeric
    /// `memberId` matches a string `authorId` with the same digits.
    #[must_use]
    pub fn is_post_author(&self, post_author_id: Option<&str>) -> bool {
        matches!((self.user_id.as_deref(), post_author_id), (Some(user), Some(author)) if user == author)
    }

    /// Name to show in the comment header.
    #[must_use]
    pub fn display_author(&self, post_author_id: Option<&str>) -> &str {
        if self.is_post_author(post_author_id) { POST_AUTHOR_LABEL } else { &self.author }
    }
}

/// Map a raw board to its detail view.
#[must_use]
pub fn board_view(raw: &RawBoard) -> BoardView {
    BoardView {
        id: raw.board_id,
        title: raw.title.clone().unwrap_or_default(),
        content: raw.content.clone().unwrap_or_default(),
        author: author_or_anonymous(raw.author_nickname.as_deref()),
        author_id: raw.author_id.as_ref().map(ToString::to_string),
        date: date::display_long(raw.created_at.as_deref()),
        likes: raw.like_count.unwrap_or(0),
        comments: raw.comment_count.unwrap_or(0),
        category: match raw.board_type.unwrap_or_default() {
            BoardType::Promotion => Category::Promotion,
            BoardType::General => Category::General,
        },
        images: raw.img_urls.clone().unwrap_or_default(),
        is_deleted: raw.is_deleted.unwrap_or(false),
        special_message: raw.special_message.clone(),
    }
}

/// Map a raw board to a list-table row.
///
/// The list shows the nickname exactly as sent, so no anonymous placeholder
/// is substituted here.
#[must_use]
pub fn board_row(raw: &RawBoard) -> BoardRow {
    BoardRow {
        board_id: raw.board_id,
        author_id: raw.author_id.as_ref().map(ToString::to_string).unwrap_or_default(),
        author_nickname: raw.author_nickname.clone().unwrap_or_default(),
        title: raw.title.clone().unwrap_or_default(),
        created_at: date::display_long(raw.created_at.as_deref()),
        manage: target::detail_route(raw.board_id),
    }
}

/// Map one raw comment node (ignoring its children) at the given depth.
#[must_use]
pub fn comment_view(raw: &RawComment, reply_level: usize, today: Date) -> CommentView {
    CommentView {
        id: raw.comment_id,
        author: author_or_anonymous(raw.writer.as_deref()),
        content: raw.content.clone().unwrap_or_default(),
        date: date::display_short(raw.created_at.as_deref(), today),
        user_id: raw.member_id.as_ref().map(ToString::to_string),
        reply_level,
        parent_id: raw.parent_id,
        likes: raw.like_count.unwrap_or(0),
        deleted: raw.deleted.unwrap_or(false),
    }
}

fn author_or_anonymous(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => ANONYMOUS_AUTHOR.to_owned(),
    }
}
