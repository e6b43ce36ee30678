//! Shared board-administration model for the web UI and the CLI.
//!
//! This crate owns the wire records returned by the admin backend, the
//! response normalization policy both transports apply, and the pure
//! transforms that turn raw records into display-ready view models
//! (including the comment-tree flattener).
//!
//! Nothing here performs I/O; the `client` (browser) and `cli` (native)
//! crates bring their own HTTP stack and delegate every decision to this one.

pub mod board;
pub mod comment;
pub mod config;
pub mod date;
pub mod deletion;
pub mod error;
pub mod filter;
pub mod flatten;
pub mod pagination;
pub mod response;
pub mod target;
pub mod view;

pub use board::{BoardDetailResponse, BoardPage, BoardType, RawBoard};
pub use comment::RawComment;
pub use config::{ApiConfig, ConfigError};
pub use deletion::DeletionTracker;
pub use error::ApiError;
pub use flatten::flatten_comments;
pub use response::{ApiResponse, ResponseMeta};
pub use target::TargetType;
pub use view::{BoardRow, BoardView, Category, CommentView};

/// Placeholder shown when a post or comment has no author name.
pub const ANONYMOUS_AUTHOR: &str = "익명";

/// Label shown in place of the writer name on comments by the post's author.
pub const POST_AUTHOR_LABEL: &str = "작성자";

/// Page size used by the list view when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
