//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin chrome (header, table, dialogs, post and
//! comment blocks). They receive data and callbacks as props; fetching and
//! mutation stay in `pages`.

pub mod board_header;
pub mod board_table;
pub mod comment_item;
pub mod confirm_dialog;
pub mod post_body;
