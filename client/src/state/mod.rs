//! Page-scoped state for the admin views.
//!
//! DESIGN
//! ======
//! Each page owns one of these inside an `RwSignal`; nothing here is shared
//! across routes, so navigating away discards it.

pub mod board_detail;
pub mod board_list;
