//! Small browser helpers shared by pages.

pub mod browser;
