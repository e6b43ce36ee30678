//! Networking for the admin REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps `fetch` via `gloo-net`; the response normalization policy and
//! wire records live in the shared `model` crate.

pub mod api;
