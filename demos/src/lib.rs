//! Shared helpers for the runnable tidemark demos.
pub mod common;
