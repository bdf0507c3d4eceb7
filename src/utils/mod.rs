//! Shared helpers.

pub mod log_sanitizer;
