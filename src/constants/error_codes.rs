//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Request errors
pub const CODE_INVALID_JSON: &str = "INVALID_JSON";
pub const CODE_INVALID_USER_ID: &str = "INVALID_USER_ID";
pub const CODE_PAYLOAD_TOO_LARGE: &str = "PAYLOAD_TOO_LARGE";

// User errors
pub const CODE_USER_NOT_FOUND: &str = "USER_NOT_FOUND";

// Generic errors
pub const CODE_DATABASE_ERROR: &str = "DATABASE_ERROR";
