//! Application constants module.
//!
//! This module centralizes the constant strings used throughout the application:
//! error messages, success messages, error codes and the table name.

pub mod error_codes;
pub mod errors;
pub mod messages;

pub use error_codes::*;
pub use errors::*;
pub use messages::*;

/// Table holding the user rows.
pub const TABLE_USERS: &str = "users";
