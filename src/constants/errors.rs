//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_ID_NOT_EXIST: &str = "ID not exist";
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID";
