//! Success message constants used throughout the application.

// User management messages
pub const MSG_USER_UPDATED: &str = "User updated Successfully";
pub const MSG_USER_DELETED: &str = "successful deletion";

// Health
pub const MSG_SERVER_RUNNING: &str = "Server is running";
