use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::config::ConfigError;
use crate::constants::{CODE_DATABASE_ERROR, CODE_INVALID_JSON, CODE_PAYLOAD_TOO_LARGE};
use crate::models::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    PayloadTooLarge { code: String, message: String },
    InternalServerError { code: String, message: String },
}

impl ApiError {
    pub fn bad_request(code: &str, message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(code: &str, message: impl Into<String>) -> Self {
        ApiError::NotFound {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        ApiError::PayloadTooLarge {
            code: CODE_PAYLOAD_TOO_LARGE.to_string(),
            message: message.into(),
        }
    }

    /// Body that failed to bind as JSON.
    pub fn invalid_json(err: impl fmt::Display) -> Self {
        ApiError::bad_request(CODE_INVALID_JSON, err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { code, message } => {
                write!(f, "Bad Request [{}]: {}", code, message)
            }
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::PayloadTooLarge { code, message } => {
                write!(f, "Payload Too Large [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (code, message) = match self {
            ApiError::BadRequest { code, message }
            | ApiError::NotFound { code, message }
            | ApiError::PayloadTooLarge { code, message }
            | ApiError::InternalServerError { code, message } => (code, message),
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(code, message))
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::InternalServerError {
            code: CODE_DATABASE_ERROR.to_string(),
            message: err.to_string(),
        }
    }
}

/// Failures during the initialization phase. Any of these aborts the process
/// before the listener is bound.
#[derive(Debug)]
pub enum StartupError {
    Config(ConfigError),
    Database(sqlx::Error),
    Migration(sqlx::Error),
    Io(std::io::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Config(err) => write!(f, "Error loading configuration: {}", err),
            StartupError::Database(err) => write!(f, "Failed to connect to database: {}", err),
            StartupError::Migration(err) => write!(f, "Migration failed: {}", err),
            StartupError::Io(err) => write!(f, "Server error: {}", err),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::Config(err) => Some(err),
            StartupError::Database(err) | StartupError::Migration(err) => Some(err),
            StartupError::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for StartupError {
    fn from(err: ConfigError) -> Self {
        StartupError::Config(err)
    }
}

impl From<std::io::Error> for StartupError {
    fn from(err: std::io::Error) -> Self {
        StartupError::Io(err)
    }
}
