// src/error.rs

use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to user-visible notices.
#[derive(Debug)]
pub enum AppError {
    // Required setting missing or unusable
    Config(String),

    // Network-level failure (DNS, refused connection, timeout)
    Transport(String),

    // Non-2xx response from the API
    Status { status: u16, message: String },

    // Response body could not be decoded
    Decode(String),

    // User input failed local checks; no request was issued
    Validation(String),

    // 404 from the API
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Transport(msg) => write!(f, "Network error: {}", msg),
            AppError::Status { message, .. } => write!(f, "{}", message),
            AppError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            AppError::Validation(msg) => write!(f, "{}", msg),
            AppError::NotFound(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts `reqwest::Error` into the matching `AppError` variant.
/// Allows using the `?` operator on every request/response step.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
