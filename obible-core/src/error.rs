//! Error types for obible core

use thiserror::Error;

/// Result type alias using ObibleError
pub type Result<T> = std::result::Result<T, ObibleError>;

/// Top-level error type for all obible operations
#[derive(Debug, Error)]
pub enum ObibleError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors returned by the backend API client
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    Status(u16),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// HTTP status code, if the server answered with a non-2xx status
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// Errors in client configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}
