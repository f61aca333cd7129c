//! Error types for the Smart To-Do client.

use thiserror::Error;

/// Error types for client operations
#[derive(Error, Debug)]
pub enum ClientError {
    // API errors
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {reason}")]
    Request { reason: String },

    #[error("Failed to parse response: {reason}")]
    Json { reason: String },

    // Session errors
    #[error("Not logged in. Run 'smart-todo login' first.")]
    NotLoggedIn,

    #[error("Failed to read file '{path}': {reason}")]
    FileReadError { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    FileWriteError { path: String, reason: String },

    // Input errors
    #[error("Invalid category: '{category}'")]
    InvalidCategory { category: String },

    #[error("Invalid status filter: '{status}'")]
    InvalidStatusFilter { status: String },

    #[error("Invalid sort key: '{key}'")]
    InvalidSortKey { key: String },

    #[error("Invalid sort order: '{order}'")]
    InvalidSortOrder { order: String },

    #[error("Invalid date '{value}': expected {expected}")]
    InvalidDate { value: String, expected: String },

    #[error("Prompt failed: {reason}")]
    Prompt { reason: String },

    // Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::ConfigError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Api {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "API error (401): Invalid credentials");
    }

    #[test]
    fn test_not_logged_in_mentions_login() {
        assert!(ClientError::NotLoggedIn.to_string().contains("login"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: ClientError = io_err.into();
        assert!(matches!(err, ClientError::ConfigError { .. }));
    }
}
