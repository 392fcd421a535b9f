//! Custom error types for keyword operations

use thiserror::Error;

/// Keyword client errors
#[derive(Error, Debug)]
pub enum KeywordError {
    /// Client configuration is missing a required value or is malformed
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong with the configuration
        message: String,
    },

    /// API responded with a non-success status
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, empty if it could not be read
        message: String,
    },

    /// Response body decoded, but it is not a keyword array
    #[error("Unexpected response shape: expected an array of keywords, got {found}")]
    UnexpectedResponseShape {
        /// JSON kind of the body, e.g. "object"
        found: &'static str,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl KeywordError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        KeywordError::ConfigError {
            message: message.into(),
        }
    }

    /// HTTP status carried by an [`KeywordError::ApiError`], if any
    pub fn status(&self) -> Option<u16> {
        match self {
            KeywordError::ApiError { status, .. } => Some(*status),
            KeywordError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for keyword operations
pub type Result<T> = std::result::Result<T, KeywordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_body() {
        let err = KeywordError::ApiError {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 404 - not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_shape_error_names_found_kind() {
        let err = KeywordError::UnexpectedResponseShape { found: "object" };
        assert!(err.to_string().contains("got object"));
        assert_eq!(err.status(), None);
    }
}
