//! Error types for the backend client.

use thiserror::Error;

/// Result type alias for backend calls.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Shown when a credential test could not reach the backend at all.
pub const CONNECTION_ERROR: &str = "Connection error";

/// Shown when a generation fails without a backend-provided detail.
pub const GENERATION_ERROR: &str = "An error occurred while generating prompts";

/// Errors that can occur while talking to the prompt backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (DNS, refused connection, CORS, aborted fetch).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Api {
        /// HTTP status code.
        status: u16,
        /// `detail` field of the error body, when it was a string.
        detail: Option<String>,
    },

    /// Response body did not match the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configured base URL is not an absolute http(s) URL.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ApiError {
    /// Creates an API error from a status code and optional detail.
    #[must_use]
    pub fn api(status: u16, detail: Option<String>) -> Self {
        Self::Api { status, detail }
    }

    /// Backend-supplied detail text, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the backend detail verbatim, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ApiError::api(400, Some("invalid key".to_string()));
        assert_eq!(err.user_message(GENERATION_ERROR), "invalid key");
    }

    #[test]
    fn test_user_message_fallback() {
        let err = ApiError::api(500, None);
        assert_eq!(err.user_message(GENERATION_ERROR), GENERATION_ERROR);

        let err = ApiError::InvalidBaseUrl {
            url: "nope".into(),
            reason: "relative URL without a base".into(),
        };
        assert_eq!(err.user_message(CONNECTION_ERROR), CONNECTION_ERROR);
    }

    #[test]
    fn test_display() {
        let err = ApiError::api(422, None);
        assert_eq!(err.to_string(), "API error (422): no detail");
    }
}
