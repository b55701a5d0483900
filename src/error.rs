use thiserror::Error;

/// Main error type for REST API operations
#[derive(Debug, Error)]
pub enum RestError {
    /// The server answered with a non-2xx status. Only the status is kept.
    #[error("HTTP error! Status: {status}")]
    Http { status: u16 },

    /// Transport failure reported by the HTTP client
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// Response body was not valid JSON for the requested type
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Request building error
    #[error("failed to build request: {0}")]
    RequestBuild(String),
}

impl RestError {
    /// Create a new HTTP status error
    pub fn http(status: u16) -> Self {
        RestError::Http { status }
    }

    /// Check if this error is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, RestError::Http { status: 404 })
    }

    /// Check if this error is an unauthorized error (401)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RestError::Http { status: 401 })
    }

    /// Get the HTTP status code, if the failure carried one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RestError::Http { status } => Some(*status),
            RestError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for REST operations
pub type Result<T> = std::result::Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let error = RestError::http(503);
        assert_eq!(error.to_string(), "HTTP error! Status: 503");
        assert_eq!(error.status_code(), Some(503));
    }

    #[test]
    fn test_error_not_found() {
        let error = RestError::http(404);
        assert!(error.is_not_found());
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn test_json_error_is_transparent() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = source.to_string();
        let error = RestError::from(source);
        assert_eq!(error.to_string(), expected);
        assert_eq!(error.status_code(), None);
    }
}
