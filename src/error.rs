//! Error types for search dispatch

use thiserror::Error;

/// Result type alias for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Everything that can go wrong between an inbound query and a response
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Missing or blank query; never dispatched to a provider
    #[error("Query parameter required")]
    BadRequest,

    /// Upstream answered with a non-success status
    #[error("HTTP error: {status}")]
    Http { status: u16 },

    /// Connection, DNS or TLS failure talking to the upstream
    #[error("Network error: {0}")]
    Network(String),

    /// The single upstream attempt ran out of time
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Upstream payload did not match the expected shape
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Failure that escaped an adapter's own handling
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SearchError {
    /// Whether this error belongs to the upstream family that adapters absorb
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            SearchError::Http { .. }
                | SearchError::Network(_)
                | SearchError::Timeout { .. }
                | SearchError::Parse(_)
        )
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            SearchError::Timeout {
                timeout_ms: crate::DEFAULT_TIMEOUT * 1000,
            }
        } else if let Some(status) = error.status() {
            SearchError::Http {
                status: status.as_u16(),
            }
        } else if error.is_decode() {
            SearchError::Parse(error.to_string())
        } else {
            SearchError::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(error: serde_json::Error) -> Self {
        SearchError::Parse(format!("JSON parsing failed: {error}"))
    }
}
