//! Error types for the news module

use thiserror::Error;

/// Errors that can occur while fetching news from the upstream API
#[derive(Debug, Error)]
pub enum NewsError {
    /// HTTP request failed (DNS, timeout, connection reset)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Upstream returned a non-success status
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body from the upstream, kept for server-side logs only
        message: String,
    },

    /// Failed to parse the upstream response body
    #[error("Parse error: {0}")]
    ParseError(String),
}
