//! Directions error types

use thiserror::Error;

/// Errors that can occur while fetching route candidates
#[derive(Debug, Error)]
pub enum DirectionsError {
    /// Connection to the directions service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the directions service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the directions response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The provider answered with a non-success status field
    #[error("Provider status not OK: {status}")]
    ProviderStatus {
        /// Raw status value from the response body
        status: String,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
