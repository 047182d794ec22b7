//! Generation errors

use thiserror::Error;

/// Errors that can occur during text generation
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Failed to connect to the generation API
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the generation API failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed or carried no usable candidate
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during generation
    #[error("Generation timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Server-side error
    #[error("Server error: {0}")]
    ServerError(String),
}
