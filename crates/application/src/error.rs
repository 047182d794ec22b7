//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External provider error (absorbed by fallback paths where possible)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Plan composition failed on the live LLM path
    #[error("{0}")]
    Composition(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::blank_field("origin").into();
        assert_eq!(err.to_string(), "Field must not be blank: origin");
    }

    #[test]
    fn composition_error_keeps_message_verbatim() {
        let err = ApplicationError::Composition(
            "Error generating trip plan: Server error: Status 503".to_string(),
        );
        assert!(err.to_string().starts_with("Error generating trip plan"));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn external_service_error_message() {
        let err = ApplicationError::ExternalService("Connection failed".to_string());
        assert!(err.to_string().contains("Connection failed"));
    }
}
