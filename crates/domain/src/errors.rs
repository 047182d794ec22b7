//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required text field is empty or whitespace
    #[error("Field must not be blank: {field}")]
    BlankField {
        /// Name of the offending field
        field: String,
    },
}

impl DomainError {
    /// Create a blank-field error
    pub fn blank_field(field: impl Into<String>) -> Self {
        Self::BlankField {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_field_names_the_field() {
        let err = DomainError::blank_field("origin");
        assert_eq!(err.to_string(), "Field must not be blank: origin");
    }
}
