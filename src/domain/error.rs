use std::collections::BTreeMap;

use thiserror::Error;

/// Field name → problem description, as reported to the client
pub type FieldErrors = BTreeMap<String, String>;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Not permitted: {message}")]
    NotPermitted { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String, fields: FieldErrors },

    #[error("Edit conflict: {message}")]
    EditConflict { message: String },

    #[error("Registration error: {message}")]
    Registration { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn not_permitted(message: impl Into<String>) -> Self {
        Self::NotPermitted {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            fields: FieldErrors::new(),
        }
    }

    /// Validation error attributed to a single request field
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut fields = FieldErrors::new();
        fields.insert(field.into(), message.clone());

        Self::Validation { message, fields }
    }

    pub fn edit_conflict(message: impl Into<String>) -> Self {
        Self::EditConflict {
            message: message.into(),
        }
    }

    pub fn registration(message: impl Into<String>) -> Self {
        Self::Registration {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_not_permitted(&self) -> bool {
        matches!(self, Self::NotPermitted { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_edit_conflict(&self) -> bool {
        matches!(self, Self::EditConflict { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Team 'abc' not found");
        assert_eq!(error.to_string(), "Not found: Team 'abc' not found");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_not_permitted_error() {
        let error = DomainError::not_permitted("Only the team owner can update the team");
        assert!(error.is_not_permitted());
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_invalid_field_error() {
        let error = DomainError::invalid_field("team_name", "must be provided");

        match error {
            DomainError::Validation { message, fields } => {
                assert_eq!(message, "must be provided");
                assert_eq!(fields.get("team_name").map(String::as_str), Some("must be provided"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_edit_conflict_error() {
        let error = DomainError::edit_conflict("Team was modified concurrently");
        assert_eq!(
            error.to_string(),
            "Edit conflict: Team was modified concurrently"
        );
        assert!(error.is_edit_conflict());
    }
}
