//! User validation

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User ID cannot be empty")]
    EmptyId,

    #[error("User ID must be a UUID")]
    InvalidIdFormat,
}

/// Validate a user ID
pub fn validate_user_id(id: &str) -> Result<(), UserValidationError> {
    if id.is_empty() {
        return Err(UserValidationError::EmptyId);
    }

    uuid::Uuid::parse_str(id).map_err(|_| UserValidationError::InvalidIdFormat)?;

    Ok(())
}
