//! Team validation

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team ID cannot be empty")]
    EmptyId,

    #[error("Team ID must be a UUID")]
    InvalidIdFormat,

    #[error("must be provided")]
    EmptyName,

    #[error("must not be more than {0} characters long")]
    NameTooLong(usize),
}

impl TeamValidationError {
    /// Request field the error is reported against
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyId | Self::InvalidIdFormat => "id",
            Self::EmptyName | Self::NameTooLong(_) => "team_name",
        }
    }
}

impl From<TeamValidationError> for DomainError {
    fn from(err: TeamValidationError) -> Self {
        DomainError::invalid_field(err.field(), err.to_string())
    }
}

pub(crate) const MAX_TEAM_NAME_LENGTH: usize = 100;

/// Validate a team ID
pub fn validate_team_id(id: &str) -> Result<(), TeamValidationError> {
    if id.is_empty() {
        return Err(TeamValidationError::EmptyId);
    }

    uuid::Uuid::parse_str(id).map_err(|_| TeamValidationError::InvalidIdFormat)?;

    Ok(())
}

/// Validate a team name
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    if name.trim().is_empty() {
        return Err(TeamValidationError::EmptyName);
    }

    if name.chars().count() > MAX_TEAM_NAME_LENGTH {
        return Err(TeamValidationError::NameTooLong(MAX_TEAM_NAME_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_team_id() {
        assert!(validate_team_id("8e8f4d5c-7f43-4d47-9d3e-0c6a3f1b2a90").is_ok());
    }

    #[test]
    fn test_empty_team_id() {
        assert_eq!(validate_team_id(""), Err(TeamValidationError::EmptyId));
    }

    #[test]
    fn test_invalid_team_id_format() {
        assert_eq!(
            validate_team_id("my-team"),
            Err(TeamValidationError::InvalidIdFormat)
        );
    }

    #[test]
    fn test_valid_team_name() {
        assert!(validate_team_name("Rockets").is_ok());
        assert!(validate_team_name("Team with spaces & symbols!").is_ok());
    }

    #[test]
    fn test_empty_team_name() {
        assert_eq!(validate_team_name(""), Err(TeamValidationError::EmptyName));
        assert_eq!(validate_team_name("   "), Err(TeamValidationError::EmptyName));
    }

    #[test]
    fn test_team_name_too_long() {
        let long_name = "a".repeat(101);
        assert_eq!(
            validate_team_name(&long_name),
            Err(TeamValidationError::NameTooLong(100))
        );
    }

    #[test]
    fn test_validation_error_maps_to_field() {
        let err: DomainError = TeamValidationError::EmptyName.into();

        match err {
            DomainError::Validation { fields, .. } => {
                assert_eq!(
                    fields.get("team_name").map(String::as_str),
                    Some("must be provided")
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
