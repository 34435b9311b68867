//! Team member validation

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur during team member validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamMemberValidationError {
    #[error("Team member ID cannot be empty")]
    EmptyId,

    #[error("Team member ID must be a UUID")]
    InvalidIdFormat,

    #[error("is already a member of this team")]
    AlreadyMember,
}

impl From<TeamMemberValidationError> for DomainError {
    fn from(err: TeamMemberValidationError) -> Self {
        match err {
            TeamMemberValidationError::AlreadyMember => {
                DomainError::invalid_field("team_member_user", err.to_string())
            }
            _ => DomainError::invalid_field("id", err.to_string()),
        }
    }
}

/// Validate a team member ID
pub fn validate_team_member_id(id: &str) -> Result<(), TeamMemberValidationError> {
    if id.is_empty() {
        return Err(TeamMemberValidationError::EmptyId);
    }

    uuid::Uuid::parse_str(id).map_err(|_| TeamMemberValidationError::InvalidIdFormat)?;

    Ok(())
}
