//! Team member entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::team::TeamId;
use crate::domain::user::UserId;

use super::validation::{validate_team_member_id, TeamMemberValidationError};

/// Membership identifier - a UUID generated on insert
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamMemberId(String);

impl TeamMemberId {
    pub fn new(id: impl Into<String>) -> Result<Self, TeamMemberValidationError> {
        let id = id.into().to_lowercase();
        validate_team_member_id(&id)?;
        Ok(Self(id))
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamMemberId {
    type Error = TeamMemberValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamMemberId> for String {
    fn from(id: TeamMemberId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TeamMemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for TeamMemberId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Association of a user with a team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    id: TeamMemberId,
    team_id: TeamId,
    user_id: UserId,
    created_at: DateTime<Utc>,
}

impl TeamMember {
    /// Stored field holding the team id
    pub const TEAM_FIELD: &'static str = "team_id";

    pub fn new(team_id: TeamId, user_id: UserId) -> Self {
        Self {
            id: TeamMemberId::generate(),
            team_id,
            user_id,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &TeamMemberId {
        &self.id
    }

    pub fn team_id(&self) -> &TeamId {
        &self.team_id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_user(&self, user: &UserId) -> bool {
        &self.user_id == user
    }
}

impl StorageEntity for TeamMember {
    type Key = TeamMemberId;

    const INDEXED_FIELDS: &'static [&'static str] = &[TeamMember::TEAM_FIELD];

    fn key(&self) -> &Self::Key {
        &self.id
    }

    fn indexed_value(&self, field: &str) -> Option<&str> {
        match field {
            TeamMember::TEAM_FIELD => Some(self.team_id.as_str()),
            _ => None,
        }
    }
}
