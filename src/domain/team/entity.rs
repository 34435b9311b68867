//! Team entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_team_id, validate_team_name, TeamValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Team identifier - a UUID generated when the team is created
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamId(String);

impl TeamId {
    /// Create a new TeamId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, TeamValidationError> {
        let id = id.into().to_lowercase();
        validate_team_id(&id)?;
        Ok(Self(id))
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamId {
    type Error = TeamValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamId> for String {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for TeamId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// Team entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier
    id: TeamId,
    /// User that created the team; never changes
    owner_user_id: UserId,
    /// Display name
    name: String,
    /// Stored picture file, if one has been uploaded
    #[serde(default)]
    picture_filename: Option<String>,
    /// Optimistic-concurrency version, starts at 1
    version: u32,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Team {
    /// Stored field holding the owner id
    pub const OWNER_FIELD: &'static str = "owner_user_id";

    /// Create a new team owned by `owner`
    pub fn new(owner: UserId, name: impl Into<String>) -> Result<Self, TeamValidationError> {
        let name = name.into();
        validate_team_name(&name)?;

        Ok(Self {
            id: TeamId::generate(),
            owner_user_id: owner,
            name,
            picture_filename: None,
            version: 1,
            created_at: Utc::now(),
        })
    }

    /// Set the picture filename (builder pattern)
    pub fn with_picture(mut self, filename: impl Into<String>) -> Self {
        self.set_picture_filename(filename);
        self
    }

    // Getters

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn owner_user_id(&self) -> &UserId {
        &self.owner_user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn picture_filename(&self) -> Option<&str> {
        self.picture_filename.as_deref()
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner_user_id == user
    }

    // Mutators

    /// Update the name
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), TeamValidationError> {
        let name = name.into();
        validate_team_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Point the team at a stored picture; an empty name clears it
    pub fn set_picture_filename(&mut self, filename: impl Into<String>) {
        let filename = filename.into();
        self.picture_filename = if filename.is_empty() {
            None
        } else {
            Some(filename)
        };
    }

    /// Advance the version for a pending write, returning the version the
    /// write must be checked against.
    pub fn bump_version(&mut self) -> Result<u32, DomainError> {
        let expected = self.version;
        self.version = expected.checked_add(1).ok_or_else(|| {
            DomainError::internal(format!("Team '{}' version overflow", self.id))
        })?;
        Ok(expected)
    }
}

impl StorageEntity for Team {
    type Key = TeamId;

    const INDEXED_FIELDS: &'static [&'static str] = &[Team::OWNER_FIELD];

    fn key(&self) -> &Self::Key {
        &self.id
    }

    fn indexed_value(&self, field: &str) -> Option<&str> {
        match field {
            Team::OWNER_FIELD => Some(self.owner_user_id.as_str()),
            _ => None,
        }
    }

    fn version(&self) -> Option<u32> {
        Some(self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> UserId {
        UserId::new("1f0c7a3e-5c1b-4f0e-9a51-3f9b8f3a2c11").unwrap()
    }

    #[test]
    fn test_team_id_generate_is_valid() {
        let id = TeamId::generate();
        assert!(TeamId::new(id.as_str()).is_ok());
    }

    #[test]
    fn test_team_id_invalid() {
        assert!(TeamId::new("").is_err());
        assert!(TeamId::new("team-1").is_err());
    }

    #[test]
    fn test_team_creation() {
        let team = Team::new(owner(), "Rockets").unwrap();

        assert_eq!(team.name(), "Rockets");
        assert_eq!(team.owner_user_id(), &owner());
        assert_eq!(team.version(), 1);
        assert!(team.picture_filename().is_none());
        assert!(team.is_owned_by(&owner()));
    }

    #[test]
    fn test_team_invalid_name() {
        assert!(Team::new(owner(), "").is_err());
    }

    #[test]
    fn test_team_with_picture() {
        let team = Team::new(owner(), "Rockets")
            .unwrap()
            .with_picture("1f0c7a3e-5c1b-4f0e-9a51-3f9b8f3a2c11.png");

        assert_eq!(
            team.picture_filename(),
            Some("1f0c7a3e-5c1b-4f0e-9a51-3f9b8f3a2c11.png")
        );
    }

    #[test]
    fn test_empty_picture_clears_reference() {
        let mut team = Team::new(owner(), "Rockets").unwrap().with_picture("a.png");
        team.set_picture_filename("");
        assert!(team.picture_filename().is_none());
    }

    #[test]
    fn test_bump_version() {
        let mut team = Team::new(owner(), "Rockets").unwrap();

        let expected = team.bump_version().unwrap();
        assert_eq!(expected, 1);
        assert_eq!(team.version(), 2);
        assert_eq!(StorageEntity::version(&team), Some(2));
    }

    #[test]
    fn test_bump_version_overflow() {
        let mut json = serde_json::to_value(Team::new(owner(), "Rockets").unwrap()).unwrap();
        json["version"] = serde_json::json!(u32::MAX);
        let mut team: Team = serde_json::from_value(json).unwrap();

        let err = team.bump_version().unwrap_err();

        assert!(matches!(err, DomainError::Internal { .. }));
        assert_eq!(team.version(), u32::MAX);
    }

    #[test]
    fn test_owner_is_indexed() {
        let team = Team::new(owner(), "Rockets").unwrap();

        assert_eq!(team.indexed_value(Team::OWNER_FIELD), Some(owner().as_str()));
        assert_eq!(team.indexed_value("name"), None);
    }

    #[test]
    fn test_team_serialization() {
        let team = Team::new(owner(), "Rockets").unwrap();
        let json = serde_json::to_value(&team).unwrap();

        assert_eq!(json["name"], "Rockets");
        assert_eq!(json["owner_user_id"], owner().as_str());
        assert_eq!(json["version"], 1);
        assert!(json["picture_filename"].is_null());
        assert!(json["id"].is_string());
    }
}
