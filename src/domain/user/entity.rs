//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_user_id, UserValidationError};
use crate::domain::storage::StorageKey;

/// User identifier - a UUID issued by the identity service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into().to_lowercase();
        validate_user_id(&id)?;
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for UserId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// A user known to this service.
///
/// Users are owned by the identity service; only their existence matters here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            created_at: Utc::now(),
        }
    }

    /// User with a creation time read from the directory
    pub fn with_created_at(id: UserId, created_at: DateTime<Utc>) -> Self {
        Self { id, created_at }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "1f0c7a3e-5c1b-4f0e-9a51-3f9b8f3a2c11";

    #[test]
    fn test_user_id_valid() {
        let id = UserId::new(ID).unwrap();
        assert_eq!(id.as_str(), ID);
    }

    #[test]
    fn test_user_id_normalised_to_lowercase() {
        let id = UserId::new(ID.to_uppercase()).unwrap();
        assert_eq!(id.as_str(), ID);
    }

    #[test]
    fn test_user_id_invalid() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("user-1").is_err());
    }

    #[test]
    fn test_user_id_deserialization_validates() {
        let ok: Result<UserId, _> = serde_json::from_str(&format!("\"{}\"", ID));
        assert!(ok.is_ok());

        let bad: Result<UserId, _> = serde_json::from_str("\"nope\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_user_creation() {
        let user = User::new(UserId::new(ID).unwrap());
        assert_eq!(user.id().as_str(), ID);
    }
}
