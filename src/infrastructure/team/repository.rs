//! Storage-backed team repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::storage::Storage;
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Storage-backed implementation of TeamRepository
#[derive(Debug)]
pub struct StorageTeamRepository {
    storage: Arc<dyn Storage<Team>>,
}

impl StorageTeamRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<Team>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl TeamRepository for StorageTeamRepository {
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError> {
        self.storage.get(id).await
    }

    async fn get_by_owner(&self, owner: &UserId) -> Result<Option<Team>, DomainError> {
        let teams = self.storage.find_by(Team::OWNER_FIELD, owner.as_str()).await?;

        Ok(teams.into_iter().min_by_key(|team| team.created_at()))
    }

    async fn create(&self, team: Team) -> Result<Team, DomainError> {
        self.storage.create(team).await
    }

    async fn update(&self, team: Team, expected_version: u32) -> Result<Team, DomainError> {
        let next = expected_version.checked_add(1).ok_or_else(|| {
            DomainError::internal(format!("Team '{}' version overflow", team.id()))
        })?;

        if team.version() != next {
            return Err(DomainError::internal(format!(
                "Team '{}' must be written at version {}, got {}",
                team.id(),
                next,
                team.version()
            )));
        }

        self.storage.update_versioned(team, expected_version).await
    }
}
