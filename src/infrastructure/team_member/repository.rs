//! Storage-backed team member repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::storage::Storage;
use crate::domain::team::TeamId;
use crate::domain::team_member::{TeamMember, TeamMemberId, TeamMemberRepository, TeamMemberValidationError};
use crate::domain::DomainError;

/// Storage-backed implementation of TeamMemberRepository
#[derive(Debug)]
pub struct StorageTeamMemberRepository {
    storage: Arc<dyn Storage<TeamMember>>,
    // Serialises the duplicate check with the insert
    insert_lock: Mutex<()>,
}

impl StorageTeamMemberRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<TeamMember>>) -> Self {
        Self {
            storage,
            insert_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl TeamMemberRepository for StorageTeamMemberRepository {
    async fn insert(&self, member: TeamMember) -> Result<TeamMember, DomainError> {
        let _guard = self.insert_lock.lock().await;

        let duplicate = self
            .list_by_team(member.team_id())
            .await?
            .iter()
            .any(|existing| existing.is_user(member.user_id()));

        if duplicate {
            return Err(TeamMemberValidationError::AlreadyMember.into());
        }

        self.storage.create(member).await
    }

    async fn get(&self, id: &TeamMemberId) -> Result<Option<TeamMember>, DomainError> {
        self.storage.get(id).await
    }

    async fn list_by_team(&self, team_id: &TeamId) -> Result<Vec<TeamMember>, DomainError> {
        self.storage
            .find_by(TeamMember::TEAM_FIELD, team_id.as_str())
            .await
    }

    async fn delete(&self, id: &TeamMemberId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }
}
