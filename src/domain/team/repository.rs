//! Team repository trait

use async_trait::async_trait;

use super::entity::{Team, TeamId};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Repository for managing teams
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Get a team by ID
    async fn get(&self, id: &TeamId) -> Result<Option<Team>, DomainError>;

    /// Get the team owned by a user.
    ///
    /// Teams are assumed to be one per owner; if several exist the
    /// earliest-created is returned.
    async fn get_by_owner(&self, owner: &UserId) -> Result<Option<Team>, DomainError>;

    /// Create a new team
    async fn create(&self, team: Team) -> Result<Team, DomainError>;

    /// Write `team` only if the stored version still equals `expected_version`
    async fn update(&self, team: Team, expected_version: u32) -> Result<Team, DomainError>;
}
