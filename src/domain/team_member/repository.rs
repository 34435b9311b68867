//! Team member repository trait

use async_trait::async_trait;

use super::entity::{TeamMember, TeamMemberId};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// Repository for team memberships
#[async_trait]
pub trait TeamMemberRepository: Send + Sync + std::fmt::Debug {
    /// Insert a membership; a duplicate (team, user) pair is a validation error
    async fn insert(&self, member: TeamMember) -> Result<TeamMember, DomainError>;

    /// Get a membership by ID
    async fn get(&self, id: &TeamMemberId) -> Result<Option<TeamMember>, DomainError>;

    /// All memberships of a team, in insertion order
    async fn list_by_team(&self, team_id: &TeamId) -> Result<Vec<TeamMember>, DomainError>;

    /// Delete a membership, returns true if deleted
    async fn delete(&self, id: &TeamMemberId) -> Result<bool, DomainError>;
}
