//! Team member service

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::policy::{authorize_membership, authorize_team, MembershipAction, TeamAction};
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::team_member::{TeamMember, TeamMemberId, TeamMemberRepository};
use crate::domain::user::{UserId, UserRepository};
use crate::domain::DomainError;

/// Request for adding a user to a team
#[derive(Debug, Clone)]
pub struct CreateTeamMemberRequest {
    pub team_id: TeamId,
    pub user_id: UserId,
}

/// Service for managing team memberships
#[derive(Debug)]
pub struct TeamMemberService {
    members: Arc<dyn TeamMemberRepository>,
    teams: Arc<dyn TeamRepository>,
    users: Arc<dyn UserRepository>,
}

impl TeamMemberService {
    pub fn new(
        members: Arc<dyn TeamMemberRepository>,
        teams: Arc<dyn TeamRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            members,
            teams,
            users,
        }
    }

    /// Add `request.user_id` to `request.team_id`; only the team owner may
    pub async fn create(
        &self,
        actor: &UserId,
        request: CreateTeamMemberRequest,
    ) -> Result<TeamMember, DomainError> {
        info!(
            team_id = %request.team_id,
            member_user_id = %request.user_id,
            user_id = %actor,
            "Adding team member"
        );

        let team = self.load_team(&request.team_id).await?;

        if !self.users.exists(&request.user_id).await? {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                request.user_id
            )));
        }

        if let Err(e) = authorize_team(actor, &team, TeamAction::AddMember) {
            warn!(team_id = %team.id(), user_id = %actor, "Adding team member denied");
            return Err(e);
        }

        let inserted = self
            .members
            .insert(TeamMember::new(request.team_id, request.user_id))
            .await?;

        let member = self.members.get(inserted.id()).await?.ok_or_else(|| {
            DomainError::internal(format!(
                "Team member '{}' missing right after insert",
                inserted.id()
            ))
        })?;

        info!(team_member_id = %member.id(), team_id = %member.team_id(), "Team member added");
        Ok(member)
    }

    /// Remove a membership from a team owned by `actor`
    pub async fn delete(&self, actor: &UserId, id: &TeamMemberId) -> Result<(), DomainError> {
        info!(team_member_id = %id, user_id = %actor, "Removing team member");

        let member = self.load_member(id).await?;
        let team = self.load_team(member.team_id()).await?;

        if let Err(e) = authorize_membership(actor, &team, &member, MembershipAction::Delete) {
            warn!(team_member_id = %id, user_id = %actor, "Removing team member denied");
            return Err(e);
        }

        if !self.members.delete(id).await? {
            return Err(member_not_found(id));
        }

        info!(team_member_id = %id, team_id = %team.id(), "Team member removed");
        Ok(())
    }

    /// Members of the team owned by `actor`, in insertion order
    pub async fn list_own(&self, actor: &UserId) -> Result<Vec<TeamMember>, DomainError> {
        debug!(user_id = %actor, "Listing own team members");

        let team = self
            .teams
            .get_by_owner(actor)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' does not own a team", actor)))?;

        authorize_team(actor, &team, TeamAction::ListMembers)?;

        self.members.list_by_team(team.id()).await
    }

    /// A membership visible to `actor` as the member or the team owner
    pub async fn get(&self, actor: &UserId, id: &TeamMemberId) -> Result<TeamMember, DomainError> {
        debug!(team_member_id = %id, user_id = %actor, "Getting team member");

        let member = self.load_member(id).await?;
        let team = self.load_team(member.team_id()).await?;

        if let Err(e) = authorize_membership(actor, &team, &member, MembershipAction::Read) {
            warn!(team_member_id = %id, user_id = %actor, "Reading team member denied");
            return Err(e);
        }

        Ok(member)
    }

    async fn load_team(&self, id: &TeamId) -> Result<Team, DomainError> {
        self.teams
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", id)))
    }

    async fn load_member(&self, id: &TeamMemberId) -> Result<TeamMember, DomainError> {
        self.members
            .get(id)
            .await?
            .ok_or_else(|| member_not_found(id))
    }
}

fn member_not_found(id: &TeamMemberId) -> DomainError {
    DomainError::not_found(format!("Team member '{}' not found", id))
}
