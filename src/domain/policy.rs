//! Ownership-based access rules
//!
//! Every rule is a pure function of the acting user and resources that have
//! already been loaded. Callers resolve missing resources to `NotFound` first;
//! a denial here always means the resource exists and becomes `NotPermitted`.

use crate::domain::team::Team;
use crate::domain::team_member::TeamMember;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Outcome of an access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Denied,
}

impl Access {
    fn from_bool(allowed: bool) -> Self {
        if allowed { Self::Allowed } else { Self::Denied }
    }

    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Turn a denial into `DomainError::NotPermitted`
    pub fn require(self, message: impl Into<String>) -> Result<(), DomainError> {
        match self {
            Self::Allowed => Ok(()),
            Self::Denied => Err(DomainError::not_permitted(message)),
        }
    }
}

/// Operations on a team record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamAction {
    Read,
    Update,
    AddMember,
    ListMembers,
}

impl TeamAction {
    pub fn denial_message(self) -> &'static str {
        match self {
            Self::Read => "Only the team owner can read this team",
            Self::Update => "Only the team owner can update this team",
            Self::AddMember => "Only the team owner can add members",
            Self::ListMembers => "Only the team owner can list members",
        }
    }
}

/// Operations on a single membership
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipAction {
    Read,
    Delete,
}

impl MembershipAction {
    pub fn denial_message(self) -> &'static str {
        match self {
            Self::Read => "Only the member or the team owner can read this membership",
            Self::Delete => "Only the team owner can remove members",
        }
    }
}

/// Any authenticated user may create a team and becomes its owner
pub fn can_create_team(_actor: &UserId) -> Access {
    Access::Allowed
}

/// Decide whether `actor` may perform `action` on `team`
pub fn team_access(actor: &UserId, team: &Team, action: TeamAction) -> Access {
    match action {
        TeamAction::Read | TeamAction::Update | TeamAction::AddMember | TeamAction::ListMembers => {
            Access::from_bool(team.is_owned_by(actor))
        }
    }
}

/// Decide whether `actor` may perform `action` on `member`, which belongs to `team`
pub fn membership_access(
    actor: &UserId,
    team: &Team,
    member: &TeamMember,
    action: MembershipAction,
) -> Access {
    match action {
        MembershipAction::Read => Access::from_bool(member.is_user(actor) || team.is_owned_by(actor)),
        MembershipAction::Delete => Access::from_bool(team.is_owned_by(actor)),
    }
}

/// `team_access` that fails with `NotPermitted` on denial
pub fn authorize_team(actor: &UserId, team: &Team, action: TeamAction) -> Result<(), DomainError> {
    team_access(actor, team, action).require(action.denial_message())
}

/// `membership_access` that fails with `NotPermitted` on denial
pub fn authorize_membership(
    actor: &UserId,
    team: &Team,
    member: &TeamMember,
    action: MembershipAction,
) -> Result<(), DomainError> {
    membership_access(actor, team, member, action).require(action.denial_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(n: u8) -> UserId {
        UserId::new(format!("00000000-0000-4000-8000-0000000000{:02}", n)).unwrap()
    }

    fn team_owned_by(owner: &UserId) -> Team {
        Team::new(owner.clone(), "Rockets").unwrap()
    }

    #[test]
    fn test_anyone_can_create_team() {
        assert!(can_create_team(&user(1)).is_allowed());
    }

    #[test]
    fn test_owner_has_every_team_action() {
        let owner = user(1);
        let team = team_owned_by(&owner);

        for action in [
            TeamAction::Read,
            TeamAction::Update,
            TeamAction::AddMember,
            TeamAction::ListMembers,
        ] {
            assert_eq!(team_access(&owner, &team, action), Access::Allowed);
        }
    }

    #[test]
    fn test_non_owner_denied_every_team_action() {
        let team = team_owned_by(&user(1));
        let other = user(2);

        for action in [
            TeamAction::Read,
            TeamAction::Update,
            TeamAction::AddMember,
            TeamAction::ListMembers,
        ] {
            assert_eq!(team_access(&other, &team, action), Access::Denied);
        }
    }

    #[test]
    fn test_denial_is_not_permitted_not_not_found() {
        let team = team_owned_by(&user(1));
        let err = authorize_team(&user(2), &team, TeamAction::Update).unwrap_err();

        assert!(err.is_not_permitted());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_member_reads_own_membership() {
        let owner = user(1);
        let member_user = user(2);
        let team = team_owned_by(&owner);
        let member = TeamMember::new(team.id().clone(), member_user.clone());

        assert!(membership_access(&member_user, &team, &member, MembershipAction::Read).is_allowed());
        assert!(membership_access(&owner, &team, &member, MembershipAction::Read).is_allowed());
    }

    #[test]
    fn test_member_cannot_read_other_membership() {
        let owner = user(1);
        let team = team_owned_by(&owner);
        let member = TeamMember::new(team.id().clone(), user(2));

        let result = authorize_membership(&user(3), &team, &member, MembershipAction::Read);
        assert!(result.unwrap_err().is_not_permitted());
    }

    #[test]
    fn test_only_owner_deletes_membership() {
        let owner = user(1);
        let member_user = user(2);
        let team = team_owned_by(&owner);
        let member = TeamMember::new(team.id().clone(), member_user.clone());

        assert!(membership_access(&owner, &team, &member, MembershipAction::Delete).is_allowed());
        assert_eq!(
            membership_access(&member_user, &team, &member, MembershipAction::Delete),
            Access::Denied
        );
    }
}
