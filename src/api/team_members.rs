//! Team member endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::team::TeamId;
use crate::domain::team_member::{TeamMember, TeamMemberId};
use crate::domain::user::UserId;
use crate::infrastructure::team_member::CreateTeamMemberRequest;

/// Body of POST /service/teammembers
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamMemberApiRequest {
    pub team_member_team: String,
    pub team_member_user: String,
}

/// Membership as rendered to clients
#[derive(Debug, Clone, Serialize)]
pub struct TeamMemberResponse {
    pub id: String,
    pub team_id: String,
    pub user_id: String,
    pub created_at: String,
}

impl From<&TeamMember> for TeamMemberResponse {
    fn from(member: &TeamMember) -> Self {
        Self {
            id: member.id().as_str().to_string(),
            team_id: member.team_id().as_str().to_string(),
            user_id: member.user_id().as_str().to_string(),
            created_at: member.created_at().to_rfc3339(),
        }
    }
}

/// `{"team_member": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct TeamMemberEnvelope {
    pub team_member: TeamMemberResponse,
}

/// `{"team_members": [...]}`
#[derive(Debug, Clone, Serialize)]
pub struct TeamMembersEnvelope {
    pub team_members: Vec<TeamMemberResponse>,
}

fn parse_member_id(raw: &str) -> Result<TeamMemberId, ApiError> {
    TeamMemberId::new(raw).map_err(|_| ApiError::not_found(format!("Team member '{}' not found", raw)))
}

/// POST /service/teammembers
pub async fn create_team_member(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
    Json(request): Json<CreateTeamMemberApiRequest>,
) -> Result<(StatusCode, Json<TeamMemberEnvelope>), ApiError> {
    debug!(
        user_id = %user_id,
        team = %request.team_member_team,
        member = %request.team_member_user,
        "Creating team member"
    );

    let team_id = TeamId::new(&request.team_member_team).map_err(|_| {
        ApiError::not_found(format!("Team '{}' not found", request.team_member_team))
    })?;
    let member_user_id = UserId::new(&request.team_member_user).map_err(|_| {
        ApiError::not_found(format!("User '{}' not found", request.team_member_user))
    })?;

    let service_request = CreateTeamMemberRequest {
        team_id,
        user_id: member_user_id,
    };

    let member = state
        .team_member_service
        .create(&user_id, service_request)
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(TeamMemberEnvelope {
            team_member: TeamMemberResponse::from(&member),
        }),
    ))
}

/// GET /service/teammembers
pub async fn list_team_members(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
) -> Result<Json<TeamMembersEnvelope>, ApiError> {
    debug!(user_id = %user_id, "Listing team members");

    let members = state
        .team_member_service
        .list_own(&user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(TeamMembersEnvelope {
        team_members: members.iter().map(TeamMemberResponse::from).collect(),
    }))
}

/// GET /service/teammembers/{id}
pub async fn get_team_member(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
    Path(member_id): Path<String>,
) -> Result<Json<TeamMemberEnvelope>, ApiError> {
    debug!(team_member_id = %member_id, user_id = %user_id, "Getting team member");

    let member_id = parse_member_id(&member_id)?;

    let member = state
        .team_member_service
        .get(&user_id, &member_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(TeamMemberEnvelope {
        team_member: TeamMemberResponse::from(&member),
    }))
}

/// DELETE /service/teammembers/{id}
pub async fn delete_team_member(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
    Path(member_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(team_member_id = %member_id, user_id = %user_id, "Deleting team member");

    let member_id = parse_member_id(&member_id)?;

    state
        .team_member_service
        .delete(&user_id, &member_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::OK)
}
