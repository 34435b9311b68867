//! Team endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, TeamForm};
use crate::domain::team::{Team, TeamId};
use crate::infrastructure::team::{CreateTeamRequest, UpdateTeamRequest};

/// Team as rendered to clients
#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub id: String,
    pub owner_user_id: String,
    pub name: String,
    pub picture_filename: Option<String>,
    pub version: u32,
    pub created_at: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().as_str().to_string(),
            owner_user_id: team.owner_user_id().as_str().to_string(),
            name: team.name().to_string(),
            picture_filename: team.picture_filename().map(String::from),
            version: team.version(),
            created_at: team.created_at().to_rfc3339(),
        }
    }
}

/// `{"team": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct TeamEnvelope {
    pub team: TeamResponse,
}

impl From<&Team> for TeamEnvelope {
    fn from(team: &Team) -> Self {
        Self {
            team: TeamResponse::from(team),
        }
    }
}

/// Path ids that cannot name a team are reported as not found
pub(crate) fn parse_team_id(raw: &str) -> Result<TeamId, ApiError> {
    TeamId::new(raw).map_err(|_| ApiError::not_found(format!("Team '{}' not found", raw)))
}

/// POST /service/teams
pub async fn create_team(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
    form: TeamForm,
) -> Result<(StatusCode, Json<TeamEnvelope>), ApiError> {
    debug!(user_id = %user_id, "Creating team");

    let request = CreateTeamRequest {
        name: form.name.unwrap_or_default(),
        picture: form.picture,
    };

    let team = state
        .team_service
        .create(&user_id, request)
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(TeamEnvelope::from(&team))))
}

/// GET /service/teams/me
pub async fn get_own_team(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
) -> Result<Json<TeamEnvelope>, ApiError> {
    debug!(user_id = %user_id, "Getting own team");

    let team = state
        .team_service
        .get_own(&user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(TeamEnvelope::from(&team)))
}

/// PATCH /service/teams/{id}
pub async fn update_team(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
    Path(team_id): Path<String>,
    form: TeamForm,
) -> Result<Json<TeamEnvelope>, ApiError> {
    debug!(team_id = %team_id, user_id = %user_id, "Updating team");

    let team_id = parse_team_id(&team_id)?;

    let request = UpdateTeamRequest {
        name: form.name,
        picture: form.picture,
        version: form.version,
    };

    let team = state
        .team_service
        .update(&user_id, &team_id, request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(TeamEnvelope::from(&team)))
}
