//! Team service for team management

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::picture::{validate_picture, PictureUpload};
use crate::domain::policy::{authorize_team, can_create_team, TeamAction};
use crate::domain::registration::TeamRegistrar;
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;
use crate::infrastructure::picture::PictureStore;

/// Request for creating a new team
#[derive(Debug, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    pub picture: Option<PictureUpload>,
}

/// Request for updating a team
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamRequest {
    /// New name; `None` or empty leaves the name unchanged
    pub name: Option<String>,
    /// Replacement picture
    pub picture: Option<PictureUpload>,
    /// Version the client last saw
    pub version: Option<u32>,
}

/// Team service for managing teams
#[derive(Debug)]
pub struct TeamService {
    repository: Arc<dyn TeamRepository>,
    registrar: Arc<dyn TeamRegistrar>,
    pictures: Arc<PictureStore>,
}

impl TeamService {
    /// Create a new team service
    pub fn new(
        repository: Arc<dyn TeamRepository>,
        registrar: Arc<dyn TeamRegistrar>,
        pictures: Arc<PictureStore>,
    ) -> Self {
        Self {
            repository,
            registrar,
            pictures,
        }
    }

    /// Create a team owned by `actor`
    pub async fn create(
        &self,
        actor: &UserId,
        request: CreateTeamRequest,
    ) -> Result<Team, DomainError> {
        info!(user_id = %actor, name = %request.name, "Creating team");

        can_create_team(actor).require("Not permitted to create teams")?;

        let mut team = Team::new(actor.clone(), request.name)?;
        let picture = non_empty(request.picture);

        if let Some(upload) = &picture {
            validate_picture(&upload.data)?;
            team.set_picture_filename(upload.storage_name(actor));
        }

        // Nothing touches disk until the registrar accepts the team
        self.registrar.register(&team).await?;

        if let Some(upload) = &picture {
            self.pictures.store(upload, actor, None).await?;
        }

        let team = self.repository.create(team).await?;

        info!(team_id = %team.id(), user_id = %actor, "Team created");
        Ok(team)
    }

    /// The team owned by `actor`
    pub async fn get_own(&self, actor: &UserId) -> Result<Team, DomainError> {
        debug!(user_id = %actor, "Getting own team");

        self.repository
            .get_by_owner(actor)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' does not own a team", actor)))
    }

    /// Update name and/or picture of a team owned by `actor`
    pub async fn update(
        &self,
        actor: &UserId,
        id: &TeamId,
        request: UpdateTeamRequest,
    ) -> Result<Team, DomainError> {
        info!(team_id = %id, user_id = %actor, "Updating team");

        let mut team = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team '{}' not found", id)))?;

        if let Err(e) = authorize_team(actor, &team, TeamAction::Update) {
            warn!(team_id = %id, user_id = %actor, "Team update denied");
            return Err(e);
        }

        if let Some(version) = request.version {
            if version != team.version() {
                return Err(DomainError::edit_conflict(format!(
                    "Team '{}' is at version {}, not {}",
                    id,
                    team.version(),
                    version
                )));
            }
        }

        if let Some(name) = request.name.filter(|name| !name.is_empty()) {
            team.set_name(name)?;
        }

        let picture = non_empty(request.picture);
        let owner = team.owner_user_id().clone();
        let previous = team.picture_filename().map(str::to_string);

        if let Some(upload) = &picture {
            validate_picture(&upload.data)?;
            team.set_picture_filename(upload.storage_name(&owner));
        }

        let expected = team.bump_version()?;

        // The previous picture stays on disk until the registrar accepts the change
        self.registrar.register(&team).await?;

        if let Some(upload) = &picture {
            self.pictures.store(upload, &owner, previous.as_deref()).await?;
        }

        let team = self.repository.update(team, expected).await?;

        info!(team_id = %id, version = team.version(), "Team updated");
        Ok(team)
    }
}

fn non_empty(upload: Option<PictureUpload>) -> Option<PictureUpload> {
    upload.filter(|upload| !upload.data.is_empty())
}
