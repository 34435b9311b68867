//! Team Service
//!
//! HTTP service for teams and their members:
//! - Teams owned by a single user, with an optional team picture
//! - Memberships linking users to teams
//! - Ownership-based authorization on every operation
//! - Optimistic concurrency on team updates
//! - In-memory or PostgreSQL persistence

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use api::state::AppState;
use config::StorageBackend;
use domain::registration::TeamRegistrar;
use domain::team::Team;
use domain::team_member::TeamMember;
use domain::user::{User, UserId, UserRepository};
use infrastructure::{
    auth::{JwtConfig, JwtService},
    picture::PictureStore,
    registration::{HttpTeamRegistrar, NoopTeamRegistrar},
    storage::{PostgresConfig, StorageConfig, StorageFactory},
    team::{StorageTeamRepository, TeamService},
    team_member::{StorageTeamMemberRepository, TeamMemberService},
    user::{InMemoryUserRepository, PostgresUserRepository},
};

const TEAMS_TABLE: &str = "teams";
const TEAM_MEMBERS_TABLE: &str = "team_members";

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = storage_config(config)?;
    info!("Storage backend: {:?}", storage_config.storage_type());

    let factory = StorageFactory::connect(&storage_config)
        .await
        .context("Failed to connect storage backend")?;

    let team_storage = factory.create::<Team>(TEAMS_TABLE).await?;
    let member_storage = factory.create::<TeamMember>(TEAM_MEMBERS_TABLE).await?;

    let user_repository = create_user_repository(config, &factory)?;
    let team_repository = Arc::new(StorageTeamRepository::new(team_storage));
    let member_repository = Arc::new(StorageTeamMemberRepository::new(member_storage));

    let registrar = create_registrar(config)?;
    let pictures = Arc::new(PictureStore::new(config.uploads.dir.clone()));
    info!(dir = %config.uploads.dir.display(), "Team pictures directory");

    let team_service = Arc::new(TeamService::new(
        team_repository.clone(),
        registrar,
        pictures.clone(),
    ));
    let team_member_service = Arc::new(TeamMemberService::new(
        member_repository,
        team_repository,
        user_repository.clone(),
    ));

    let jwt_service = Arc::new(JwtService::new(JwtConfig::new(
        config.auth.jwt_secret.clone(),
        config.auth.expiration_hours,
    )));

    Ok(AppState {
        team_service,
        team_member_service,
        pictures,
        user_repository,
        jwt_service,
        max_upload_bytes: config.uploads.max_bytes,
    })
}

fn storage_config(config: &AppConfig) -> anyhow::Result<StorageConfig> {
    match config.storage.backend {
        StorageBackend::Memory => Ok(StorageConfig::in_memory()),
        StorageBackend::Postgres => {
            let url = config
                .storage
                .database_url
                .clone()
                .context("storage.database_url is required for the postgres backend")?;

            Ok(StorageConfig::Postgres(
                PostgresConfig::new(url).with_max_connections(config.storage.max_connections),
            ))
        }
    }
}

fn create_user_repository(
    config: &AppConfig,
    factory: &StorageFactory,
) -> anyhow::Result<Arc<dyn UserRepository>> {
    if let Some(pool) = factory.pool() {
        info!("Reading users from PostgreSQL");
        return Ok(Arc::new(PostgresUserRepository::new(pool.clone())));
    }

    let users = config
        .users
        .seed
        .iter()
        .map(|id| {
            UserId::new(id.trim())
                .map(User::new)
                .with_context(|| format!("Invalid seeded user id '{}'", id))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    info!(count = users.len(), "Seeded in-memory users");
    Ok(Arc::new(InMemoryUserRepository::with_users(users)))
}

fn create_registrar(config: &AppConfig) -> anyhow::Result<Arc<dyn TeamRegistrar>> {
    match &config.registration.url {
        Some(url) => {
            info!(url = %url, "Registering teams with remote service");
            let registrar = HttpTeamRegistrar::new(
                url.clone(),
                Duration::from_secs(config.registration.timeout_secs),
            )?;
            Ok(Arc::new(registrar))
        }
        None => Ok(Arc::new(NoopTeamRegistrar)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_state_uses_memory() {
        let state = create_app_state().await.unwrap();

        assert_eq!(state.max_upload_bytes, 10 * 1024 * 1024);
        let user = UserId::new("00000000-0000-4000-8000-000000000001").unwrap();
        assert!(!state.user_repository.exists(&user).await.unwrap());
    }

    #[tokio::test]
    async fn test_seeded_users_exist() {
        let mut config = AppConfig::default();
        config.users.seed = vec!["00000000-0000-4000-8000-000000000001".to_string()];

        let state = create_app_state_with_config(&config).await.unwrap();

        let user = UserId::new("00000000-0000-4000-8000-000000000001").unwrap();
        assert!(state.user_repository.exists(&user).await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_seed_is_rejected() {
        let mut config = AppConfig::default();
        config.users.seed = vec!["not-a-uuid".to_string()];

        assert!(create_app_state_with_config(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_postgres_without_url_is_rejected() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Postgres;

        assert!(create_app_state_with_config(&config).await.is_err());
    }
}
