use async_trait::async_trait;
use tracing::debug;

use crate::domain::registration::TeamRegistrar;
use crate::domain::team::Team;
use crate::domain::DomainError;

/// Registrar used when no registration service is configured
#[derive(Debug, Default, Clone)]
pub struct NoopTeamRegistrar;

#[async_trait]
impl TeamRegistrar for NoopTeamRegistrar {
    async fn register(&self, team: &Team) -> Result<(), DomainError> {
        debug!(team_id = %team.id(), "Team registration disabled, skipping");
        Ok(())
    }
}
