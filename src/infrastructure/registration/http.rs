//! HTTP client for the remote registration service

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::registration::TeamRegistrar;
use crate::domain::team::Team;
use crate::domain::DomainError;

/// Body sent to the registration service
#[derive(Debug, Serialize)]
struct RegistrationPayload<'a> {
    id: &'a str,
    owner_user_id: &'a str,
    name: &'a str,
    picture_filename: Option<&'a str>,
    version: u32,
}

impl<'a> From<&'a Team> for RegistrationPayload<'a> {
    fn from(team: &'a Team) -> Self {
        Self {
            id: team.id().as_str(),
            owner_user_id: team.owner_user_id().as_str(),
            name: team.name(),
            picture_filename: team.picture_filename(),
            version: team.version(),
        }
    }
}

/// Registrar that POSTs team state as JSON to a fixed URL
#[derive(Debug, Clone)]
pub struct HttpTeamRegistrar {
    client: reqwest::Client,
    url: String,
}

impl HttpTeamRegistrar {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TeamRegistrar for HttpTeamRegistrar {
    async fn register(&self, team: &Team) -> Result<(), DomainError> {
        debug!(team_id = %team.id(), version = team.version(), "Registering team");

        let response = self
            .client
            .post(&self.url)
            .json(&RegistrationPayload::from(team))
            .send()
            .await
            .map_err(|e| DomainError::registration(format!("Request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(team_id = %team.id(), status = %status, "Team registration rejected");

            return Err(DomainError::registration(format!("HTTP {}: {}", status, body)));
        }

        Ok(())
    }
}
