//! Outbound team registration
//!
//! Every team creation and update is announced to the remote registration
//! service before it is persisted. A failed announcement aborts the write.

use async_trait::async_trait;

use crate::domain::team::Team;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Announces team state to the remote registration service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamRegistrar: Send + Sync + std::fmt::Debug {
    /// Register the given team state; failures map to `DomainError::Registration`
    async fn register(&self, team: &Team) -> Result<(), DomainError>;
}
