//! Storage trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::StorageEntity;

/// Generic storage trait for CRUD operations on any entity type
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity + 'static,
{
    /// Retrieves an entity by its key
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// Retrieves all entities, oldest first where the backend tracks insertion
    async fn list(&self) -> Result<Vec<E>, DomainError>;

    /// Entities whose indexed `field` equals `value`, oldest first.
    ///
    /// `field` must be listed in `E::INDEXED_FIELDS`.
    async fn find_by(&self, field: &str, value: &str) -> Result<Vec<E>, DomainError>;

    /// Creates a new entity, returns error if already exists
    async fn create(&self, entity: E) -> Result<E, DomainError>;

    /// Replaces a stored entity only if its stored version equals
    /// `expected_version`.
    ///
    /// Fails with `EditConflict` when the stored version differs and with
    /// `NotFound` when nothing is stored under the key. The check and the
    /// write happen atomically with respect to other writers.
    async fn update_versioned(&self, entity: E, expected_version: u32) -> Result<E, DomainError>;

    /// Deletes an entity by its key, returns true if deleted
    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError>;

    /// Checks if an entity exists by its key
    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.get(key).await?.is_some())
    }
}
