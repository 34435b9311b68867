//! In-memory storage implementation

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::storage::{ensure_indexed, Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

#[derive(Debug)]
struct Entry<E> {
    seq: u64,
    entity: E,
}

#[derive(Debug)]
struct Inner<E> {
    entries: HashMap<String, Entry<E>>,
    next_seq: u64,
}

/// Thread-safe in-memory storage implementation
///
/// Useful for testing and development. Data is lost when the process terminates.
/// `list` returns entities in insertion order.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    inner: RwLock<Inner<E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                entries: HashMap::new(),
                next_seq: 0,
            }),
        }
    }
}

fn lock_error(kind: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::storage(format!("Failed to acquire {} lock: {}", kind, e))
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let inner = self.inner.read().map_err(|e| lock_error("read", e))?;

        Ok(inner.entries.get(key.as_str()).map(|entry| entry.entity.clone()))
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        let inner = self.inner.read().map_err(|e| lock_error("read", e))?;

        let mut entries: Vec<&Entry<E>> = inner.entries.values().collect();
        entries.sort_by_key(|entry| entry.seq);

        Ok(entries.into_iter().map(|entry| entry.entity.clone()).collect())
    }

    async fn find_by(&self, field: &str, value: &str) -> Result<Vec<E>, DomainError> {
        ensure_indexed::<E>(field)?;
        let inner = self.inner.read().map_err(|e| lock_error("read", e))?;

        let mut entries: Vec<&Entry<E>> = inner
            .entries
            .values()
            .filter(|entry| entry.entity.indexed_value(field) == Some(value))
            .collect();
        entries.sort_by_key(|entry| entry.seq);

        Ok(entries.into_iter().map(|entry| entry.entity.clone()).collect())
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut inner = self.inner.write().map_err(|e| lock_error("write", e))?;

        if inner.entries.contains_key(&key) {
            return Err(DomainError::storage(format!(
                "Entity with key '{}' already exists",
                key
            )));
        }

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.insert(
            key,
            Entry {
                seq,
                entity: entity.clone(),
            },
        );

        Ok(entity)
    }

    async fn update_versioned(&self, entity: E, expected_version: u32) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut inner = self.inner.write().map_err(|e| lock_error("write", e))?;

        let entry = inner.entries.get_mut(&key).ok_or_else(|| {
            DomainError::not_found(format!("Entity with key '{}' not found", key))
        })?;

        if entry.entity.version() != Some(expected_version) {
            return Err(DomainError::edit_conflict(format!(
                "Entity with key '{}' was modified concurrently",
                key
            )));
        }

        entry.entity = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        let mut inner = self.inner.write().map_err(|e| lock_error("write", e))?;

        Ok(inner.entries.remove(key.as_str()).is_some())
    }

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        let inner = self.inner.read().map_err(|e| lock_error("read", e))?;

        Ok(inner.entries.contains_key(key.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    struct TestId(String);

    impl StorageKey for TestId {
        fn as_str(&self) -> &str {
            &self.0
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestEntity {
        id: TestId,
        name: String,
        version: u32,
    }

    impl StorageEntity for TestEntity {
        type Key = TestId;

        const INDEXED_FIELDS: &'static [&'static str] = &["name"];

        fn key(&self) -> &Self::Key {
            &self.id
        }

        fn indexed_value(&self, field: &str) -> Option<&str> {
            match field {
                "name" => Some(&self.name),
                _ => None,
            }
        }

        fn version(&self) -> Option<u32> {
            Some(self.version)
        }
    }

    fn id(s: &str) -> TestId {
        TestId(s.to_string())
    }

    fn entity(key: &str, name: &str, version: u32) -> TestEntity {
        TestEntity {
            id: id(key),
            name: name.to_string(),
            version,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();
        let e = entity("1", "Test", 1);

        storage.create(e.clone()).await.unwrap();

        let result = storage.get(&id("1")).await.unwrap();
        assert_eq!(result, Some(e));
    }

    #[tokio::test]
    async fn test_create_duplicate_key() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();
        let e = entity("1", "Test", 1);

        storage.create(e.clone()).await.unwrap();
        let result = storage.create(e).await;

        assert!(matches!(result.unwrap_err(), DomainError::Storage { .. }));
    }

    #[tokio::test]
    async fn test_update_versioned() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();
        storage.create(entity("1", "Test", 1)).await.unwrap();

        storage
            .update_versioned(entity("1", "Updated", 2), 1)
            .await
            .unwrap();

        let result = storage.get(&id("1")).await.unwrap().unwrap();
        assert_eq!(result.name, "Updated");
        assert_eq!(result.version, 2);
    }

    #[tokio::test]
    async fn test_update_versioned_stale() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();
        storage.create(entity("1", "Test", 1)).await.unwrap();
        storage
            .update_versioned(entity("1", "First", 2), 1)
            .await
            .unwrap();

        let result = storage.update_versioned(entity("1", "Second", 2), 1).await;

        assert!(result.unwrap_err().is_edit_conflict());
        let stored = storage.get(&id("1")).await.unwrap().unwrap();
        assert_eq!(stored.name, "First");
    }

    #[tokio::test]
    async fn test_update_versioned_not_found() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        let result = storage.update_versioned(entity("1", "Test", 2), 1).await;

        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();
        storage.create(entity("1", "Test", 1)).await.unwrap();

        assert!(storage.delete(&id("1")).await.unwrap());
        assert!(!storage.exists(&id("1")).await.unwrap());
        assert!(!storage.delete(&id("1")).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        for key in ["c", "a", "b"] {
            storage.create(entity(key, key, 1)).await.unwrap();
        }

        let keys: Vec<String> = storage
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id.0)
            .collect();

        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_find_by_filters_in_insertion_order() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();
        storage.create(entity("c", "Rockets", 1)).await.unwrap();
        storage.create(entity("a", "Comets", 1)).await.unwrap();
        storage.create(entity("b", "Rockets", 1)).await.unwrap();

        let keys: Vec<String> = storage
            .find_by("name", "Rockets")
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id.0)
            .collect();

        assert_eq!(keys, vec!["c", "b"]);
        assert!(storage.find_by("name", "Meteors").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_unindexed_field() {
        let storage: InMemoryStorage<TestEntity> = InMemoryStorage::new();

        let err = storage.find_by("version", "1").await.unwrap_err();
        assert!(matches!(err, DomainError::Internal { .. }));
    }
}
