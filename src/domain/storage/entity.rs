//! Storage entity traits and types

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::DomainError;

/// Trait for types that can be used as storage keys
pub trait StorageKey: Clone + Debug + Send + Sync + Eq + std::hash::Hash {
    /// Returns the key as a string for storage backends that require string keys
    fn as_str(&self) -> &str;
}

/// Trait for types that can be stored
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    /// The key type for this entity
    type Key: StorageKey;

    /// Returns the entity's key
    fn key(&self) -> &Self::Key;

    /// Serialized top-level string fields that `Storage::find_by` may filter on
    const INDEXED_FIELDS: &'static [&'static str] = &[];

    /// Current value of an indexed field
    fn indexed_value(&self, _field: &str) -> Option<&str> {
        None
    }

    /// Optimistic-concurrency version, for entities that carry one
    fn version(&self) -> Option<u32> {
        None
    }
}

/// Check that `field` is one of `E::INDEXED_FIELDS`
pub fn ensure_indexed<E: StorageEntity>(field: &str) -> Result<(), DomainError> {
    if E::INDEXED_FIELDS.contains(&field) {
        Ok(())
    } else {
        Err(DomainError::internal(format!(
            "Field '{}' is not indexed for this entity",
            field
        )))
    }
}
