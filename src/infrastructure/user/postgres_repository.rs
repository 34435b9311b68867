//! PostgreSQL user repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// Reads the `users` table maintained by the identity service
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id::text AS id, created_at
            FROM users
            WHERE id::text = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => {
                let created_at: DateTime<Utc> = row
                    .try_get("created_at")
                    .map_err(|e| DomainError::storage(format!("Invalid created_at: {}", e)))?;

                Ok(Some(User::with_created_at(id.clone(), created_at)))
            }
            None => Ok(None),
        }
    }

    async fn exists(&self, id: &UserId) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE id::text = $1) AS exists")
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check user: {}", e)))?;

        Ok(row.get("exists"))
    }
}
