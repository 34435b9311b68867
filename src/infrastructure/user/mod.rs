//! User directory implementations
//!
//! Users are owned by the identity service. The in-memory directory is seeded
//! from configuration; the Postgres directory reads the shared `users` table.

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
