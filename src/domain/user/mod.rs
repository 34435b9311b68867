//! User domain module
//!
//! Users are managed by the identity service. This service only checks that a
//! referenced user exists.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{validate_user_id, UserValidationError};
