//! Team domain module
//!
//! A team is owned by the user that created it. Only the owner may change the
//! team or manage its members.

mod entity;
mod repository;
mod validation;

pub use entity::{Team, TeamId};
pub use repository::TeamRepository;
pub use validation::{validate_team_id, validate_team_name, TeamValidationError};
