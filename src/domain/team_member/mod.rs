//! Team member domain module

mod entity;
mod repository;
mod validation;

pub use entity::{TeamMember, TeamMemberId};
pub use repository::TeamMemberRepository;
pub use validation::{validate_team_member_id, TeamMemberValidationError};
