//! Team member infrastructure implementations

mod repository;
mod service;

pub use repository::StorageTeamMemberRepository;
pub use service::{CreateTeamMemberRequest, TeamMemberService};
