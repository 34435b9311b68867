//! Domain layer - Core business logic and entities

pub mod error;
pub mod picture;
pub mod policy;
pub mod registration;
pub mod storage;
pub mod team;
pub mod team_member;
pub mod user;

pub use error::{DomainError, FieldErrors};
pub use picture::{PictureUpload, StoredPicture};
pub use registration::TeamRegistrar;
pub use storage::{Storage, StorageEntity, StorageKey};
pub use team::{Team, TeamId, TeamRepository};
pub use team_member::{TeamMember, TeamMemberId, TeamMemberRepository};
pub use user::{User, UserId, UserRepository};
