//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::UserRepository;
use crate::infrastructure::auth::JwtService;
use crate::infrastructure::picture::PictureStore;
use crate::infrastructure::team::TeamService;
use crate::infrastructure::team_member::TeamMemberService;

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub team_service: Arc<TeamService>,
    pub team_member_service: Arc<TeamMemberService>,
    pub pictures: Arc<PictureStore>,
    pub user_repository: Arc<dyn UserRepository>,
    pub jwt_service: Arc<JwtService>,
    /// Upper bound for request bodies, including picture uploads
    pub max_upload_bytes: usize,
}
