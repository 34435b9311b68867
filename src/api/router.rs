use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::logging_middleware;
use super::pictures;
use super::state::AppState;
use super::team_members;
use super::teams;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes;

    Router::new()
        // Health (no auth)
        .route("/service/teams/health", get(health::health_check))
        // Teams
        .route("/service/teams", post(teams::create_team))
        .route("/service/teams/me", get(teams::get_own_team))
        .route("/service/teams/{id}", patch(teams::update_team))
        // Pictures (no auth)
        .route("/service/teams/pictures/{file}", get(pictures::get_picture))
        // Team members
        .route(
            "/service/teammembers",
            get(team_members::list_team_members).post(team_members::create_team_member),
        )
        .route(
            "/service/teammembers/{id}",
            get(team_members::get_team_member).delete(team_members::delete_team_member),
        )
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
