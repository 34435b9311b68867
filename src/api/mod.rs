//! API layer - HTTP endpoints and middleware

pub mod health;
pub mod middleware;
pub mod pictures;
pub mod router;
pub mod state;
pub mod team_members;
pub mod teams;
pub mod types;


pub use router::create_router_with_state;
pub use state::AppState;
