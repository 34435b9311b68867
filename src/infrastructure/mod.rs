//! Infrastructure layer - External service implementations

pub mod auth;
pub mod logging;
pub mod picture;
pub mod registration;
pub mod storage;
pub mod team;
pub mod team_member;
pub mod user;
