//! Team registration clients

mod http;
mod noop;

pub use http::HttpTeamRegistrar;
pub use noop::NoopTeamRegistrar;
