//! Authentication infrastructure module
//!
//! Bearer tokens are HS256 JWTs whose `sub` claim is the user ID.

mod jwt;

pub use jwt::{JwtClaims, JwtConfig, JwtService};
