//! User authentication via bearer JWTs

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::UserId;

/// Extractor that requires a valid bearer token for an existing user
///
/// Extracts the JWT token from the `Authorization: Bearer <jwt_token>` header.
#[derive(Debug, Clone)]
pub struct RequireUser(pub UserId);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_jwt_token(&parts.headers)?;

        let user_id = state
            .jwt_service
            .validate(&token)
            .and_then(|claims| claims.user_id())
            .map_err(|e| {
                debug!(error = %e, "Rejected bearer token");
                ApiError::unauthorized("Invalid or expired authentication token")
            })?;

        let known = state
            .user_repository
            .exists(&user_id)
            .await
            .map_err(ApiError::from)?;

        if !known {
            warn!(user_id = %user_id, "Token subject is not a known user");
            return Err(ApiError::unauthorized("Invalid or expired authentication token"));
        }

        Ok(RequireUser(user_id))
    }
}

/// Extract JWT token from Authorization header
pub fn extract_jwt_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let missing = || {
        ApiError::unauthorized(
            "Authentication required. Provide JWT token via 'Authorization: Bearer <token>' header",
        )
    };

    let value = headers.get(header::AUTHORIZATION).ok_or_else(missing)?;
    let value = value
        .to_str()
        .map_err(|_| ApiError::unauthorized("Invalid Authorization header encoding"))?;

    match value.strip_prefix("Bearer ").map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(missing()),
    }
}
