//! Public picture endpoint

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// GET /service/teams/pictures/{file}
pub async fn get_picture(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(filename = %filename, "Serving team picture");

    let picture = state
        .pictures
        .load(&filename)
        .await
        .map_err(ApiError::from)?;

    Ok(([(header::CONTENT_TYPE, picture.content_type)], picture.data))
}
