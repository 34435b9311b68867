//! API error envelope and domain error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{DomainError, FieldErrors};

const SERVER_ERROR_MESSAGE: &str =
    "The server encountered a problem and could not process your request";
const EDIT_CONFLICT_MESSAGE: &str =
    "Unable to update the record due to an edit conflict, please try again";

/// Error categories reported in `error.type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    AuthenticationError,
    PermissionError,
    NotFoundError,
    EditConflictError,
    ValidationError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::AuthenticationError => write!(f, "authentication_error"),
            Self::PermissionError => write!(f, "permission_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::EditConflictError => write!(f, "edit_conflict_error"),
            Self::ValidationError => write!(f, "validation_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// `{"error": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    /// Per-field validation problems
    #[serde(default, skip_serializing_if = "FieldErrors::is_empty")]
    pub fields: FieldErrors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    fields: FieldErrors::new(),
                    code: None,
                },
            },
        }
    }

    /// Attach field-level detail
    pub fn with_fields(mut self, fields: FieldErrors) -> Self {
        self.response.error.fields = fields;
        self
    }

    /// Add error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ApiErrorType::AuthenticationError, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, ApiErrorType::PermissionError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    pub fn edit_conflict() -> Self {
        Self::new(
            StatusCode::CONFLICT,
            ApiErrorType::EditConflictError,
            EDIT_CONFLICT_MESSAGE,
        )
    }

    pub fn unprocessable(message: impl Into<String>, fields: FieldErrors) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiErrorType::ValidationError,
            message,
        )
        .with_fields(fields)
    }

    /// Internal server error; the detail is logged, never returned
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        error!(error = %detail, "Request failed with server error");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::ServerError,
            SERVER_ERROR_MESSAGE,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::NotPermitted { message } => Self::forbidden(message),
            DomainError::Validation { message, fields } => Self::unprocessable(message, fields),
            DomainError::EditConflict { .. } => Self::edit_conflict(),
            err @ (DomainError::Registration { .. }
            | DomainError::Storage { .. }
            | DomainError::Internal { .. }) => Self::internal(err),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_statuses() {
        let cases = [
            (DomainError::not_found("x"), StatusCode::NOT_FOUND),
            (DomainError::not_permitted("x"), StatusCode::FORBIDDEN),
            (DomainError::validation("x"), StatusCode::UNPROCESSABLE_ENTITY),
            (DomainError::edit_conflict("x"), StatusCode::CONFLICT),
            (DomainError::registration("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::storage("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (domain, status) in cases {
            assert_eq!(ApiError::from(domain).status, status);
        }
    }

    #[test]
    fn test_validation_fields_are_serialized() {
        let err = ApiError::from(DomainError::invalid_field("team_name", "must be provided"));
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(json["error"]["type"], "validation_error");
        assert_eq!(json["error"]["fields"]["team_name"], "must be provided");
    }

    #[test]
    fn test_server_error_hides_detail() {
        let err = ApiError::from(DomainError::storage("connection refused on 10.0.0.5"));
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(!json.contains("10.0.0.5"));
        assert!(json.contains("server_error"));
    }

    #[test]
    fn test_fields_omitted_when_empty() {
        let json = serde_json::to_value(&ApiError::not_found("gone").response).unwrap();

        assert!(json["error"].get("fields").is_none());
        assert_eq!(json["error"]["message"], "gone");
    }
}
