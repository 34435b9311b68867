//! Multipart form carrying team fields

use axum::extract::{FromRequest, Multipart, Request};

use super::error::ApiError;
use crate::domain::picture::{PictureUpload, PICTURE_FIELD};
use crate::domain::DomainError;

pub const NAME_FIELD: &str = "team_name";
pub const VERSION_FIELD: &str = "version";

/// Fields of a team create/update form. Unknown fields are ignored.
#[derive(Debug, Default)]
pub struct TeamForm {
    pub name: Option<String>,
    /// Present only when a non-empty file was sent
    pub picture: Option<PictureUpload>,
    pub version: Option<u32>,
}

impl<S> FromRequest<S> for TeamForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Expected a multipart form: {}", e)))?;

        let mut form = TeamForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read multipart field: {}", e)))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                NAME_FIELD => {
                    let value = field.text().await.map_err(|e| {
                        ApiError::bad_request(format!("Failed to read '{}': {}", NAME_FIELD, e))
                    })?;
                    form.name = Some(value);
                }
                PICTURE_FIELD => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let data = field.bytes().await.map_err(|e| {
                        ApiError::bad_request(format!("Failed to read '{}': {}", PICTURE_FIELD, e))
                    })?;

                    if !data.is_empty() {
                        form.picture = Some(PictureUpload::new(filename, data));
                    }
                }
                VERSION_FIELD => {
                    let value = field.text().await.map_err(|e| {
                        ApiError::bad_request(format!("Failed to read '{}': {}", VERSION_FIELD, e))
                    })?;
                    form.version = parse_version(&value)?;
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

fn parse_version(value: &str) -> Result<Option<u32>, ApiError> {
    let value = value.trim();

    if value.is_empty() {
        return Ok(None);
    }

    match value.parse::<u32>() {
        Ok(version) if version > 0 => Ok(Some(version)),
        _ => Err(DomainError::invalid_field(VERSION_FIELD, "must be a positive integer").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("3").unwrap(), Some(3));
        assert_eq!(parse_version(" 1 ").unwrap(), Some(1));
        assert_eq!(parse_version("").unwrap(), None);
    }

    #[test]
    fn test_parse_version_rejects_garbage() {
        for value in ["0", "-1", "two"] {
            let err = parse_version(value).unwrap_err();
            assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
            assert!(err.response.error.fields.contains_key(VERSION_FIELD));
        }
    }
}
