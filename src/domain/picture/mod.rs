//! Team picture domain
//!
//! Naming and acceptance rules for uploaded team pictures. The file-system
//! side lives in `infrastructure::picture`.

mod sniff;

use bytes::Bytes;

use crate::domain::user::UserId;
use crate::domain::DomainError;

pub use sniff::{sniff_content_type, IMAGE_GIF, IMAGE_JPEG, IMAGE_PNG, OCTET_STREAM, SNIFF_LEN};

/// Request field carrying the picture
pub const PICTURE_FIELD: &str = "team_picture";

/// Content types accepted for team pictures
pub const ACCEPTED_PICTURE_TYPES: &[&str] = &[IMAGE_JPEG, IMAGE_PNG];

/// A picture received from a client
#[derive(Debug, Clone)]
pub struct PictureUpload {
    /// Filename claimed by the client; only its extension is used
    pub original_filename: String,
    pub data: Bytes,
}

impl PictureUpload {
    pub fn new(original_filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            original_filename: original_filename.into(),
            data: data.into(),
        }
    }

    /// Storage name for this upload when owned by `owner`
    pub fn storage_name(&self, owner: &UserId) -> String {
        picture_filename(owner, &self.original_filename)
    }
}

/// A picture read back from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPicture {
    pub content_type: &'static str,
    pub data: Vec<u8>,
}

impl StoredPicture {
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self {
            content_type: sniff_content_type(&data),
            data,
        }
    }
}

/// Extension of the final path element, including the dot; empty if none
pub fn file_extension(filename: &str) -> &str {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    match name.rfind('.') {
        Some(idx) => &name[idx..],
        None => "",
    }
}

/// Deterministic storage name: `<owner-id><extension>`
pub fn picture_filename(owner: &UserId, original_filename: &str) -> String {
    format!("{}{}", owner, file_extension(original_filename))
}

/// Sniff `data` and accept it only if it is a JPEG or PNG image
pub fn validate_picture(data: &[u8]) -> Result<&'static str, DomainError> {
    let content_type = sniff_content_type(data);

    if ACCEPTED_PICTURE_TYPES.contains(&content_type) {
        Ok(content_type)
    } else {
        Err(DomainError::invalid_field(
            PICTURE_FIELD,
            "Please upload a JPEG or PNG image",
        ))
    }
}

/// Whether `filename` names a single entry directly inside the storage root
pub fn is_servable_filename(filename: &str) -> bool {
    !filename.is_empty()
        && filename != "."
        && filename != ".."
        && !filename.contains(['/', '\\', '\0'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> UserId {
        UserId::new("1f0c7a3e-5c1b-4f0e-9a51-3f9b8f3a2c11").unwrap()
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("photo.png"), ".png");
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
        assert_eq!(file_extension("dir.d/photo"), "");
        assert_eq!(file_extension("C:\\pics\\logo.JPG"), ".JPG");
        assert_eq!(file_extension("noext"), "");
    }

    #[test]
    fn test_picture_filename_is_owner_plus_extension() {
        assert_eq!(
            picture_filename(&owner(), "My Logo.jpeg"),
            "1f0c7a3e-5c1b-4f0e-9a51-3f9b8f3a2c11.jpeg"
        );
        assert_eq!(
            picture_filename(&owner(), "logo"),
            "1f0c7a3e-5c1b-4f0e-9a51-3f9b8f3a2c11"
        );
    }

    #[test]
    fn test_validate_picture_accepts_png_and_jpeg() {
        assert_eq!(validate_picture(b"\x89PNG\r\n\x1a\n0000").unwrap(), IMAGE_PNG);
        assert_eq!(validate_picture(b"\xff\xd8\xff\xe0").unwrap(), IMAGE_JPEG);
    }

    #[test]
    fn test_validate_picture_rejects_gif() {
        let err = validate_picture(b"GIF89a\x01\x00").unwrap_err();

        match err {
            DomainError::Validation { fields, .. } => assert!(fields.contains_key(PICTURE_FIELD)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_servable_filename() {
        assert!(is_servable_filename("1f0c7a3e-5c1b-4f0e-9a51-3f9b8f3a2c11.png"));
        assert!(!is_servable_filename(""));
        assert!(!is_servable_filename(".."));
        assert!(!is_servable_filename("../etc/passwd"));
        assert!(!is_servable_filename("a\\b"));
    }

    #[test]
    fn test_stored_picture_sniffs_content_type() {
        let picture = StoredPicture::from_bytes(b"\xff\xd8\xff\xe0rest".to_vec());
        assert_eq!(picture.content_type, IMAGE_JPEG);
    }
}
