//! Picture store backed by a local directory

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info, warn};

use crate::domain::picture::{is_servable_filename, validate_picture, PictureUpload, StoredPicture};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Stores pictures as `<root>/<owner-id><extension>`
#[derive(Debug, Clone)]
pub struct PictureStore {
    root: PathBuf,
}

impl PictureStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate and persist `upload` for `owner`, returning the stored filename.
    ///
    /// A rejected upload touches nothing on disk. Otherwise `previous`, when it
    /// exists, is removed before the new content is written.
    pub async fn store(
        &self,
        upload: &PictureUpload,
        owner: &UserId,
        previous: Option<&str>,
    ) -> Result<String, DomainError> {
        let content_type = validate_picture(&upload.data)?;
        let filename = upload.storage_name(owner);

        fs::create_dir_all(&self.root).await.map_err(|e| {
            DomainError::internal(format!(
                "Failed to create picture directory {}: {}",
                self.root.display(),
                e
            ))
        })?;

        if let Some(previous) = previous.filter(|name| is_servable_filename(name)) {
            self.remove(previous).await?;
        }

        let path = self.root.join(&filename);
        fs::write(&path, &upload.data).await.map_err(|e| {
            DomainError::internal(format!("Failed to write picture {}: {}", path.display(), e))
        })?;

        info!(
            filename = %filename,
            content_type = content_type,
            bytes = upload.data.len(),
            "Stored team picture"
        );

        Ok(filename)
    }

    /// Read a stored picture; unknown or unsafe names are not found
    pub async fn load(&self, filename: &str) -> Result<StoredPicture, DomainError> {
        if !is_servable_filename(filename) {
            warn!(filename = %filename, "Rejected picture path");
            return Err(picture_not_found(filename));
        }

        match fs::read(self.root.join(filename)).await {
            Ok(data) => Ok(StoredPicture::from_bytes(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(picture_not_found(filename)),
            Err(e) => Err(DomainError::internal(format!(
                "Failed to read picture '{}': {}",
                filename, e
            ))),
        }
    }

    async fn remove(&self, filename: &str) -> Result<(), DomainError> {
        match fs::remove_file(self.root.join(filename)).await {
            Ok(()) => {
                debug!(filename = %filename, "Removed previous team picture");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::internal(format!(
                "Failed to remove picture '{}': {}",
                filename, e
            ))),
        }
    }
}

fn picture_not_found(filename: &str) -> DomainError {
    DomainError::not_found(format!("Picture '{}' not found", filename))
}
