//! Filesystem-based scene image storage.

use crate::SceneImageStore;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use storybook_core::{GeneratedImage, ImageFormat, ImageReference};
use storybook_error::{StorageError, StorageErrorKind, StorybookResult};

/// Filesystem storage backend.
///
/// Stores one file per scene directly under the base directory:
///
/// ```text
/// ./storybook/
/// ├── scene_1.png
/// ├── scene_2.png
/// └── scene_3.jpg
/// ```
///
/// Writes go to a temporary file that is renamed into place, so a reader
/// never observes a partially written image.
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    base_path: PathBuf,
}

impl FileSystemStorage {
    /// Create a new filesystem storage backend.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> StorybookResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %base_path.display(), "Opened filesystem storage");
        Ok(Self { base_path })
    }

    /// Root directory of this store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path at which the image for `scene_number` is stored.
    pub fn scene_path(&self, scene_number: u32, format: ImageFormat) -> PathBuf {
        self.base_path
            .join(format!("scene_{}.{}", scene_number, format.extension()))
    }

    /// Compute SHA-256 hash of data.
    fn compute_hash(data: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data);
        format!("{:x}", hasher.finalize())
    }
}

#[async_trait::async_trait]
impl SceneImageStore for FileSystemStorage {
    #[tracing::instrument(skip(self, image), fields(size = image.len(), format = %image.format()))]
    async fn store_scene_image(
        &self,
        scene_number: u32,
        image: &GeneratedImage,
    ) -> StorybookResult<ImageReference> {
        let path = self.scene_path(scene_number, *image.format());
        let hash = Self::compute_hash(image.data());

        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, image.data())
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    temp_path.display(),
                    e
                )))
            })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(
            scene = scene_number,
            path = %path.display(),
            hash = %hash,
            "Saved scene image"
        );

        Ok(ImageReference::new(
            path,
            *image.format(),
            hash,
            image.len() as u64,
        ))
    }

    #[tracing::instrument(skip(self, reference), fields(path = %reference.path().display()))]
    async fn retrieve(&self, reference: &ImageReference) -> StorybookResult<Vec<u8>> {
        let path = reference.path();

        let data = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        let actual = Self::compute_hash(&data);
        if actual != *reference.content_hash() {
            return Err(StorageError::new(StorageErrorKind::HashMismatch(format!(
                "expected {}, got {}",
                reference.content_hash(),
                actual
            )))
            .into());
        }

        tracing::debug!(path = %path.display(), size = data.len(), "Retrieved scene image");
        Ok(data)
    }

    async fn exists(&self, reference: &ImageReference) -> StorybookResult<bool> {
        Ok(tokio::fs::try_exists(reference.path())
            .await
            .unwrap_or(false))
    }
}
