//! Scene image storage for Storybook.
//!
//! Generated illustrations are persisted under stable, scene-numbered names
//! (`scene_<n>.<ext>`) so the document assembler can read them back by
//! reference, independent of pipeline internals.
//!
//! # Example
//!
//! ```rust
//! use storybook_core::{GeneratedImage, ImageFormat};
//! use storybook_storage::{FileSystemStorage, SceneImageStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = FileSystemStorage::new("/tmp/storybook")?;
//! let image = GeneratedImage::new(ImageFormat::Png, vec![0u8; 1024]);
//!
//! let reference = storage.store_scene_image(1, &image).await?;
//! assert!(reference.path().ends_with("scene_1.png"));
//!
//! let retrieved = storage.retrieve(&reference).await?;
//! assert_eq!(retrieved.len(), 1024);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use storybook_core::{GeneratedImage, ImageReference};
use storybook_error::StorybookResult;

mod filesystem;

pub use filesystem::FileSystemStorage;
pub use storybook_error::{StorageError, StorageErrorKind};

/// Trait for pluggable scene image backends.
#[async_trait::async_trait]
pub trait SceneImageStore: Send + Sync {
    /// Persist the illustration for `scene_number` and return its reference.
    ///
    /// Storing a second image for the same scene number replaces the first.
    async fn store_scene_image(
        &self,
        scene_number: u32,
        image: &GeneratedImage,
    ) -> StorybookResult<ImageReference>;

    /// Read back the bytes behind `reference`, verifying the content hash.
    async fn retrieve(&self, reference: &ImageReference) -> StorybookResult<Vec<u8>>;

    /// Check whether the referenced image is still present.
    async fn exists(&self, reference: &ImageReference) -> StorybookResult<bool>;
}
