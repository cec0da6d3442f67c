//! Top-level error wrapper types.

use crate::{
    ConfigError, DocumentError, HttpError, ImageGenerationError, ModelsError,
    PipelineError, StorageError,
};

/// Every error the Storybook workspace can surface.
///
/// # Examples
///
/// ```
/// use storybook_error::{StorybookError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: StorybookError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StorybookErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Text model provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Image generation error
    #[from(ImageGenerationError)]
    ImageGeneration(ImageGenerationError),
    /// Scene pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Media storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Document assembly error
    #[from(DocumentError)]
    Document(DocumentError),
}

/// Storybook error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storybook_error::{StorybookResult, ConfigError};
///
/// fn might_fail() -> StorybookResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storybook Error: {}", _0)]
pub struct StorybookError(Box<StorybookErrorKind>);

impl StorybookError {
    /// Create a new error from a kind.
    pub fn new(kind: StorybookErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorybookErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StorybookErrorKind
impl<T> From<T> for StorybookError
where
    T: Into<StorybookErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storybook operations.
pub type StorybookResult<T> = std::result::Result<T, StorybookError>;
