//! Image generation failures.
//!
//! The image adapter reports every failure through [`ImageGenerationError`].
//! The scene pipeline treats this type as recoverable: the scene continues
//! without an illustration.

use crate::RetryableError;
use crate::retry::{is_transient_status, status_strategy_params};

/// Image generation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ImageGenerationErrorKind {
    /// Transport-level failure before a response was received
    #[display("Image request failed: {}", _0)]
    Http(String),

    /// Provider returned a non-success status
    #[display("Image API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Provider answered with something that is not an image
    #[display("Unexpected image response: {}", _0)]
    InvalidResponse(String),

    /// Provider answered with zero bytes
    #[display("Image response was empty")]
    EmptyImage,

    /// Backend cannot serve requests at all
    #[display("Image backend unavailable: {}", _0)]
    Unavailable(String),
}

impl ImageGenerationErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            ImageGenerationErrorKind::Api { status, .. } => is_transient_status(*status),
            ImageGenerationErrorKind::Http(_) => true,
            _ => false,
        }
    }

    /// Get retry strategy parameters for this error type.
    pub fn retry_strategy_params(&self) -> (u64, usize, u64) {
        match self {
            ImageGenerationErrorKind::Api { status, .. } => status_strategy_params(*status),
            ImageGenerationErrorKind::Http(_) => (1000, 3, 10),
            _ => (2000, 5, 60),
        }
    }
}

/// Image generation error with location tracking.
///
/// # Examples
///
/// ```
/// use storybook_error::{ImageGenerationError, ImageGenerationErrorKind};
///
/// let err = ImageGenerationError::new(ImageGenerationErrorKind::EmptyImage);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Generation Error: {} at line {} in {}", kind, line, file)]
pub struct ImageGenerationError {
    /// The kind of error that occurred
    pub kind: ImageGenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageGenerationError {
    /// Create a new image generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageGenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl RetryableError for ImageGenerationError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    fn retry_strategy_params(&self) -> (u64, usize, u64) {
        self.kind.retry_strategy_params()
    }
}
