//! Image types exchanged between the image adapter, storage and documents.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default output height in pixels.
const DEFAULT_HEIGHT: u32 = 256;
/// Default output width in pixels.
const DEFAULT_WIDTH: u32 = 256;
/// Default number of denoising steps.
const DEFAULT_STEPS: u32 = 20;

/// Fixed parameters sent to the image synthesizer.
///
/// These are not user-tunable; `Default` is the only supported configuration
/// for a storybook run.
///
/// # Examples
///
/// ```
/// use storybook_core::ImageGenerationParams;
///
/// let params = ImageGenerationParams::default();
/// assert_eq!((*params.width(), *params.height(), *params.steps()), (256, 256, 20));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct ImageGenerationParams {
    /// Output height in pixels
    height: u32,
    /// Output width in pixels
    width: u32,
    /// Number of inference steps
    steps: u32,
}

impl Default for ImageGenerationParams {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            steps: DEFAULT_STEPS,
        }
    }
}

/// Raster formats a scene image can be persisted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ImageFormat {
    /// Portable Network Graphics
    #[display("png")]
    Png,
    /// JPEG
    #[display("jpg")]
    Jpeg,
    /// WebP
    #[display("webp")]
    Webp,
}

impl ImageFormat {
    /// Detect the format from a MIME type, ignoring parameters such as `; charset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use storybook_core::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_mime("image/jpeg"), Some(ImageFormat::Jpeg));
    /// assert_eq!(ImageFormat::from_mime("text/html"), None);
    /// ```
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "image/png" => Some(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Webp => "webp",
        }
    }
}

/// A raster image returned by the image synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GeneratedImage {
    /// Encoding of `data`
    format: ImageFormat,
    /// Encoded image bytes
    data: Vec<u8>,
}

impl GeneratedImage {
    /// Wrap encoded image bytes.
    pub fn new(format: ImageFormat, data: Vec<u8>) -> Self {
        Self { format, data }
    }

    /// Size of the encoded image in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the image carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Stable reference to a persisted scene image.
///
/// Produced by the scene image store and read back by the document assembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ImageReference {
    /// Location of the image file
    path: PathBuf,
    /// Encoding of the stored image
    format: ImageFormat,
    /// SHA-256 of the stored bytes, lowercase hex
    content_hash: String,
    /// Size of the stored image in bytes
    size_bytes: u64,
}

impl ImageReference {
    /// Create a reference to an image that has been written to `path`.
    pub fn new(
        path: impl Into<PathBuf>,
        format: ImageFormat,
        content_hash: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            path: path.into(),
            format,
            content_hash: content_hash.into(),
            size_bytes,
        }
    }
}
