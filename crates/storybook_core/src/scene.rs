//! Per-scene output of the pipeline.

use crate::ImageReference;
use serde::{Deserialize, Serialize};

/// One generated scene: its number, sanitized prose and optional illustration.
///
/// Created once by the scene pipeline and never modified afterwards.
///
/// # Examples
///
/// ```
/// use storybook_core::SceneResult;
///
/// let scene = SceneResult::new(1, "The dragon flew over the mountains.", None);
/// assert_eq!(*scene.scene_number(), 1);
/// assert!(!scene.has_image());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SceneResult {
    /// 1-based position of the scene in the story
    scene_number: u32,
    /// Sanitized scene prose
    text: String,
    /// Persisted illustration, absent if image generation failed
    image: Option<ImageReference>,
}

impl SceneResult {
    /// Create a scene result.
    pub fn new(scene_number: u32, text: impl Into<String>, image: Option<ImageReference>) -> Self {
        Self {
            scene_number,
            text: text.into(),
            image,
        }
    }

    /// Whether an illustration was generated and stored for this scene.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
