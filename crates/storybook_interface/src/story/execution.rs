//! Story execution types.
//!
//! This module defines the data handed from the scene pipeline (in
//! storybook_narrative) to the document assembler (in storybook_document).

use serde::{Deserialize, Serialize};
use storybook_core::{SceneResult, StoryRequest};

/// Complete result of a storybook run.
///
/// `scenes` holds exactly `request.scene_count()` entries, numbered from 1
/// with no gaps, in story order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryExecution {
    /// The request the story was generated from.
    pub request: StoryRequest,

    /// Ordered scene results.
    pub scenes: Vec<SceneResult>,
}

impl StoryExecution {
    /// Number of scenes that carry an illustration.
    pub fn illustrated_scenes(&self) -> usize {
        self.scenes.iter().filter(|scene| scene.has_image()).count()
    }
}
