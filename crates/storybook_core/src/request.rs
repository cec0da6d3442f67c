//! Story request collected once per run.

use serde::{Deserialize, Serialize};
use storybook_error::{PipelineError, PipelineErrorKind};

/// Everything the scene pipeline needs to know about the story to write.
///
/// Immutable for the duration of a run. Built through [`StoryRequestBuilder`],
/// which rejects a zero scene count.
///
/// # Examples
///
/// ```
/// use storybook_core::StoryRequest;
///
/// let request = StoryRequest::builder()
///     .story_idea("A lighthouse keeper befriends a storm")
///     .genre("fantasy")
///     .audience("kids")
///     .tone("lighthearted")
///     .scene_count(3u32)
///     .art_style("watercolor")
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.scene_count(), 3);
/// assert_eq!(request.genre(), "fantasy");
///
/// let empty = StoryRequest::builder()
///     .story_idea("")
///     .genre("")
///     .audience("")
///     .tone("")
///     .scene_count(0u32)
///     .art_style("")
///     .build();
/// assert!(empty.is_err());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct StoryRequest {
    /// Free-text premise of the story
    story_idea: String,
    /// Genre, e.g. fantasy, sci-fi, mystery, comedy
    genre: String,
    /// Intended audience, e.g. kids, teens, adults
    audience: String,
    /// Tone, e.g. dark, lighthearted, epic
    tone: String,
    /// Number of scenes to generate (at least one)
    scene_count: u32,
    /// Illustration style, e.g. watercolor or anime
    art_style: String,
}

impl StoryRequest {
    /// Creates a new request builder.
    pub fn builder() -> StoryRequestBuilder {
        StoryRequestBuilder::default()
    }
}

impl StoryRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.scene_count {
            Some(0) => Err("scene_count must be at least 1".to_string()),
            _ => Ok(()),
        }
    }
}

/// Parse a user-supplied scene count.
///
/// Surrounding whitespace is ignored. Anything that is not a positive
/// integer is a fatal configuration error for the run.
///
/// # Examples
///
/// ```
/// use storybook_core::parse_scene_count;
///
/// assert_eq!(parse_scene_count(" 4\n").unwrap(), 4);
/// assert!(parse_scene_count("four").is_err());
/// assert!(parse_scene_count("0").is_err());
/// ```
pub fn parse_scene_count(input: &str) -> Result<u32, PipelineError> {
    let trimmed = input.trim();
    let count: u32 = trimmed.parse().map_err(|e| {
        PipelineError::new(PipelineErrorKind::InvalidSceneCount(format!(
            "'{}' is not a number: {}",
            trimmed, e
        )))
    })?;

    if count == 0 {
        return Err(PipelineError::new(PipelineErrorKind::InvalidSceneCount(
            "at least one scene is required".to_string(),
        )));
    }

    Ok(count)
}
