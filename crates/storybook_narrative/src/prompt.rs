//! Prompt construction for the text and image models.

use storybook_core::StoryRequest;

/// Maximum number of scene-text characters carried into an image prompt.
pub const IMAGE_PROMPT_CHARS: usize = 100;

/// Build the prompt that asks the text model for scene `scene_number`.
///
/// `context` is the rolling summary of the previous scene. Empty request
/// fields produce an odd but valid prompt.
///
/// # Examples
///
/// ```
/// use storybook_core::StoryRequest;
/// use storybook_narrative::build_narrative_prompt;
///
/// let request = StoryRequest::builder()
///     .story_idea("A lighthouse keeper finds a map")
///     .genre("mystery")
///     .audience("teens")
///     .tone("dark")
///     .scene_count(2u32)
///     .art_style("watercolor")
///     .build()
///     .unwrap();
///
/// let prompt = build_narrative_prompt(1, "This is the beginning of the story", &request);
/// assert!(prompt.starts_with("Write Scene 1 of a mystery story for teens with dark tone."));
/// assert!(prompt.ends_with("Scene 1:"));
/// ```
pub fn build_narrative_prompt(scene_number: u32, context: &str, request: &StoryRequest) -> String {
    format!(
        "Write Scene {n} of a {genre} story for {audience} with {tone} tone.\n\
         Story idea: {idea}\n\
         Previous scene summary: {context}\n\
         Scene {n}:",
        n = scene_number,
        genre = request.genre(),
        audience = request.audience(),
        tone = request.tone(),
        idea = request.story_idea(),
        context = context,
    )
}

/// Build the image prompt for a sanitized scene text.
///
/// Takes at most [`IMAGE_PROMPT_CHARS`] characters of `scene_text`, trims
/// them, and appends the style suffix.
///
/// # Examples
///
/// ```
/// use storybook_narrative::build_image_prompt;
///
/// let prompt = build_image_prompt("The dragon slept.", "anime");
/// assert_eq!(prompt, "The dragon slept.. Illustration, anime style.");
/// ```
pub fn build_image_prompt(scene_text: &str, art_style: &str) -> String {
    let head: String = scene_text.chars().take(IMAGE_PROMPT_CHARS).collect();
    format!("{}. Illustration, {} style.", head.trim(), art_style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> StoryRequest {
        StoryRequest::builder()
            .story_idea("A robot learns to paint")
            .genre("sci-fi")
            .audience("kids")
            .tone("lighthearted")
            .scene_count(3u32)
            .art_style("cartoon")
            .build()
            .unwrap()
    }

    #[test]
    fn test_narrative_prompt_layout() {
        let prompt = build_narrative_prompt(2, "The robot found a brush.", &request());
        assert_eq!(
            prompt,
            "Write Scene 2 of a sci-fi story for kids with lighthearted tone.\n\
             Story idea: A robot learns to paint\n\
             Previous scene summary: The robot found a brush.\n\
             Scene 2:"
        );
    }

    #[test]
    fn test_narrative_prompt_with_empty_fields() {
        let request = StoryRequest::builder()
            .story_idea("")
            .genre("")
            .audience("")
            .tone("")
            .scene_count(1u32)
            .art_style("")
            .build()
            .unwrap();

        let prompt = build_narrative_prompt(1, "", &request);
        assert!(prompt.starts_with("Write Scene 1 of a  story for  with  tone."));
        assert!(prompt.contains("Previous scene summary: \n"));
    }

    #[test]
    fn test_image_prompt_truncates_long_text() {
        let text = "a".repeat(250);
        let prompt = build_image_prompt(&text, "watercolor");
        let suffix = ". Illustration, watercolor style.";

        assert!(prompt.ends_with(suffix));
        assert_eq!(prompt.len() - suffix.len(), IMAGE_PROMPT_CHARS);
    }

    #[test]
    fn test_image_prompt_trims_after_truncation() {
        let text = format!("{}   and more words follow here", "x".repeat(98));
        let prompt = build_image_prompt(&text, "anime");
        assert_eq!(prompt, format!("{}. Illustration, anime style.", "x".repeat(98)));
    }

    #[test]
    fn test_image_prompt_counts_characters_not_bytes() {
        let text = "é".repeat(150);
        let prompt = build_image_prompt(&text, "digital painting");
        let head = prompt.trim_end_matches(". Illustration, digital painting style.");
        assert_eq!(head.chars().count(), IMAGE_PROMPT_CHARS);
    }
}
