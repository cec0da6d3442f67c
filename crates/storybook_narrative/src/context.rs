//! Rolling summary carried from one scene to the next.

use std::fmt;

/// Text the context holds before the first scene is written.
pub const CONTEXT_SEED: &str = "This is the beginning of the story";

/// Maximum length of the context in characters.
pub const MAX_CONTEXT_CHARS: usize = 100;

/// Bounded summary of the previous scene.
///
/// The context is replaced, never appended to, so it never holds more than
/// [`MAX_CONTEXT_CHARS`] characters.
///
/// # Examples
///
/// ```
/// use storybook_narrative::{CONTEXT_SEED, RollingContext};
///
/// let mut context = RollingContext::new();
/// assert_eq!(context.as_str(), CONTEXT_SEED);
///
/// context.replace_from("The storm passed and the village woke.");
/// assert_eq!(context.as_str(), "The storm passed and the village woke.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollingContext {
    text: String,
}

impl RollingContext {
    /// A context holding the seed text.
    pub fn new() -> Self {
        Self {
            text: CONTEXT_SEED.to_string(),
        }
    }

    /// Current context text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the context with the last [`MAX_CONTEXT_CHARS`] characters of `scene_text`.
    pub fn replace_from(&mut self, scene_text: &str) {
        self.text = tail_chars(scene_text, MAX_CONTEXT_CHARS).to_string();
    }
}

impl Default for RollingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RollingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The last `n` characters of `text`, split on a character boundary.
fn tail_chars(text: &str, n: usize) -> &str {
    let count = text.chars().count();
    if count <= n {
        return text;
    }

    match text.char_indices().nth(count - n) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}
