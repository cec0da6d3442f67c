//! Sampling options for text synthesis.

use serde::{Deserialize, Serialize};

/// Default number of new tokens requested per scene.
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 200;
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.95;
/// Default nucleus sampling threshold.
pub const DEFAULT_TOP_P: f32 = 0.9;
/// End-of-text token used for padding by GPT-2 family tokenizers.
pub const DEFAULT_PAD_TOKEN_ID: u32 = 50256;

/// Options passed to a text synthesizer with every prompt.
///
/// # Examples
///
/// ```
/// use storybook_core::TextGenerationOptions;
///
/// let options = TextGenerationOptions::default();
/// assert_eq!(*options.max_new_tokens(), 200);
/// assert!(*options.do_sample());
///
/// let greedy = TextGenerationOptions::builder()
///     .do_sample(false)
///     .temperature(0.0)
///     .build()
///     .unwrap();
/// assert_eq!(*greedy.max_new_tokens(), 200);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default)]
pub struct TextGenerationOptions {
    /// Maximum number of tokens to generate beyond the prompt
    max_new_tokens: u32,
    /// Sampling temperature
    temperature: f32,
    /// Nucleus sampling probability mass
    top_p: f32,
    /// Sample instead of decoding greedily
    do_sample: bool,
    /// Token id used for padding
    pad_token_id: u32,
}

impl Default for TextGenerationOptions {
    fn default() -> Self {
        Self {
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            do_sample: true,
            pad_token_id: DEFAULT_PAD_TOKEN_ID,
        }
    }
}

impl TextGenerationOptions {
    /// Creates a new options builder.
    pub fn builder() -> TextGenerationOptionsBuilder {
        TextGenerationOptionsBuilder::default()
    }
}
