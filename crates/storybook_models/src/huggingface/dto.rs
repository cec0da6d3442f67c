//! HuggingFace Inference API data transfer objects.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storybook_core::{ImageGenerationParams, TextGenerationOptions};

/// Sampling parameters for the text-generation task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct TextGenerationParameters {
    /// Maximum tokens to generate
    max_new_tokens: u32,
    /// Temperature for sampling
    temperature: f32,
    /// Top-p sampling
    top_p: f32,
    /// Whether to sample or decode greedily
    do_sample: bool,
    /// Echo the prompt in the output
    return_full_text: bool,
}

impl From<&TextGenerationOptions> for TextGenerationParameters {
    // pad_token_id is a local tokenizer setting; the hosted endpoint pads on its own.
    fn from(options: &TextGenerationOptions) -> Self {
        Self {
            max_new_tokens: *options.max_new_tokens(),
            temperature: *options.temperature(),
            top_p: *options.top_p(),
            do_sample: *options.do_sample(),
            return_full_text: false,
        }
    }
}

/// Request options understood by the serverless endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceOptions {
    /// Block until a cold model is loaded instead of answering 503
    pub wait_for_model: bool,
}

/// Body of a text-generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct TextGenerationPayload {
    /// Prompt text
    inputs: String,
    /// Sampling parameters
    parameters: TextGenerationParameters,
    /// Endpoint options
    options: InferenceOptions,
}

impl TextGenerationPayload {
    /// Build the payload for `prompt`.
    pub fn new(prompt: impl Into<String>, options: &TextGenerationOptions) -> Self {
        Self {
            inputs: prompt.into(),
            parameters: options.into(),
            options: InferenceOptions {
                wait_for_model: true,
            },
        }
    }
}

/// Size and step parameters for the text-to-image task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TextToImageParameters {
    /// Output height in pixels
    height: u32,
    /// Output width in pixels
    width: u32,
    /// Number of denoising steps
    num_inference_steps: u32,
}

impl From<&ImageGenerationParams> for TextToImageParameters {
    fn from(params: &ImageGenerationParams) -> Self {
        Self {
            height: *params.height(),
            width: *params.width(),
            num_inference_steps: *params.steps(),
        }
    }
}

/// Body of a text-to-image request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct TextToImagePayload {
    /// Image prompt
    inputs: String,
    /// Size and step parameters
    parameters: TextToImageParameters,
    /// Endpoint options
    options: InferenceOptions,
}

impl TextToImagePayload {
    /// Build the payload for `prompt`.
    pub fn new(prompt: impl Into<String>, params: &ImageGenerationParams) -> Self {
        Self {
            inputs: prompt.into(),
            parameters: params.into(),
            options: InferenceOptions {
                wait_for_model: true,
            },
        }
    }
}
