//! HuggingFace Inference API integration.

mod dto;
mod image;
mod text;

pub use dto::{
    TextGenerationParameters, TextGenerationPayload,
    TextToImageParameters, TextToImagePayload,
};
pub use image::HuggingFaceImageDriver;
pub use text::HuggingFaceTextDriver;

/// Serverless Inference API endpoint; the model id is appended as a path.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Environment variable holding the API token.
pub(crate) const API_TOKEN_VAR: &str = "HUGGINGFACE_API_TOKEN";
