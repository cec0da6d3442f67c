//! Text and image model providers for Storybook.
//!
//! # Available Providers
//!
//! - **HuggingFace Inference API** - text generation ([`HuggingFaceTextDriver`])
//!   and text-to-image ([`HuggingFaceImageDriver`])
//!
//! # Example
//!
//! ```no_run
//! use storybook_core::{ImageGenerationParams, TextGenerationOptions};
//! use storybook_interface::{ImageSynthesizer, TextSynthesizer};
//! use storybook_models::{HuggingFaceImageDriver, HuggingFaceTextDriver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = HuggingFaceTextDriver::new("distilgpt2")?;
//! let scene = text
//!     .generate("Scene 1:", &TextGenerationOptions::default())
//!     .await?;
//!
//! let images = HuggingFaceImageDriver::new("stabilityai/stable-diffusion-2-base")?;
//! let image = images
//!     .generate("A quiet harbor. Illustration, watercolor style.", &ImageGenerationParams::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod huggingface;
mod retry;

pub use huggingface::{
    DEFAULT_BASE_URL, HuggingFaceImageDriver, HuggingFaceTextDriver, TextGenerationParameters,
    TextGenerationPayload, TextToImageParameters, TextToImagePayload,
};
pub use retry::RetryPolicy;
