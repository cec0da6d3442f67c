//! Core data types for the Storybook illustrated story generator.
//!
//! This crate provides the foundation data types shared by the scene pipeline,
//! the model adapters, media storage and document assembly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generation;
mod image;
mod request;
mod scene;

pub use generation::{
    DEFAULT_MAX_NEW_TOKENS, DEFAULT_PAD_TOKEN_ID, DEFAULT_TEMPERATURE, DEFAULT_TOP_P,
    TextGenerationOptions, TextGenerationOptionsBuilder,
};
pub use image::{GeneratedImage, ImageFormat, ImageGenerationParams, ImageReference};
pub use request::{StoryRequest, StoryRequestBuilder, StoryRequestBuilderError, parse_scene_count};
pub use scene::SceneResult;
