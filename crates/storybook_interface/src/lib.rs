//! Trait definitions for the Storybook illustrated story generator.
//!
//! This crate defines the narrow contracts the scene pipeline consumes:
//! text synthesis, image synthesis and document assembly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod story;
mod traits;

pub use story::StoryExecution;
pub use traits::{DocumentAssembler, ImageSynthesizer, TextSynthesizer};
