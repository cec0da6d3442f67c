//! Scene generation pipeline for Storybook.
//!
//! The [`ScenePipeline`] turns a [`StoryRequest`](storybook_core::StoryRequest)
//! into an ordered list of scenes. Each scene is written by a text model from a
//! prompt that carries a short summary of the previous scene, cleaned up by
//! [`sanitize`], and illustrated by an image model from a prompt derived from
//! the cleaned text.
//!
//! ```rust,ignore
//! use storybook_narrative::ScenePipeline;
//!
//! let mut pipeline = ScenePipeline::new(text_driver, image_driver, storage);
//! let execution = pipeline.run(&request).await?;
//! for scene in &execution.scenes {
//!     println!("Scene {}: {}", scene.scene_number(), scene.text());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod observer;
mod pipeline;
mod prompt;
mod sanitizer;
mod state;

pub use context::{CONTEXT_SEED, MAX_CONTEXT_CHARS, RollingContext};
pub use observer::SceneObserver;
pub use pipeline::ScenePipeline;
pub use prompt::{IMAGE_PROMPT_CHARS, build_image_prompt, build_narrative_prompt};
pub use sanitizer::{MIN_SCENE_CHARS, fallback_text, sanitize};
pub use state::PipelineState;
