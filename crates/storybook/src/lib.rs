//! Storybook - illustrated stories from a text model and an image model.
//!
//! A story is generated scene by scene: each scene's text is written with a
//! short summary of the previous scene as context, cleaned up, illustrated,
//! and finally everything is assembled into one paginated document.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use storybook::{
//!     DocumentAssembler, FileSystemStorage, HuggingFaceImageDriver, HuggingFaceTextDriver,
//!     MarkdownAssembler, ScenePipeline, StoryRequest,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = StoryRequest::builder()
//!         .story_idea("A fox who collects lost buttons")
//!         .genre("fantasy")
//!         .audience("kids")
//!         .tone("lighthearted")
//!         .scene_count(3u32)
//!         .art_style("watercolor")
//!         .build()?;
//!
//!     let mut pipeline = ScenePipeline::new(
//!         HuggingFaceTextDriver::new("distilgpt2")?,
//!         HuggingFaceImageDriver::new("stabilityai/stable-diffusion-2-base")?,
//!         FileSystemStorage::new("storybook_output")?,
//!     );
//!     let execution = pipeline.run(&request).await?;
//!
//!     let path = MarkdownAssembler::new()
//!         .assemble(&execution, "storybook_output".as_ref())
//!         .await?;
//!     println!("Wrote {}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry span export
//! - `api` - enable tests that call the hosted models
//!
//! # Architecture
//!
//! - `storybook_error` - Error types
//! - `storybook_core` - Request, scene and image types
//! - `storybook_interface` - Synthesizer and assembler traits
//! - `storybook_storage` - Scene image storage
//! - `storybook_models` - HuggingFace text and image drivers
//! - `storybook_narrative` - Scene pipeline, prompts, sanitizer
//! - `storybook_document` - Markdown document assembly
//!
//! This crate re-exports everything for convenience.

pub use storybook_core::*;
pub use storybook_document::*;
pub use storybook_error::*;
pub use storybook_interface::*;
pub use storybook_models::*;
pub use storybook_narrative::*;
pub use storybook_storage::{FileSystemStorage, SceneImageStore};

mod config;

pub use config::{ModelConfig, OutputConfig, StorybookConfig};

#[cfg(feature = "observability")]
pub mod observability;

#[cfg(feature = "observability")]
pub use observability::{ObservabilityConfig, init_observability};
