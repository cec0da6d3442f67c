//! Trait definitions for inference backends and output collaborators.

use crate::StoryExecution;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use storybook_core::{GeneratedImage, ImageGenerationParams, TextGenerationOptions};
use storybook_error::{ImageGenerationError, StorybookResult};

/// Core trait that all text generation backends must implement.
///
/// Implementations are constructed once per process and shared by every
/// scene of a run. Any error returned from [`generate`](Self::generate) is
/// fatal to the run.
#[async_trait]
pub trait TextSynthesizer: Send + Sync {
    /// Generate a completion for `prompt`.
    ///
    /// Returns only the newly generated text, never the prompt itself.
    async fn generate(
        &self,
        prompt: &str,
        options: &TextGenerationOptions,
    ) -> StorybookResult<String>;

    /// Provider name (e.g., "huggingface").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "distilgpt2").
    fn model_name(&self) -> &str;
}

/// Core trait that all image generation backends must implement.
///
/// Failures are reported as [`ImageGenerationError`] and are recoverable:
/// the caller proceeds without an illustration.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    /// Render a single image for `prompt`.
    async fn generate(
        &self,
        prompt: &str,
        params: &ImageGenerationParams,
    ) -> Result<GeneratedImage, ImageGenerationError>;

    /// Provider name (e.g., "huggingface").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "stabilityai/stable-diffusion-2-base").
    fn model_name(&self) -> &str;
}

/// Turns a finished story into a paginated artifact.
#[async_trait]
pub trait DocumentAssembler: Send + Sync {
    /// Write the document for `execution` into `output_dir` and return its path.
    async fn assemble(
        &self,
        execution: &StoryExecution,
        output_dir: &Path,
    ) -> StorybookResult<PathBuf>;
}
