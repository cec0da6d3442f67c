//! Runtime configuration.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (include_str! from storybook.toml)
//! - ~/.config/storybook/storybook.toml
//! - ./storybook.toml
//! - A file passed explicitly (`--config`)

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storybook_error::{ConfigError, StorybookError, StorybookResult};
use storybook_models::RetryPolicy;
use tracing::{debug, instrument};

/// Bundled default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../storybook.toml");

/// Which hosted model to call and where.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Model identifier, e.g. `distilgpt2`
    pub model: String,
    /// Inference endpoint prefix; the model id is appended
    pub base_url: String,
}

/// Where run artifacts are written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory for scene images and the document
    pub directory: PathBuf,
    /// File name of the assembled document
    pub document_name: String,
}

/// Top-level Storybook configuration.
///
/// # Example
///
/// ```no_run
/// use storybook::StorybookConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StorybookConfig::load()?;
/// println!("Text model: {}", config.text.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorybookConfig {
    /// Text-generation model
    pub text: ModelConfig,
    /// Text-to-image model
    pub image: ModelConfig,
    /// Output locations
    pub output: OutputConfig,
    /// Transport retry overrides
    #[serde(default)]
    pub retry: RetryPolicy,
}

impl StorybookConfig {
    /// Load configuration from a specific file path only.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> StorybookResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                StorybookError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StorybookError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load the bundled defaults merged with the user's config files.
    ///
    /// User config files are optional and silently skipped if absent.
    pub fn load() -> StorybookResult<Self> {
        Self::load_with_override(None)
    }

    /// Like [`load`](Self::load), with `explicit` (if given) applied last.
    ///
    /// Unlike the user files, an explicit file must exist.
    #[instrument]
    pub fn load_with_override(explicit: Option<&Path>) -> StorybookResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storybook/storybook.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storybook").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .build()
            .map_err(|e| {
                StorybookError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StorybookError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Parse the bundled defaults alone.
    pub fn bundled() -> StorybookResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| {
                StorybookError::from(ConfigError::new(format!(
                    "Bundled configuration is invalid: {}",
                    e
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults() {
        let config = StorybookConfig::bundled().unwrap();

        assert_eq!(config.text.model, "distilgpt2");
        assert_eq!(config.image.model, "stabilityai/stable-diffusion-2-base");
        assert_eq!(config.output.document_name, "storybook.md");
        assert!(!config.retry.disabled);
        assert_eq!(config.retry.max_retries, None);
    }
}
