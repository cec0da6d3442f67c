//! Error types for the Storybook library.
//!
//! This crate provides the foundation error types used throughout the Storybook workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storybook_error::{StorybookResult, HttpError};
//!
//! fn fetch_scene() -> StorybookResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_scene() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod document;
mod error;
mod http;
mod image;
mod models;
mod pipeline;
mod retry;
mod storage;

pub use config::ConfigError;
pub use document::{DocumentError, DocumentErrorKind};
pub use error::{StorybookError, StorybookErrorKind, StorybookResult};
pub use http::HttpError;
pub use image::{ImageGenerationError, ImageGenerationErrorKind};
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use retry::RetryableError;
pub use storage::{StorageError, StorageErrorKind};
