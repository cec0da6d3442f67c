//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storybook binary.

mod commands;
mod generate;
mod input;
mod prompt;

pub use commands::{Cli, Commands};
pub use generate::generate_storybook;
pub use prompt::preview_prompts;
