//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Storybook - illustrated multi-scene stories from a text model and an image model
#[derive(Parser, Debug)]
#[command(name = "storybook")]
#[command(about = "Generate illustrated multi-scene storybooks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Extra configuration file, applied after the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a storybook; missing story details are asked for interactively
    Generate(GenerateArgs),

    /// Print the narrative and image prompts for a scene without calling any model
    Prompt(PromptArgs),
}

/// Story details. Any value left out is prompted for on stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct StoryArgs {
    /// Story idea
    #[arg(long)]
    pub idea: Option<String>,

    /// Genre (fantasy/sci-fi/mystery/comedy)
    #[arg(long)]
    pub genre: Option<String>,

    /// Tone (dark/lighthearted/epic)
    #[arg(long)]
    pub tone: Option<String>,

    /// Audience (kids/teens/adults)
    #[arg(long)]
    pub audience: Option<String>,

    /// Number of scenes
    #[arg(long)]
    pub scenes: Option<String>,

    /// Art style (realistic/cartoon/anime/watercolor/digital painting)
    #[arg(long)]
    pub art_style: Option<String>,
}

/// Arguments for `generate`
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Story details
    #[command(flatten)]
    pub story: StoryArgs,

    /// Output directory (overrides configuration)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `prompt`
#[derive(Args, Debug, Clone)]
pub struct PromptArgs {
    /// Story details
    #[command(flatten)]
    pub story: StoryArgs,

    /// Scene to build prompts for
    #[arg(long, default_value_t = 1)]
    pub scene: u32,

    /// Previous scene summary (defaults to the opening context)
    #[arg(long)]
    pub context: Option<String>,

    /// Scene text to derive the image prompt from
    #[arg(long)]
    pub scene_text: Option<String>,
}
