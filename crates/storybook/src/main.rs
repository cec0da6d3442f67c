//! Storybook CLI binary.
//!
//! - Generate an illustrated storybook from a story idea
//! - Preview the prompts sent to the models for a scene

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, generate_storybook, preview_prompts};

    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };

    #[cfg(feature = "observability")]
    let _provider = storybook::init_observability(
        storybook::ObservabilityConfig::default()
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    #[cfg(not(feature = "observability"))]
    init_tracing(log_level, cli.json_logs)?;

    match cli.command {
        Commands::Generate(args) => {
            generate_storybook(&args, cli.config.as_deref()).await?;
        }

        Commands::Prompt(args) => {
            preview_prompts(&args)?;
        }
    }

    Ok(())
}

#[cfg(not(feature = "observability"))]
fn init_tracing(default_level: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
