//! Storybook generation command handler.

use super::commands::GenerateArgs;
use super::input::collect_request;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use storybook::{
    DocumentAssembler, FileSystemStorage, HuggingFaceImageDriver, HuggingFaceTextDriver,
    MarkdownAssembler, SceneObserver, ScenePipeline, SceneResult, StoryRequest,
    StorybookConfig, StorybookResult,
};
use tracing::{info, instrument};

/// Prints per-scene progress to stdout.
struct ConsoleProgress;

impl SceneObserver for ConsoleProgress {
    fn scene_started(&self, scene_number: u32, total: u32) {
        println!("Generating Scene {} of {}...", scene_number, total);
    }

    fn scene_completed(&self, scene: &SceneResult, _total: u32) {
        let illustrated = if scene.has_image() { "" } else { " (no illustration)" };
        println!("Scene {} complete{}", scene.scene_number(), illustrated);
    }
}

/// Everything a run needs, built before any model is called.
struct PreparedRun {
    text: HuggingFaceTextDriver,
    image: HuggingFaceImageDriver,
    storage: FileSystemStorage,
    request: StoryRequest,
    output_dir: PathBuf,
}

/// Build the drivers and storage, then ask on `input` for missing story details.
///
/// Drivers come first so a missing API token fails before any prompt is shown.
fn prepare_run<R: BufRead, W: Write>(
    args: &GenerateArgs,
    config: &StorybookConfig,
    input: &mut R,
    output: &mut W,
) -> StorybookResult<PreparedRun> {
    let text = HuggingFaceTextDriver::new(&config.text.model)?
        .with_base_url(config.text.base_url.as_str())
        .with_retry_policy(config.retry);
    let image = HuggingFaceImageDriver::new(&config.image.model)?
        .with_base_url(config.image.base_url.as_str())
        .with_retry_policy(config.retry);

    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.output.directory.clone());
    let storage = FileSystemStorage::new(&output_dir)?;
    info!(output = %output_dir.display(), "Using output directory");

    let request = collect_request(&args.story, input, output)?;

    Ok(PreparedRun {
        text,
        image,
        storage,
        request,
        output_dir,
    })
}

/// Run a full storybook generation and return the document path.
///
/// Loads configuration, asks for any story details not given as flags,
/// generates every scene and assembles the document.
#[instrument(skip_all)]
pub async fn generate_storybook(
    args: &GenerateArgs,
    config_path: Option<&Path>,
) -> StorybookResult<PathBuf> {
    let config = StorybookConfig::load_with_override(config_path)?;

    println!("=== AI Storybook Generator ===");
    let PreparedRun {
        text,
        image,
        storage,
        request,
        output_dir,
    } = {
        let stdin = std::io::stdin();
        prepare_run(args, &config, &mut stdin.lock(), &mut std::io::stdout())?
    };

    println!("\nGenerating {} scenes...", request.scene_count());
    let mut pipeline = ScenePipeline::new(text, image, storage).with_observer(ConsoleProgress);
    let execution = pipeline.run(&request).await?;

    println!("Creating storybook...");
    let path = MarkdownAssembler::new()
        .with_file_name(config.output.document_name.as_str())
        .assemble(&execution, &output_dir)
        .await?;

    println!("Storybook generated successfully: {}", path.display());
    Ok(path)
}
