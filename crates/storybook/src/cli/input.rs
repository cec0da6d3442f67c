//! Interactive collection of story details.

use super::commands::StoryArgs;
use std::io::{BufRead, Write};
use storybook::{
    ConfigError, PipelineError, PipelineErrorKind, StoryRequest, StorybookResult,
    parse_scene_count,
};

/// Build a [`StoryRequest`] from `args`, asking on `input` for anything missing.
///
/// Prompts are written to `output`. A missing or unparsable scene count is an
/// error; text fields may be empty.
pub fn collect_request<R: BufRead, W: Write>(
    args: &StoryArgs,
    input: &mut R,
    output: &mut W,
) -> StorybookResult<StoryRequest> {
    let story_idea = value_or_ask(&args.idea, "Enter your story idea: ", input, output)?;
    let genre = value_or_ask(
        &args.genre,
        "Genre (fantasy/sci-fi/mystery/comedy): ",
        input,
        output,
    )?;
    let tone = value_or_ask(&args.tone, "Tone (dark/lighthearted/epic): ", input, output)?;
    let audience = value_or_ask(
        &args.audience,
        "Audience (kids/teens/adults): ",
        input,
        output,
    )?;
    let scenes = value_or_ask(&args.scenes, "How many scenes (e.g. 4): ", input, output)?;
    let scene_count = parse_scene_count(&scenes)?;
    let art_style = value_or_ask(
        &args.art_style,
        "Art style (realistic/cartoon/anime/watercolor/digital painting): ",
        input,
        output,
    )?;

    StoryRequest::builder()
        .story_idea(story_idea)
        .genre(genre)
        .tone(tone)
        .audience(audience)
        .scene_count(scene_count)
        .art_style(art_style)
        .build()
        .map_err(|e| {
            PipelineError::new(PipelineErrorKind::InvalidRequest(e.to_string())).into()
        })
}

fn value_or_ask<R: BufRead, W: Write>(
    value: &Option<String>,
    question: &str,
    input: &mut R,
    output: &mut W,
) -> StorybookResult<String> {
    if let Some(value) = value {
        return Ok(value.trim().to_string());
    }

    write!(output, "{}", question)
        .and_then(|_| output.flush())
        .map_err(|e| ConfigError::new(format!("Failed to write prompt: {}", e)))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| ConfigError::new(format!("Failed to read input: {}", e)))?;
    if read == 0 {
        return Err(ConfigError::new(format!(
            "Input ended before answering: {}",
            question.trim_end()
        ))
        .into());
    }

    Ok(line.trim().to_string())
}
