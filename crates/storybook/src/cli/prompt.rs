//! Prompt preview command handler.

use super::commands::PromptArgs;
use super::input::collect_request;
use storybook::{
    PipelineError, PipelineErrorKind, RollingContext, StoryRequest, StorybookResult,
    build_image_prompt, build_narrative_prompt, sanitize,
};

/// Print the prompts a run would send for one scene.
pub fn preview_prompts(args: &PromptArgs) -> StorybookResult<()> {
    let request = {
        let stdin = std::io::stdin();
        collect_request(&args.story, &mut stdin.lock(), &mut std::io::stdout())?
    };

    println!("{}", render_preview(args, &request)?);
    Ok(())
}

fn render_preview(args: &PromptArgs, request: &StoryRequest) -> StorybookResult<String> {
    if args.scene == 0 || args.scene > *request.scene_count() {
        return Err(PipelineError::new(PipelineErrorKind::InvalidSceneCount(format!(
            "scene {} is outside 1..={}",
            args.scene,
            request.scene_count()
        )))
        .into());
    }

    let mut context = RollingContext::new();
    if let Some(previous) = &args.context {
        context.replace_from(previous);
    }

    let mut out = format!(
        "--- Narrative prompt ---\n{}\n",
        build_narrative_prompt(args.scene, context.as_str(), request)
    );

    if let Some(raw) = &args.scene_text {
        let text = sanitize(raw, request.genre());
        out.push_str(&format!("\n--- Sanitized scene text ---\n{}\n", text));
        out.push_str(&format!(
            "\n--- Image prompt ---\n{}\n",
            build_image_prompt(&text, request.art_style())
        ));
    }

    Ok(out)
}
