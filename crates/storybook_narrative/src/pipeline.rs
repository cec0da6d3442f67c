//! The scene-by-scene generation loop.

use crate::{
    PipelineState, RollingContext, SceneObserver, build_image_prompt, build_narrative_prompt,
    sanitize,
};
use storybook_core::{
    ImageGenerationParams, ImageReference, SceneResult, StoryRequest, TextGenerationOptions,
};
use storybook_error::{PipelineError, PipelineErrorKind, StorybookResult};
use storybook_interface::{ImageSynthesizer, StoryExecution, TextSynthesizer};
use storybook_storage::SceneImageStore;
use tracing::{debug, error, info, instrument, warn};

/// Generates the scenes of a story, one after another.
///
/// Each scene goes through the same steps:
///
/// 1. Build the narrative prompt from the request and the rolling context.
/// 2. Ask the text model for a completion. Failure here ends the run.
/// 3. Sanitize the completion.
/// 4. Build the image prompt and ask the image model for an illustration.
/// 5. Persist the illustration through the scene image store.
/// 6. Record the [`SceneResult`] and replace the rolling context with the
///    tail of the new scene.
///
/// Steps 4 and 5 never fail the run: the scene is kept without an image and a
/// warning is logged.
///
/// A pipeline performs a single run. Adapters are owned, so construct them
/// once and hand them in.
pub struct ScenePipeline<T, I, S> {
    text: T,
    image: I,
    store: S,
    text_options: TextGenerationOptions,
    image_params: ImageGenerationParams,
    observer: Option<Box<dyn SceneObserver>>,
    state: PipelineState,
}

impl<T, I, S> ScenePipeline<T, I, S>
where
    T: TextSynthesizer,
    I: ImageSynthesizer,
    S: SceneImageStore,
{
    /// Create a pipeline with the default generation parameters.
    pub fn new(text: T, image: I, store: S) -> Self {
        Self {
            text,
            image,
            store,
            text_options: TextGenerationOptions::default(),
            image_params: ImageGenerationParams::default(),
            observer: None,
            state: PipelineState::NotStarted,
        }
    }

    /// Attach an observer that is told about scene progress.
    pub fn with_observer(mut self, observer: impl SceneObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// The text synthesizer in use.
    pub fn text_synthesizer(&self) -> &T {
        &self.text
    }

    /// The image synthesizer in use.
    pub fn image_synthesizer(&self) -> &I {
        &self.image
    }

    /// The scene image store in use.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generate every scene of `request`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineErrorKind::TextSynthesis`] if the text model fails on
    /// any scene; no partial result is returned. Returns
    /// [`PipelineErrorKind::InvalidSceneCount`] for a zero scene count and
    /// [`PipelineErrorKind::InvalidRequest`] if this pipeline has already run.
    #[instrument(
        skip_all,
        fields(
            scenes = request.scene_count(),
            genre = %request.genre(),
            text_model = %self.text.model_name(),
            image_model = %self.image.model_name(),
        )
    )]
    pub async fn run(&mut self, request: &StoryRequest) -> StorybookResult<StoryExecution> {
        if self.state != PipelineState::NotStarted {
            return Err(PipelineError::new(PipelineErrorKind::InvalidRequest(format!(
                "pipeline has already run (state: {})",
                self.state
            )))
            .into());
        }

        let total = *request.scene_count();
        if total == 0 {
            return Err(PipelineError::new(PipelineErrorKind::InvalidSceneCount(
                "at least one scene is required".to_string(),
            ))
            .into());
        }

        info!("Starting storybook generation");

        let mut context = RollingContext::new();
        let mut scenes = Vec::with_capacity(total as usize);

        for scene_number in 1..=total {
            self.transition(PipelineState::GeneratingScene(scene_number));
            if let Some(observer) = &self.observer {
                observer.scene_started(scene_number, total);
            }

            let scene = match self.generate_scene(scene_number, &context, request).await {
                Ok(scene) => scene,
                Err(e) => {
                    self.transition(PipelineState::Failed {
                        scene: scene_number,
                    });
                    return Err(e);
                }
            };

            context.replace_from(scene.text());
            debug!(scene = scene_number, context_chars = context.char_len(), "Context updated");

            if let Some(observer) = &self.observer {
                observer.scene_completed(&scene, total);
            }
            scenes.push(scene);
        }

        self.transition(PipelineState::Done);

        let execution = StoryExecution {
            request: request.clone(),
            scenes,
        };
        info!(
            scenes = execution.scenes.len(),
            illustrated = execution.illustrated_scenes(),
            "Storybook generation complete"
        );

        Ok(execution)
    }

    #[instrument(skip(self, context, request), fields(scene = scene_number))]
    async fn generate_scene(
        &self,
        scene_number: u32,
        context: &RollingContext,
        request: &StoryRequest,
    ) -> StorybookResult<SceneResult> {
        let prompt = build_narrative_prompt(scene_number, context.as_str(), request);
        debug!(prompt_len = prompt.len(), "Requesting scene text");

        let raw = self
            .text
            .generate(&prompt, &self.text_options)
            .await
            .map_err(|e| {
                error!(error = %e, "Text generation failed");
                PipelineError::new(PipelineErrorKind::TextSynthesis {
                    scene: scene_number,
                    message: e.to_string(),
                })
            })?;

        let text = sanitize(&raw, request.genre());
        let image_prompt = build_image_prompt(&text, request.art_style());
        let image = self.illustrate(scene_number, &image_prompt).await;

        Ok(SceneResult::new(scene_number, text, image))
    }

    /// Generate and persist the illustration for a scene, if possible.
    async fn illustrate(&self, scene_number: u32, prompt: &str) -> Option<ImageReference> {
        let image = match self.image.generate(prompt, &self.image_params).await {
            Ok(image) => image,
            Err(e) => {
                warn!(
                    scene = scene_number,
                    error = %e,
                    "Image generation failed, continuing without illustration"
                );
                return None;
            }
        };

        match self.store.store_scene_image(scene_number, &image).await {
            Ok(reference) => {
                debug!(scene = scene_number, path = %reference.path().display(), "Stored scene image");
                Some(reference)
            }
            Err(e) => {
                warn!(
                    scene = scene_number,
                    error = %e,
                    "Failed to store scene image, continuing without illustration"
                );
                None
            }
        }
    }

    fn transition(&mut self, next: PipelineState) {
        debug_assert!(
            self.state.can_transition_to(&next),
            "illegal pipeline transition {} -> {}",
            self.state,
            next
        );
        debug!(from = %self.state, to = %next, "Pipeline state change");
        self.state = next;
    }
}
