//! Mock adapters for pipeline tests.
//!
//! Every mock shares its call log through an `Arc`, so a test can keep a
//! handle after moving the mock into a pipeline.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use storybook_core::{
    GeneratedImage, ImageFormat, ImageGenerationParams, ImageReference, SceneResult,
    TextGenerationOptions,
};
use storybook_error::{
    HttpError, ImageGenerationError, ImageGenerationErrorKind, StorageError, StorageErrorKind,
    StorybookResult,
};
use storybook_interface::{ImageSynthesizer, TextSynthesizer};
use storybook_narrative::SceneObserver;
use storybook_storage::SceneImageStore;

/// Text synthesizer that replays scripted responses and records prompts.
///
/// `Err` entries are returned as HTTP errors. Once the script is exhausted
/// the last entry is repeated.
#[derive(Clone)]
pub struct MockTextSynthesizer {
    script: Arc<Mutex<VecDeque<Result<String, String>>>>,
    last: Arc<Mutex<Option<Result<String, String>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    options: Arc<Mutex<Vec<TextGenerationOptions>>>,
}

impl MockTextSynthesizer {
    /// Replay `responses` in order.
    pub fn scripted(responses: Vec<Result<String, String>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(responses.into())),
            last: Arc::new(Mutex::new(None)),
            prompts: Arc::new(Mutex::new(Vec::new())),
            options: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always answer with `text`.
    pub fn always(text: &str) -> Self {
        Self::scripted(vec![Ok(text.to_string())])
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Sampling options received with each call.
    pub fn received_options(&self) -> Vec<TextGenerationOptions> {
        self.options.lock().unwrap().clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextSynthesizer for MockTextSynthesizer {
    async fn generate(
        &self,
        prompt: &str,
        options: &TextGenerationOptions,
    ) -> StorybookResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.options.lock().unwrap().push(*options);

        let next = self.script.lock().unwrap().pop_front();
        let response = match next {
            Some(response) => {
                *self.last.lock().unwrap() = Some(response.clone());
                response
            }
            None => self
                .last
                .lock()
                .unwrap()
                .clone()
                .unwrap_or_else(|| Ok(String::new())),
        };

        response.map_err(|message| HttpError::new(message).into())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-text"
    }
}

/// How the mock image synthesizer answers.
#[derive(Debug, Clone)]
pub enum ImageBehavior {
    /// Return a small PNG for every prompt
    Succeed,
    /// Fail every call
    AlwaysFail,
    /// Fail only for the listed call numbers (1-based)
    FailOn(Vec<usize>),
}

/// Image synthesizer with scripted failures that records prompts.
#[derive(Clone)]
pub struct MockImageSynthesizer {
    behavior: ImageBehavior,
    prompts: Arc<Mutex<Vec<String>>>,
    params: Arc<Mutex<Vec<ImageGenerationParams>>>,
}

impl MockImageSynthesizer {
    /// Create a mock with the given behavior.
    pub fn new(behavior: ImageBehavior) -> Self {
        Self {
            behavior,
            prompts: Arc::new(Mutex::new(Vec::new())),
            params: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Size and step parameters received with each call.
    pub fn received_params(&self) -> Vec<ImageGenerationParams> {
        self.params.lock().unwrap().clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageSynthesizer for MockImageSynthesizer {
    async fn generate(
        &self,
        prompt: &str,
        params: &ImageGenerationParams,
    ) -> Result<GeneratedImage, ImageGenerationError> {
        self.params.lock().unwrap().push(*params);
        let call = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len()
        };

        let fail = match &self.behavior {
            ImageBehavior::Succeed => false,
            ImageBehavior::AlwaysFail => true,
            ImageBehavior::FailOn(calls) => calls.contains(&call),
        };

        if fail {
            Err(ImageGenerationError::new(
                ImageGenerationErrorKind::Unavailable("mock backend offline".to_string()),
            ))
        } else {
            Ok(GeneratedImage::new(
                ImageFormat::Png,
                vec![0x89, b'P', b'N', b'G', call as u8],
            ))
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-image"
    }
}

/// Scene image store that keeps images in memory.
#[derive(Clone, Default)]
pub struct InMemoryImageStore {
    images: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    fail_writes: bool,
}

impl InMemoryImageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Number of stored images.
    pub fn len(&self) -> usize {
        self.images.lock().unwrap().len()
    }
}

#[async_trait]
impl SceneImageStore for InMemoryImageStore {
    async fn store_scene_image(
        &self,
        scene_number: u32,
        image: &GeneratedImage,
    ) -> StorybookResult<ImageReference> {
        if self.fail_writes {
            return Err(StorageError::new(StorageErrorKind::FileWrite("disk full".to_string())).into());
        }

        let path = PathBuf::from(format!(
            "scene_{}.{}",
            scene_number,
            image.format().extension()
        ));
        self.images
            .lock()
            .unwrap()
            .insert(path.clone(), image.data().clone());

        Ok(ImageReference::new(
            path,
            *image.format(),
            format!("hash-{}", scene_number),
            image.len() as u64,
        ))
    }

    async fn retrieve(&self, reference: &ImageReference) -> StorybookResult<Vec<u8>> {
        self.images
            .lock()
            .unwrap()
            .get(reference.path())
            .cloned()
            .ok_or_else(|| {
                StorageError::new(StorageErrorKind::NotFound(
                    reference.path().display().to_string(),
                ))
                .into()
            })
    }

    async fn exists(&self, reference: &ImageReference) -> StorybookResult<bool> {
        Ok(self.images.lock().unwrap().contains_key(reference.path()))
    }
}

/// Observer that records every event it sees.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingObserver {
    /// Events seen so far, as `started:<n>/<total>` or `completed:<n>/<total>`.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl SceneObserver for RecordingObserver {
    fn scene_started(&self, scene_number: u32, total: u32) {
        self.events
            .lock()
            .unwrap()
            .push(format!("started:{}/{}", scene_number, total));
    }

    fn scene_completed(&self, scene: &SceneResult, total: u32) {
        self.events
            .lock()
            .unwrap()
            .push(format!("completed:{}/{}", scene.scene_number(), total));
    }
}
