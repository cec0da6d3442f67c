//! HuggingFace text-to-image driver.

use super::{API_TOKEN_VAR, DEFAULT_BASE_URL, TextToImagePayload};
use crate::RetryPolicy;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use storybook_core::{GeneratedImage, ImageFormat, ImageGenerationParams};
use storybook_error::{
    ImageGenerationError, ImageGenerationErrorKind, ModelsError, ModelsErrorKind, ModelsResult,
};
use storybook_interface::ImageSynthesizer;
use tracing::{debug, error, instrument};

/// HuggingFace Inference API text-to-image driver.
///
/// Where the model runs (GPU or CPU) is decided by the endpoint, not by
/// the caller.
#[derive(Debug, Clone)]
pub struct HuggingFaceImageDriver {
    client: Client,
    api_token: String,
    model: String,
    base_url: String,
    retry: RetryPolicy,
}

impl HuggingFaceImageDriver {
    /// Creates a new driver for `model`.
    ///
    /// Reads the API token from the `HUGGINGFACE_API_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns error if the API token is not set.
    #[instrument(skip_all, fields(model = %model.as_ref()))]
    pub fn new(model: impl AsRef<str>) -> ModelsResult<Self> {
        let api_token = std::env::var(API_TOKEN_VAR).map_err(|_| {
            ModelsError::new(ModelsErrorKind::MissingApiToken(API_TOKEN_VAR.to_string()))
        })?;

        Ok(Self::with_api_token(api_token, model.as_ref()))
    }

    /// Creates a new driver with an explicit API token.
    #[instrument(skip(api_token))]
    pub fn with_api_token(api_token: impl Into<String>, model: &str) -> Self {
        debug!(model, "Created HuggingFace image driver");

        Self {
            client: Client::new(),
            api_token: api_token.into(),
            model: model.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            retry: RetryPolicy::default(),
        }
    }

    /// Point the driver at a different endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the transport retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn request_once(
        &self,
        payload: &TextToImagePayload,
    ) -> Result<GeneratedImage, ImageGenerationError> {
        let url = format!("{}/{}", self.base_url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ImageGenerationError::new(ImageGenerationErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, error = %message, "Image API error");
            return Err(ImageGenerationError::new(ImageGenerationErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await.map_err(|e| {
            ImageGenerationError::new(ImageGenerationErrorKind::Http(format!(
                "Failed to read image body: {}",
                e
            )))
        })?;

        decode_image_response(content_type.as_deref(), bytes.to_vec())
    }
}

/// Interpret a text-to-image response body.
///
/// A missing `Content-Type` is taken to mean PNG, the endpoint's default.
fn decode_image_response(
    content_type: Option<&str>,
    data: Vec<u8>,
) -> Result<GeneratedImage, ImageGenerationError> {
    let format = match content_type {
        None => ImageFormat::Png,
        Some(mime) => ImageFormat::from_mime(mime).ok_or_else(|| {
            let preview: String = String::from_utf8_lossy(&data).chars().take(200).collect();
            ImageGenerationError::new(ImageGenerationErrorKind::InvalidResponse(format!(
                "{}: {}",
                mime, preview
            )))
        })?,
    };

    if data.is_empty() {
        return Err(ImageGenerationError::new(ImageGenerationErrorKind::EmptyImage));
    }

    Ok(GeneratedImage::new(format, data))
}

#[async_trait]
impl ImageSynthesizer for HuggingFaceImageDriver {
    #[instrument(skip(self, prompt, params), fields(model = %self.model, width = params.width(), height = params.height()))]
    async fn generate(
        &self,
        prompt: &str,
        params: &ImageGenerationParams,
    ) -> Result<GeneratedImage, ImageGenerationError> {
        let payload = TextToImagePayload::new(prompt, params);
        let image = self.retry.run(|| self.request_once(&payload)).await?;

        debug!(size = image.len(), format = %image.format(), "Received image");
        Ok(image)
    }

    fn provider_name(&self) -> &'static str {
        "huggingface"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
