//! HuggingFace text-generation driver.

use super::{API_TOKEN_VAR, DEFAULT_BASE_URL, TextGenerationPayload};
use crate::RetryPolicy;
use async_trait::async_trait;
use reqwest::Client;
use storybook_core::TextGenerationOptions;
use storybook_error::{ModelsError, ModelsErrorKind, ModelsResult, StorybookResult};
use storybook_interface::TextSynthesizer;
use tracing::{debug, error, instrument};

/// HuggingFace Inference API text-generation driver.
#[derive(Debug, Clone)]
pub struct HuggingFaceTextDriver {
    client: Client,
    api_token: String,
    model: String,
    base_url: String,
    retry: RetryPolicy,
}

impl HuggingFaceTextDriver {
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
        debug!(model, "Created HuggingFace text driver");

        Self {
            client: Client::new(),
            api_token: api_token.into(),
            model: model.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            retry: RetryPolicy::default(),
        }
    }

    /// Point the driver at a different endpoint (dedicated endpoint, proxy, test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the transport retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn request_once(&self, payload: &TextGenerationPayload) -> ModelsResult<String> {
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
                ModelsError::new(ModelsErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, error = %message, "API error");
            return Err(ModelsError::new(ModelsErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let body = response.text().await.map_err(|e| {
            ModelsError::new(ModelsErrorKind::Http(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        parse_generated_text(&body, payload.inputs())
    }
}

/// Parse a raw response body and pull out the completion.
fn parse_generated_text(body: &str, prompt: &str) -> ModelsResult<String> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        ModelsError::new(ModelsErrorKind::ResponseConversion(format!(
            "Failed to parse JSON: {}",
            e
        )))
    })?;

    extract_generated_text(&value, prompt)
}

/// Pull the completion out of a text-generation response.
///
/// The endpoint answers either `[{"generated_text": ...}]` or
/// `{"generated_text": ...}`. Some backends ignore `return_full_text`, so a
/// leading copy of the prompt is removed.
fn extract_generated_text(body: &serde_json::Value, prompt: &str) -> ModelsResult<String> {
    let entry = match body.as_array() {
        Some(array) => array.first().ok_or_else(|| {
            ModelsError::new(ModelsErrorKind::ResponseConversion(
                "Empty array response".to_string(),
            ))
        })?,
        None => body,
    };

    let text = entry
        .get("generated_text")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            ModelsError::new(ModelsErrorKind::ResponseConversion(
                "Missing generated_text in response".to_string(),
            ))
        })?;

    Ok(text.strip_prefix(prompt).unwrap_or(text).to_string())
}

#[async_trait]
impl TextSynthesizer for HuggingFaceTextDriver {
    #[instrument(skip(self, prompt, options), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate(
        &self,
        prompt: &str,
        options: &TextGenerationOptions,
    ) -> StorybookResult<String> {
        let payload = TextGenerationPayload::new(prompt, options);
        let text = self.retry.run(|| self.request_once(&payload)).await?;

        debug!(response_len = text.len(), "Received completion");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "huggingface"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
