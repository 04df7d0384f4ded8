//! Gemini REST client.

use crate::gemini::conversion::{extract_text, to_gemini_request};
use crate::gemini::{GenerateContentResponse, GenerationConfig};
use async_trait::async_trait;
use figtales_config::CompletionConfig;
use figtales_core::GenerationRequest;
use figtales_error::{CompletionError, CompletionErrorKind};
use figtales_interface::CompletionService;
use reqwest::Client;
use tracing::{debug, instrument};

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Google Gemini client for `generateContent`.
///
/// Requests are sent once; failures are not retried.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    generation_config: GenerationConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("generation_config", &self.generation_config)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Client for `model` with the default endpoint and sampling parameters.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            generation_config: GenerationConfig::default(),
        }
    }

    /// Client configured from `[completion]`, reading the API key from the environment.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when the configured variable is unset or empty.
    #[instrument(skip_all, fields(model = %config.model, api_key_env = %config.api_key_env))]
    pub fn from_config(config: &CompletionConfig) -> Result<Self, CompletionError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                CompletionError::new(CompletionErrorKind::MissingApiKey(config.api_key_env.clone()))
            })?;

        Ok(Self::new(api_key, config.model.clone())
            .with_endpoint(config.endpoint.clone())
            .with_generation_config(GenerationConfig::new(
                config.temperature,
                config.top_k,
                config.top_p,
                config.max_output_tokens,
            )))
    }

    /// Use a different base URL, e.g. a local stand-in.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Use different sampling parameters.
    pub fn with_generation_config(mut self, generation_config: GenerationConfig) -> Self {
        self.generation_config = generation_config;
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl CompletionService for GeminiClient {
    #[instrument(skip(self, req), fields(model = %self.model, images = req.images().len()))]
    async fn complete(&self, req: &GenerationRequest) -> Result<String, CompletionError> {
        let body = to_gemini_request(req, self.generation_config)?;

        let url = self.url();
        debug!(url = %url, "Sending Gemini generateContent request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::new(CompletionErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "Gemini API error");
            return Err(CompletionError::new(CompletionErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message,
            }));
        }

        let envelope: GenerateContentResponse = response.json().await.map_err(|e| {
            CompletionError::new(CompletionErrorKind::MalformedResponse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        let text = extract_text(&envelope)?;
        debug!(text_len = text.len(), "Received generated text");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
