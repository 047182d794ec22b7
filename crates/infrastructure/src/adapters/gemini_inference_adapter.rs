//! Gemini adapter - Implements InferencePort using ai_core

use ai_core::{GeminiClient, GenerationConfig, GenerationRequest, TextGenerator};
use application::error::ApplicationError;
use application::ports::InferencePort;
use async_trait::async_trait;
use tracing::instrument;

/// Adapter for LLM text generation via Gemini
#[derive(Debug)]
pub struct GeminiInferenceAdapter {
    client: GeminiClient,
}

impl GeminiInferenceAdapter {
    /// Create the adapter around an existing client
    pub const fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Create the adapter from a client configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn from_config(config: GenerationConfig) -> Result<Self, ApplicationError> {
        let client = GeminiClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl InferencePort for GeminiInferenceAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String, ApplicationError> {
        let response = self
            .client
            .generate(GenerationRequest::simple(prompt))
            .await
            .map_err(|e| ApplicationError::ExternalService(e.to_string()))?;

        Ok(response.content)
    }
}
