//! Gemini client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::ports::{GenerationRequest, GenerationResponse, TextGenerator};

/// Text generator backed by the Gemini `generateContent` API
pub struct GeminiClient {
    client: Client,
    config: GenerationConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Yatri/1.0")
            .build()
            .map_err(|e| GenerationError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.model,
            "Initialized Gemini client"
        );

        Ok(Self { client, config })
    }

    /// Build the generateContent URL for the configured model
    fn api_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Extract the generated text from a parsed response body
    ///
    /// Joins the text parts of the first candidate; an empty candidate list
    /// or contentless candidate is an invalid response.
    fn extract_text(response: RawGenerateResponse) -> Result<String, GenerationError> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::InvalidResponse("no candidates".to_string()))?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.is_empty() {
            return Err(GenerationError::InvalidResponse(
                "candidate carried no text".to_string(),
            ));
        }

        Ok(text)
    }
}

/// Gemini-format generation request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RawGenerateRequest {
    contents: Vec<RawContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<RawGenerationOptions>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawContent {
    parts: Vec<RawPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RawGenerationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

/// Gemini-format generation response body
#[derive(Debug, Deserialize)]
struct RawGenerateResponse {
    #[serde(default)]
    candidates: Vec<RawCandidate>,
}

#[derive(Debug, Deserialize)]
struct RawCandidate {
    content: RawContent,
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, request), fields(model = %self.config.model, prompt_len = request.prompt.len()))]
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let options = if request.temperature.is_none() && request.max_output_tokens.is_none() {
            None
        } else {
            Some(RawGenerationOptions {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
            })
        };

        let body = RawGenerateRequest {
            contents: vec![RawContent {
                parts: vec![RawPart {
                    text: Some(request.prompt),
                }],
            }],
            generation_config: options,
        };

        debug!("Sending generateContent request");

        let response = self
            .client
            .post(self.api_url())
            .query(&[("key", self.config.api_key.expose_secret())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else if e.is_connect() {
                    GenerationError::ConnectionFailed(e.to_string())
                } else {
                    GenerationError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Generation request failed");
            return Err(GenerationError::ServerError(format!(
                "Status {status}: {body}"
            )));
        }

        let parsed: RawGenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let content = Self::extract_text(parsed)?;

        debug!(content_len = content.len(), "Generation completed");

        Ok(GenerationResponse {
            content,
            model: self.config.model.clone(),
        })
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
