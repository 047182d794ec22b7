//! Inference port - Interface for LLM text generation

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for LLM text generation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Generate text for a single free-text instruction
    async fn generate(&self, prompt: &str) -> Result<String, ApplicationError>;
}
