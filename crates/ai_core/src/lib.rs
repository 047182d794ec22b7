//! AI core - LLM text generation
//!
//! Provides the text generation abstraction for Yatri and its Gemini
//! implementation, speaking the `generateContent` REST API.

pub mod config;
pub mod error;
pub mod gemini;
pub mod ports;

pub use config::GenerationConfig;
pub use error::GenerationError;
pub use gemini::GeminiClient;
pub use ports::{GenerationRequest, GenerationResponse, TextGenerator};
