//! Generative API trait and request/response types.
//!
//! Defines the interface the caption pipeline talks to. The production
//! implementation is [`GeminiClient`](super::gemini::GeminiClient); tests use
//! scripted mocks.

use super::prompt::CAPTION_PROMPT;
use crate::error::CaptionError;
use crate::types::{Credential, ImagePayload, ModelIdentifier};
use async_trait::async_trait;

/// A single multimodal request: one image plus instructions.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    /// The image to caption
    pub image: ImagePayload,
    /// Text prompt for the model
    pub prompt: String,
}

impl LlmRequest {
    /// Build the social-caption request for an image.
    pub fn social_captions(image: ImagePayload) -> Self {
        Self {
            image,
            prompt: CAPTION_PROMPT.to_string(),
        }
    }
}

/// The response from a generation call.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Raw text completion
    pub text: String,
    /// Model identifier used
    pub model: String,
    /// Number of tokens used (input + output), if reported
    pub tokens_used: Option<u32>,
    /// Round-trip latency in milliseconds
    pub latency_ms: u64,
}

/// Trait for hosted generative-AI backends.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (we need `Box<dyn GenerativeApi>` for dynamic dispatch).
#[async_trait]
pub trait GenerativeApi: Send + Sync {
    /// Provider name for logging (e.g., "gemini").
    fn name(&self) -> &str;

    /// List the model names visible to this credential, in provider order.
    async fn list_models(&self, credential: &Credential) -> Result<Vec<String>, CaptionError>;

    /// Run one generation call against a resolved model.
    async fn generate(
        &self,
        credential: &Credential,
        model: &ModelIdentifier,
        request: &LlmRequest,
    ) -> Result<LlmResponse, CaptionError>;
}
