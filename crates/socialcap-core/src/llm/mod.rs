//! Generative-AI integration for caption generation.
//!
//! Provides a provider abstraction ([`GenerativeApi`]) with a Gemini
//! implementation, the model resolver, the JSON response extractor, and the
//! caption pipeline that ties them together.

pub(crate) mod extract;
pub(crate) mod gemini;
pub(crate) mod pipeline;
pub(crate) mod prompt;
pub(crate) mod provider;
pub(crate) mod resolver;

#[cfg(test)]
pub(crate) mod mock;

pub use extract::{RegexExtractor, ResponseExtractor};
pub use gemini::GeminiClient;
pub use pipeline::{parse_generation_result, CaptionPipeline};
pub use prompt::CAPTION_PROMPT;
pub use provider::{GenerativeApi, LlmRequest, LlmResponse};
pub use resolver::ModelResolver;
