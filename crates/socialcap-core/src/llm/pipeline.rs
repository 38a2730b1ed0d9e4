//! Caption pipeline: resolve a model, send the image, parse the answer.
//!
//! Each call runs strictly in sequence: one listing call, one generation call,
//! then extraction and validation. Nothing is shared between calls except the
//! read-only configuration, so a pipeline can serve concurrent callers.

use super::extract::{RegexExtractor, ResponseExtractor};
use super::provider::{GenerativeApi, LlmRequest};
use super::resolver::ModelResolver;
use crate::config::Config;
use crate::error::{CaptionError, CaptionResult, ConfigError};
use crate::image::is_image_mime;
use crate::types::{Credential, GenerationResult, ImagePayload};
use std::sync::Arc;
use std::time::Duration;

/// Number of hashtags the prompt asks for per platform.
const EXPECTED_HASHTAGS: usize = 5;

/// Image-to-captions orchestrator.
pub struct CaptionPipeline {
    api: Arc<dyn GenerativeApi>,
    resolver: ModelResolver,
    extractor: Box<dyn ResponseExtractor>,
    generate_timeout: Duration,
}

impl CaptionPipeline {
    pub fn new(api: Box<dyn GenerativeApi>, config: &Config) -> Result<Self, ConfigError> {
        let resolver = ModelResolver::new(
            &config.resolver,
            Duration::from_millis(config.limits.list_timeout_ms),
        )?;
        Ok(Self {
            api: Arc::from(api),
            resolver,
            extractor: Box::new(RegexExtractor),
            generate_timeout: Duration::from_millis(config.limits.generate_timeout_ms),
        })
    }

    /// Swap the JSON extractor.
    pub fn with_extractor(mut self, extractor: Box<dyn ResponseExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn resolver(&self) -> &ModelResolver {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut ModelResolver {
        &mut self.resolver
    }

    pub fn api(&self) -> &dyn GenerativeApi {
        self.api.as_ref()
    }

    /// Entry point for callers holding a data URI (e.g. from a file picker).
    ///
    /// Non-image MIME types are rejected before any provider call.
    pub async fn generate_from_data_uri(
        &self,
        data_uri: &str,
        mime_type: &str,
        credential: &Credential,
    ) -> CaptionResult<GenerationResult> {
        if !is_image_mime(mime_type) {
            return Err(CaptionError::NotAnImage {
                mime_type: mime_type.to_string(),
            });
        }
        let image = ImagePayload::from_data_uri(data_uri, mime_type);
        self.generate_captions(&image, credential).await
    }

    /// Generate Instagram and LinkedIn captions for an image.
    pub async fn generate_captions(
        &self,
        image: &ImagePayload,
        credential: &Credential,
    ) -> CaptionResult<GenerationResult> {
        let model = self.resolver.resolve(self.api.as_ref(), credential).await?;

        // Base64 never contains a comma, so this only drops a data-URI prefix.
        let image = ImagePayload::from_data_uri(&image.data, &image.mime_type);
        tracing::debug!(
            "Sending request to {} (model: {model}, MIME type: {}, base64 length: {})",
            self.api.name(),
            image.mime_type,
            image.encoded_len()
        );

        let request = LlmRequest::social_captions(image);
        let response = match tokio::time::timeout(
            self.generate_timeout,
            self.api.generate(credential, &model, &request),
        )
        .await
        {
            Ok(result) => result?,
            Err(_) => {
                return Err(CaptionError::Timeout {
                    stage: "generate".to_string(),
                    timeout_ms: self.generate_timeout.as_millis() as u64,
                });
            }
        };

        tracing::debug!(
            "Response received from {} in {}ms (tokens: {:?})",
            response.model,
            response.latency_ms,
            response.tokens_used
        );
        tracing::trace!("Response text: {}", response.text);

        parse_generation_result(self.extractor.as_ref(), &response.text)
    }
}

/// Extract, parse and validate a [`GenerationResult`] from free text.
pub fn parse_generation_result(
    extractor: &dyn ResponseExtractor,
    text: &str,
) -> CaptionResult<GenerationResult> {
    let json = extractor
        .extract(text)
        .ok_or_else(|| CaptionError::MalformedResponse("no JSON found".to_string()))?;

    let result: GenerationResult = serde_json::from_str(json)
        .map_err(|e| CaptionError::MalformedResponse(format!("invalid JSON: {e}")))?;

    result.validate().map_err(CaptionError::MalformedResponse)?;

    for data in [&result.instagram, &result.linkedin] {
        if data.hashtags.len() != EXPECTED_HASHTAGS {
            tracing::debug!(
                "{} returned {} hashtags (asked for {EXPECTED_HASHTAGS})",
                data.platform,
                data.hashtags.len()
            );
        }
    }

    Ok(result)
}
