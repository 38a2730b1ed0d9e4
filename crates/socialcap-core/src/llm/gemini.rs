//! Gemini provider using the `generativelanguage` REST API.
//!
//! Lists models with `GET /{version}/models?key=...` and generates with
//! `POST /{version}/models/{model}:generateContent`, sending the image as an
//! `inlineData` part ahead of the prompt text.

use super::provider::{GenerativeApi, LlmRequest, LlmResponse};
use crate::config::GeminiConfig;
use crate::error::CaptionError;
use crate::types::{Credential, ModelIdentifier};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Gemini REST client.
pub struct GeminiClient {
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(endpoint: &str, api_version: &str) -> Self {
        Self {
            base_url: format!(
                "{}/{}",
                endpoint.trim_end_matches('/'),
                api_version.trim_matches('/')
            ),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &GeminiConfig) -> Self {
        Self::new(&config.endpoint, &config.api_version)
    }
}

// --- Request types ---

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

impl GenerateContentRequest {
    fn from_request(request: &LlmRequest) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: request.image.mime_type.clone(),
                            data: request.image.data.clone(),
                        },
                    },
                    Part::Text {
                        text: request.prompt.clone(),
                    },
                ],
            }],
        }
    }
}

// --- Response types ---

#[derive(Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Deserialize)]
struct ModelEntry {
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    total_token_count: Option<u32>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Build a `RequestFailed` from a non-2xx response body.
///
/// Prefers the `error.message` field of Google's error envelope and falls back
/// to the raw body.
fn http_error(status: reqwest::StatusCode, body: &str) -> CaptionError {
    let detail = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    CaptionError::RequestFailed {
        message: format!("Gemini HTTP {status}: {detail}"),
        status_code: Some(status.as_u16()),
    }
}

/// Join the text parts of the first candidate.
fn response_text(response: &GenerateContentResponse) -> Result<String, CaptionError> {
    let Some(candidate) = response.candidates.first() else {
        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return Err(CaptionError::request(format!(
                "Gemini response was blocked: {reason}"
            )));
        }
        return Err(CaptionError::MalformedResponse(
            "no candidates in response".to_string(),
        ));
    };

    let text: String = candidate
        .content
        .iter()
        .flat_map(|c| c.parts.iter())
        .filter_map(|p| p.text.as_deref())
        .collect();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
        return Err(CaptionError::MalformedResponse(format!(
            "empty completion (finish reason: {reason})"
        )));
    }

    Ok(text)
}

#[async_trait]
impl GenerativeApi for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn list_models(&self, credential: &Credential) -> Result<Vec<String>, CaptionError> {
        let url = format!("{}/models", self.base_url);

        let resp = self
            .client
            .get(&url)
            .query(&[("key", credential.expose())])
            .send()
            .await
            .map_err(|e| {
                CaptionError::request(format!("Gemini list request failed: {}", e.without_url()))
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(http_error(status, &text));
        }

        let list: ListModelsResponse = resp.json().await.map_err(|e| {
            CaptionError::request(format!(
                "Failed to parse Gemini model list: {}",
                e.without_url()
            ))
        })?;

        Ok(list
            .models
            .into_iter()
            .filter_map(|m| m.name)
            .filter(|name| !name.is_empty())
            .collect())
    }

    async fn generate(
        &self,
        credential: &Credential,
        model: &ModelIdentifier,
        request: &LlmRequest,
    ) -> Result<LlmResponse, CaptionError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let start = Instant::now();

        let body = GenerateContentRequest::from_request(request);

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                CaptionError::request(format!("Gemini request failed: {}", e.without_url()))
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(http_error(status, &text));
        }

        let generated: GenerateContentResponse = resp.json().await.map_err(|e| {
            CaptionError::MalformedResponse(format!(
                "failed to parse Gemini response: {}",
                e.without_url()
            ))
        })?;

        let text = response_text(&generated)?;

        Ok(LlmResponse {
            text,
            model: generated
                .model_version
                .clone()
                .unwrap_or_else(|| model.to_string()),
            tokens_used: generated.usage_metadata.and_then(|u| u.total_token_count),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}
