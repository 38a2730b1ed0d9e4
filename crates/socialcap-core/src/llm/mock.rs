//! Scripted [`GenerativeApi`] for tests.

use super::provider::{GenerativeApi, LlmRequest, LlmResponse};
use crate::error::CaptionError;
use crate::types::{Credential, ModelIdentifier};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type ListFn = Box<dyn Fn() -> Result<Vec<String>, CaptionError> + Send + Sync>;
type GenerateFn = Box<dyn Fn(u32) -> Result<LlmResponse, CaptionError> + Send + Sync>;

/// A configurable mock API.
///
/// Each call to `generate()` invokes the response factory with the current
/// call index, allowing callers to return different results per attempt.
pub(crate) struct MockApi {
    list_fn: ListFn,
    generate_fn: GenerateFn,
    list_calls: Arc<AtomicU32>,
    generate_calls: Arc<AtomicU32>,
    list_delay: Option<Duration>,
    generate_delay: Option<Duration>,
    /// Model and request seen by the most recent `generate()` call.
    last_generate: Arc<Mutex<Option<(ModelIdentifier, LlmRequest)>>>,
}

impl MockApi {
    fn with_list(list_fn: ListFn) -> Self {
        Self {
            list_fn,
            generate_fn: Box::new(|_| Err(CaptionError::request("generate not scripted"))),
            list_calls: Arc::new(AtomicU32::new(0)),
            generate_calls: Arc::new(AtomicU32::new(0)),
            list_delay: None,
            generate_delay: None,
            last_generate: Arc::new(Mutex::new(None)),
        }
    }

    /// Listing returns these names, in order.
    pub(crate) fn listing(models: &[&str]) -> Self {
        let models: Vec<String> = models.iter().map(|m| m.to_string()).collect();
        Self::with_list(Box::new(move || Ok(models.clone())))
    }

    /// Listing fails with a provider error.
    pub(crate) fn listing_fails(status_code: Option<u16>, message: &str) -> Self {
        let message = message.to_string();
        Self::listing_err(CaptionError::RequestFailed {
            message,
            status_code,
        })
    }

    /// Listing fails with the given error.
    pub(crate) fn listing_err(error: CaptionError) -> Self {
        Self::with_list(Box::new(move || Err(error.clone())))
    }

    /// Every generation call returns this text.
    pub(crate) fn responding(mut self, text: &str) -> Self {
        let text = text.to_string();
        self.generate_fn = Box::new(move |_| {
            Ok(LlmResponse {
                text: text.clone(),
                model: "mock-v1".to_string(),
                tokens_used: Some(42),
                latency_ms: 10,
            })
        });
        self
    }

    /// Every generation call fails with a provider error.
    pub(crate) fn generate_fails(mut self, status_code: Option<u16>, message: &str) -> Self {
        let message = message.to_string();
        self.generate_fn = Box::new(move |_| {
            Err(CaptionError::RequestFailed {
                message: message.clone(),
                status_code,
            })
        });
        self
    }

    pub(crate) fn with_list_delay(mut self, delay: Duration) -> Self {
        self.list_delay = Some(delay);
        self
    }

    pub(crate) fn with_generate_delay(mut self, delay: Duration) -> Self {
        self.generate_delay = Some(delay);
        self
    }

    /// Get a shared handle to the listing counter (clone before moving the mock).
    pub(crate) fn list_calls_handle(&self) -> Arc<AtomicU32> {
        self.list_calls.clone()
    }

    /// Get a shared handle to the generation counter.
    pub(crate) fn generate_calls_handle(&self) -> Arc<AtomicU32> {
        self.generate_calls.clone()
    }

    /// Get a shared handle to the last generation call's model and request.
    pub(crate) fn last_generate_handle(&self) -> Arc<Mutex<Option<(ModelIdentifier, LlmRequest)>>> {
        self.last_generate.clone()
    }
}

#[async_trait]
impl GenerativeApi for MockApi {
    fn name(&self) -> &str {
        "mock"
    }

    async fn list_models(&self, _credential: &Credential) -> Result<Vec<String>, CaptionError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.list_delay {
            tokio::time::sleep(delay).await;
        }
        (self.list_fn)()
    }

    async fn generate(
        &self,
        _credential: &Credential,
        model: &ModelIdentifier,
        request: &LlmRequest,
    ) -> Result<LlmResponse, CaptionError> {
        let idx = self.generate_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_generate.lock() {
            *last = Some((model.clone(), request.clone()));
        }
        if let Some(delay) = self.generate_delay {
            tokio::time::sleep(delay).await;
        }
        (self.generate_fn)(idx)
    }
}
