//! Model resolution: pick a vision-capable model for a credential.
//!
//! One listing call per resolution, no caching. Selection prefers the
//! configured `preferred_models` in order, then falls back to the first listed
//! name matching the vision pattern, in provider order.

use super::provider::GenerativeApi;
use crate::config::{ListFailurePolicy, ResolverConfig};
use crate::error::{CaptionError, ConfigError, ResolveError};
use crate::types::{Credential, ModelIdentifier};
use regex::{Regex, RegexBuilder};
use std::time::Duration;

/// Resolves a usable [`ModelIdentifier`] from the provider's model list.
#[derive(Debug, Clone)]
pub struct ModelResolver {
    pattern: Regex,
    preferred: Vec<ModelIdentifier>,
    on_list_failure: ListFailurePolicy,
    list_timeout: Duration,
}

impl ModelResolver {
    pub fn new(config: &ResolverConfig, list_timeout: Duration) -> Result<Self, ConfigError> {
        let pattern = RegexBuilder::new(&config.model_pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                ConfigError::ValidationError(format!(
                    "resolver.model_pattern is not a valid regex: {e}"
                ))
            })?;

        Ok(Self {
            pattern,
            preferred: config
                .preferred_models
                .iter()
                .map(|name| ModelIdentifier::from_listed(name))
                .collect(),
            on_list_failure: config.on_list_failure,
            list_timeout,
        })
    }

    /// Put a model ahead of the configured preferences.
    pub fn prefer(&mut self, name: &str) {
        self.preferred.insert(0, ModelIdentifier::from_listed(name));
    }

    /// Resolve a model for `credential`.
    ///
    /// A blank credential fails before any network call.
    pub async fn resolve(
        &self,
        api: &dyn GenerativeApi,
        credential: &Credential,
    ) -> Result<ModelIdentifier, ResolveError> {
        tracing::debug!("API key configured: {}", !credential.is_blank());
        if credential.is_blank() {
            return Err(ResolveError::MissingCredential);
        }

        let available = self.list(api, credential).await?;
        tracing::debug!("Available models: {:?}", available);

        let Some(model) = self.select(&available) else {
            return Err(ResolveError::NoVisionModel { available });
        };

        tracing::info!("Selected vision model: {model}");
        Ok(model)
    }

    /// Whether a listed name matches the vision pattern.
    pub fn is_candidate(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// Pick a model from a listed set. Pure; no I/O.
    pub fn select(&self, available: &[String]) -> Option<ModelIdentifier> {
        let listed: Vec<ModelIdentifier> = available
            .iter()
            .map(|name| ModelIdentifier::from_listed(name))
            .collect();

        if let Some(preferred) = self.preferred.iter().find(|p| listed.contains(p)) {
            return Some(preferred.clone());
        }

        available
            .iter()
            .find(|name| self.pattern.is_match(name))
            .map(|name| ModelIdentifier::from_listed(name))
    }

    /// Run the listing call under the configured timeout and failure policy.
    async fn list(
        &self,
        api: &dyn GenerativeApi,
        credential: &Credential,
    ) -> Result<Vec<String>, ResolveError> {
        let failure = match tokio::time::timeout(self.list_timeout, api.list_models(credential))
            .await
        {
            Ok(Ok(models)) => return Ok(models),
            Ok(Err(e)) => ResolveError::ListUnavailable {
                status_code: e.status_code(),
                message: list_failure_message(e),
            },
            Err(_) => ResolveError::ListUnavailable {
                status_code: None,
                message: format!("timed out after {}ms", self.list_timeout.as_millis()),
            },
        };

        match self.on_list_failure {
            ListFailurePolicy::Fail => Err(failure),
            ListFailurePolicy::Degrade => {
                tracing::warn!("Could not list models, continuing with none: {failure}");
                Ok(Vec::new())
            }
        }
    }
}

fn list_failure_message(error: CaptionError) -> String {
    match error {
        CaptionError::RequestFailed { message, .. } => message,
        other => other.to_string(),
    }
}
