//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.gemini.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "gemini.endpoint must not be empty".into(),
            ));
        }
        if self.gemini.api_version.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "gemini.api_version must not be empty".into(),
            ));
        }
        if self.limits.list_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.list_timeout_ms must be > 0".into(),
            ));
        }
        if self.limits.generate_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.generate_timeout_ms must be > 0".into(),
            ));
        }
        if self.limits.max_image_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_size_mb must be > 0".into(),
            ));
        }
        if let Err(e) = regex::Regex::new(&self.resolver.model_pattern) {
            return Err(ConfigError::ValidationError(format!(
                "resolver.model_pattern is not a valid regex: {e}"
            )));
        }
        if !matches!(self.output.format.as_str(), "text" | "json") {
            return Err(ConfigError::ValidationError(format!(
                "output.format must be \"text\" or \"json\", got \"{}\"",
                self.output.format
            )));
        }
        Ok(())
    }
}
