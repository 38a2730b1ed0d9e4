//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

/// Default pattern used to spot vision-capable model names.
pub const DEFAULT_MODEL_PATTERN: &str = "vision|image|multimodal|gemini";

/// Gemini API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API host, without a trailing version segment
    pub endpoint: String,

    /// API version path segment
    pub api_version: String,

    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            api_version: "v1beta".to_string(),
            api_key: "${GEMINI_API_KEY}".to_string(),
        }
    }
}

/// What to do when the model-listing call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListFailurePolicy {
    /// Surface the failure as its own error
    #[default]
    Fail,
    /// Log a warning and continue with no candidates
    Degrade,
}

/// Model selection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Case-insensitive regex matched against listed model names
    pub model_pattern: String,

    /// Models to prefer, in order, when the provider lists them.
    /// Falls back to the first pattern match.
    pub preferred_models: Vec<String>,

    /// Listing failure handling ("fail" or "degrade")
    pub on_list_failure: ListFailurePolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            model_pattern: DEFAULT_MODEL_PATTERN.to_string(),
            preferred_models: Vec::new(),
            on_list_failure: ListFailurePolicy::Fail,
        }
    }
}

/// Timeouts and input limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Model-listing call timeout in milliseconds
    pub list_timeout_ms: u64,

    /// Caption generation call timeout in milliseconds
    pub generate_timeout_ms: u64,

    /// Maximum image file size in megabytes
    pub max_image_size_mb: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            list_timeout_ms: 30_000,
            generate_timeout_ms: 60_000,
            max_image_size_mb: 20,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    pub format: String,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
