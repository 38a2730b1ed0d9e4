//! Error types for socialcap.
//!
//! Errors are organized by stage (configuration, model resolution, caption
//! generation, image loading). Every caption failure carries a structured
//! [`ErrorKind`] for programmatic handling, and a separate user-facing message
//! produced by [`CaptionError::user_message`].

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for socialcap operations.
#[derive(Error, Debug)]
pub enum SocialcapError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Caption generation errors
    #[error("{0}")]
    Caption(#[from] CaptionError),

    /// Image loading errors
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Failures while picking a model for a credential.
#[derive(Error, Debug, Clone)]
pub enum ResolveError {
    /// Credential was empty or whitespace-only
    #[error("API key not configured. Set GEMINI_API_KEY or run `socialcap config set-key`")]
    MissingCredential,

    /// The model-listing call did not succeed
    #[error("Could not list models{}: {message}", status_suffix(*status_code))]
    ListUnavailable {
        status_code: Option<u16>,
        message: String,
    },

    /// No listed model matched the vision/multimodal pattern
    #[error(
        "No vision-capable model available for this API key (available: {}).\n\
         Please enable a vision/multimodal Gemini model in the Google Cloud project \
         or use an API key associated with a project that has vision models.",
        display_models(available)
    )]
    NoVisionModel { available: Vec<String> },
}

/// Caption pipeline errors.
#[derive(Error, Debug, Clone)]
pub enum CaptionError {
    /// Model resolution failed (propagated unchanged)
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Transport or provider-level failure
    #[error("{message}")]
    RequestFailed {
        message: String,
        status_code: Option<u16>,
    },

    /// A provider call exceeded its deadline
    #[error("Timeout in {stage} stage after {timeout_ms}ms")]
    Timeout { stage: String, timeout_ms: u64 },

    /// The model answered, but not with the expected JSON shape
    #[error("Invalid response format from API - {0}")]
    MalformedResponse(String),

    /// The caller handed over something that is not an image
    #[error("Please upload a valid image file (got {mime_type})")]
    NotAnImage { mime_type: String },
}

/// Structured error kind for programmatic branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingCredential,
    ListUnavailable,
    NoVisionModel,
    RequestFailed,
    Timeout,
    MalformedResponse,
    NotAnImage,
}

impl CaptionError {
    /// Shorthand for a provider failure without an HTTP status.
    pub fn request(message: impl Into<String>) -> Self {
        Self::RequestFailed {
            message: message.into(),
            status_code: None,
        }
    }

    /// The structured kind of this error. Unaffected by message mapping.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Resolve(ResolveError::MissingCredential) => ErrorKind::MissingCredential,
            Self::Resolve(ResolveError::ListUnavailable { .. }) => ErrorKind::ListUnavailable,
            Self::Resolve(ResolveError::NoVisionModel { .. }) => ErrorKind::NoVisionModel,
            Self::RequestFailed { .. } => ErrorKind::RequestFailed,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::NotAnImage { .. } => ErrorKind::NotAnImage,
        }
    }

    /// HTTP status reported by the provider, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status_code, .. }
            | Self::Resolve(ResolveError::ListUnavailable { status_code, .. }) => *status_code,
            _ => None,
        }
    }

    /// Human-readable message for display.
    ///
    /// Provider-originated errors are rewritten into friendlier text when they
    /// mention an invalid key, a 403 or a 429. Everything else passes through.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        match self.kind() {
            ErrorKind::RequestFailed | ErrorKind::ListUnavailable => map_provider_message(message),
            _ => message,
        }
    }
}

/// Substring rewrites for messages coming back from the provider.
fn map_provider_message(message: String) -> String {
    if message.contains("API key") {
        "Invalid API key. Please check your configuration and make sure the API key is correct."
            .to_string()
    } else if message.contains("403") {
        "API access denied. Make sure the Generative AI API is enabled in Google Cloud Console."
            .to_string()
    } else if message.contains("429") {
        "Too many requests. Please wait a moment and try again.".to_string()
    } else {
        message
    }
}

fn status_suffix(status_code: Option<u16>) -> String {
    status_code
        .map(|code| format!(" (HTTP {code})"))
        .unwrap_or_default()
}

fn display_models(models: &[String]) -> String {
    if models.is_empty() {
        "none".to_string()
    } else {
        models.join(", ")
    }
}

/// Image loading errors.
#[derive(Error, Debug)]
pub enum ImageError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File could not be read
    #[error("Cannot read {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// File exceeds size limit
    #[error("File too large: {path} ({size_mb}MB > {max_mb}MB)")]
    FileTooLarge {
        path: PathBuf,
        size_mb: u64,
        max_mb: u64,
    },

    /// Not a recognized image
    #[error("Please upload a valid image file ({path}: {message})")]
    NotAnImage { path: PathBuf, message: String },
}

/// Convenience type alias for socialcap results.
pub type Result<T> = std::result::Result<T, SocialcapError>;

/// Convenience type alias for caption pipeline results.
pub type CaptionResult<T> = std::result::Result<T, CaptionError>;
