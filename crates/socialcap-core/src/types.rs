//! Core data types: image payloads, model identifiers, credentials and captions.

use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base64-encoded image ready to send to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// Base64-encoded image bytes, without any data-URI prefix
    pub data: String,
    /// MIME type (e.g., "image/jpeg", "image/png")
    pub mime_type: String,
}

impl ImagePayload {
    /// Encode raw image bytes.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Self {
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            mime_type: mime_type.to_string(),
        }
    }

    /// Build a payload from a data URI such as `data:image/png;base64,iVBOR...`.
    ///
    /// Everything up to and including the first comma is dropped. Input with no
    /// comma is taken as bare base64.
    pub fn from_data_uri(uri: &str, mime_type: &str) -> Self {
        let data = match uri.split_once(',') {
            Some((_, data)) => data,
            None => uri,
        };
        Self {
            data: data.to_string(),
            mime_type: mime_type.to_string(),
        }
    }

    /// Return a data URL for this payload.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Length of the encoded payload in bytes.
    pub fn encoded_len(&self) -> usize {
        self.data.len()
    }
}

/// A provider-hosted model name, without its `models/` namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModelIdentifier(String);

impl ModelIdentifier {
    /// Build an identifier from a name as the listing endpoint returns it.
    ///
    /// Strips any path-like namespace: `models/gemini-pro-vision` → `gemini-pro-vision`.
    pub fn from_listed(name: &str) -> Self {
        let bare = name.trim().rsplit('/').next().unwrap_or_default();
        Self(bare.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// API credential. Never printed.
#[derive(Clone, Default)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// True when the credential is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The raw secret, trimmed. Only the HTTP client should call this.
    pub fn expose(&self) -> &str {
        self.0.trim()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Target social network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(alias = "instagram")]
    Instagram,
    #[serde(alias = "linkedin", alias = "Linkedin")]
    LinkedIn,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::LinkedIn => "LinkedIn",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A caption for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionData {
    pub platform: Platform,
    pub caption: String,
    pub hashtags: Vec<String>,
}

/// Captions for both platforms. Both keys are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub instagram: CaptionData,
    pub linkedin: CaptionData,
}

impl GenerationResult {
    /// Caption for a given platform.
    pub fn get(&self, platform: Platform) -> &CaptionData {
        match platform {
            Platform::Instagram => &self.instagram,
            Platform::LinkedIn => &self.linkedin,
        }
    }

    /// Check the parts serde cannot: platform labels match their keys, and
    /// captions are not empty.
    pub fn validate(&self) -> Result<(), String> {
        for (expected, data) in [
            (Platform::Instagram, &self.instagram),
            (Platform::LinkedIn, &self.linkedin),
        ] {
            if data.platform != expected {
                return Err(format!(
                    "{} entry has platform {}",
                    expected.label().to_lowercase(),
                    data.platform
                ));
            }
            if data.caption.trim().is_empty() {
                return Err(format!("{expected} caption is empty"));
            }
        }
        Ok(())
    }
}
