//! socialcap core - turn an image into social-media captions.
//!
//! The image is sent to a hosted multimodal model (Gemini) together with a
//! fixed prompt, and the model's JSON answer is parsed into captions for
//! Instagram and LinkedIn.
//!
//! # Architecture
//!
//! Each call is a straight line with no state kept between calls:
//!
//! ```text
//! Credential → List models → Pick vision model → generateContent(image + prompt)
//!            → Extract JSON → Validate → GenerationResult
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use socialcap_core::{Config, Socialcap};
//!
//! #[tokio::main]
//! async fn main() -> socialcap_core::Result<()> {
//!     let config = Config::load()?;
//!     let socialcap = Socialcap::new(config)?;
//!
//!     let image = socialcap.load_image("./photo.jpg".as_ref()).await?;
//!     let result = socialcap.generate(&image).await?;
//!     println!("{}", result.instagram.caption);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod image;
pub mod llm;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{
    CaptionError, CaptionResult, ConfigError, ErrorKind, ImageError, ResolveError, Result,
    SocialcapError,
};
pub use image::ImageLoader;
pub use llm::{CaptionPipeline, GeminiClient, GenerativeApi, ModelResolver};
pub use types::{CaptionData, Credential, GenerationResult, ImagePayload, ModelIdentifier, Platform};

use std::path::Path;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// socialcap facade - config plus a Gemini-backed caption pipeline.
pub struct Socialcap {
    config: Config,
    pipeline: CaptionPipeline,
}

impl Socialcap {
    /// Create a new instance talking to the configured Gemini endpoint.
    pub fn new(config: Config) -> Result<Self> {
        tracing::debug!("Initializing socialcap v{}", VERSION);
        let api = GeminiClient::from_config(&config.gemini);
        let pipeline = CaptionPipeline::new(Box::new(api), &config)?;
        Ok(Self { config, pipeline })
    }

    /// Create a new instance with the on-disk (or default) configuration.
    pub fn with_defaults() -> Result<Self> {
        let config = Config::load()?;
        Self::new(config)
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn pipeline(&self) -> &CaptionPipeline {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut CaptionPipeline {
        &mut self.pipeline
    }

    /// Credential from config, resolved at call time.
    pub fn credential(&self) -> Credential {
        self.config.credential()
    }

    /// Load and validate an image file.
    pub async fn load_image(&self, path: &Path) -> Result<ImagePayload> {
        Ok(ImageLoader::new(&self.config.limits).load(path).await?)
    }

    /// Generate captions for an image using the configured credential.
    pub async fn generate(&self, image: &ImagePayload) -> CaptionResult<GenerationResult> {
        let credential = self.credential();
        self.pipeline.generate_captions(image, &credential).await
    }

    /// List the models visible to the configured credential.
    pub async fn list_models(&self) -> CaptionResult<Vec<String>> {
        let credential = self.credential();
        if credential.is_blank() {
            return Err(ResolveError::MissingCredential.into());
        }
        self.pipeline.api().list_models(&credential).await
    }
}
