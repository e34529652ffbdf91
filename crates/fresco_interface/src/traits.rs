//! Async trait seams for the generative service collaborators.

use crate::{ImagePrediction, Part, TextRequest, VideoJobRequest, VideoOperation, VideoPollStatus};
use async_trait::async_trait;
use fresco_core::GenerationResult;
use fresco_error::FrescoResult;

/// Text generation service.
///
/// Must support JSON-schema-constrained structured output and multimodal
/// (text + image) input for the regeneration flows.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a request, honoring its response format and schema.
    async fn generate(&self, request: &TextRequest) -> FrescoResult<String>;
}

/// Schema-based image generation service.
///
/// Single image per call, request/response style; transient failures are
/// retried inside the implementation.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image from a serialized prompt.
    ///
    /// A moderation rejection is not an `Err`: it comes back as a
    /// prediction carrying `rai_filtered_reason`.
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
        enhance_prompt: bool,
    ) -> FrescoResult<ImagePrediction>;
}

/// Multimodal image generation service accepting interleaved text and
/// reference-image parts.
///
/// Used for reference-conditioned scene images: previously generated
/// entity portraits anchor the appearance of characters, settings, and
/// props across scenes.
#[async_trait]
pub trait ReferenceImageGenerator: Send + Sync {
    /// Generate one image conditioned on the given parts.
    ///
    /// Returns the storage URI of the generated image, or a unit-level
    /// failure with a displayable message.
    async fn generate_with_references(
        &self,
        parts: &[Part],
    ) -> FrescoResult<GenerationResult<String>>;
}

/// Asynchronous video generation service (submit + poll).
#[async_trait]
pub trait VideoGenerator: Send + Sync {
    /// Submit a long-running video job and return its operation handle.
    async fn submit(&self, request: &VideoJobRequest) -> FrescoResult<VideoOperation>;

    /// Query the status of a previously submitted job.
    async fn poll(&self, operation: &VideoOperation) -> FrescoResult<VideoPollStatus>;
}

/// Text-to-speech service.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize speech audio for `text` in the given language.
    ///
    /// `voice` selects a named voice; implementations fall back to a
    /// default voice for the language when `None`.
    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
        voice: Option<&str>,
    ) -> FrescoResult<Vec<u8>>;
}

/// Music generation service.
#[async_trait]
pub trait MusicGenerator: Send + Sync {
    /// Generate a music track for an English-only prompt, returning raw
    /// audio bytes.
    async fn generate_music(&self, prompt: &str) -> FrescoResult<Vec<u8>>;
}

/// Object storage service. Consumed, not reimplemented; URIs are opaque
/// strings of the form `scheme://bucket/key`.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload bytes under a key, returning the storage URI.
    async fn upload(&self, bytes: &[u8], key: &str, content_type: &str) -> FrescoResult<String>;

    /// Get a signed HTTP URL for a storage URI.
    async fn signed_url(&self, uri: &str, download: bool) -> FrescoResult<String>;

    /// Best-effort MIME type for a storage URI, derived from its extension.
    fn mime_type(&self, uri: &str) -> String;
}
