//! Configuration for the Vertex AI clients.
//!
//! Values load in three layers: bundled defaults, an optional `fresco.toml`
//! in the working directory, and `FRESCO_*` environment variables, with
//! later layers taking precedence.

use config::{Config, Environment, File, FileFormat};
use fresco_error::{ConfigError, FrescoResult};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Configuration shared by the Vertex AI clients.
///
/// # Examples
///
/// ```no_run
/// use fresco_models::FrescoConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FrescoConfig::load()?;
/// assert!(!config.location.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FrescoConfig {
    /// GCP project id
    pub project_id: String,
    /// Vertex region, e.g. "us-central1"
    pub location: String,
    /// Storage bucket for generated media
    pub bucket: String,
    /// Text model identifier
    pub text_model: String,
    /// Schema-based image model identifier
    pub image_model: String,
    /// Multimodal image model identifier (reference-conditioned generation)
    pub image_edit_model: String,
    /// Video model identifier
    pub video_model: String,
    /// Music model identifier
    pub music_model: String,
    /// Default named TTS voice
    pub tts_voice: String,
    /// Interval between video operation polls, in milliseconds
    pub poll_interval_ms: u64,
    /// Ceiling on total video poll time, in seconds
    pub poll_timeout_secs: u64,
}

impl FrescoConfig {
    /// Load configuration from defaults, `fresco.toml`, and `FRESCO_*`
    /// environment variables.
    #[instrument(name = "fresco_config_load")]
    pub fn load() -> FrescoResult<Self> {
        let _ = dotenvy::dotenv();

        let settings = Config::builder()
            .set_default("project_id", "")
            .and_then(|b| b.set_default("location", "us-central1"))
            .and_then(|b| b.set_default("bucket", "fresco-videos"))
            .and_then(|b| b.set_default("text_model", "gemini-2.5-flash"))
            .and_then(|b| b.set_default("image_model", "imagen-4.0-generate-001"))
            .and_then(|b| b.set_default("image_edit_model", "gemini-2.5-flash-image-preview"))
            .and_then(|b| b.set_default("video_model", "veo-3.0-generate-001"))
            .and_then(|b| b.set_default("music_model", "lyria-002"))
            .and_then(|b| b.set_default("tts_voice", "Algenib"))
            .and_then(|b| b.set_default("poll_interval_ms", 2000_i64))
            .and_then(|b| b.set_default("poll_timeout_secs", 300_i64))
            .map_err(|e| ConfigError::new(format!("Invalid default: {}", e)))?
            .add_source(File::new("fresco", FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("FRESCO"))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to deserialize configuration: {}", e)))?;

        if config.project_id.is_empty() {
            return Err(ConfigError::new(
                "project_id is required (set FRESCO_PROJECT_ID or fresco.toml)",
            )
            .into());
        }

        Ok(config)
    }

    /// Base endpoint for a publisher model in this project/region.
    pub fn model_endpoint(&self, model: &str, verb: &str) -> String {
        format!(
            "https://{loc}-aiplatform.googleapis.com/v1/projects/{proj}/locations/{loc}/publishers/google/models/{model}:{verb}",
            loc = self.location,
            proj = self.project_id,
        )
    }

    /// Storage prefix for generated images.
    pub fn images_storage_uri(&self) -> String {
        format!("gs://{}/images/", self.bucket)
    }

    /// Storage prefix for generated videos.
    pub fn videos_storage_uri(&self) -> String {
        format!("gs://{}/videos/", self.bucket)
    }
}
