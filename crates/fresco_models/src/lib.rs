//! Vertex AI implementations of the Fresco collaborator traits.
//!
//! One client per service: Gemini for text, Imagen for schema-based images,
//! the Gemini image model for reference-conditioned images, Veo for video
//! jobs, Chirp for speech, Lyria for music, and Cloud Storage for object
//! persistence. Every client speaks the provider's REST surface directly so
//! the wire contracts stay under this crate's control.
//!
//! Transient failures on image, video, and music calls are retried through
//! [`RetryPolicy`]; text calls are not retried, matching the observed
//! provider behavior the pipeline was tuned against.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod config;
mod gcs;
mod gemini;
mod gemini_image;
mod imagen;
mod lyria;
mod retry;
mod tts;
mod veo;

pub use auth::vertex_access_token;
pub use config::FrescoConfig;
pub use gcs::GcsClient;
pub use gemini::GeminiTextClient;
pub use gemini_image::GeminiImageClient;
pub use imagen::ImagenClient;
pub use lyria::LyriaClient;
pub use retry::RetryPolicy;
pub use tts::ChirpClient;
pub use veo::VeoClient;
