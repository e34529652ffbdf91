//! Fresco — AI storyboard and video generation pipeline.
//!
//! Fresco turns a short pitch into a multi-scene movie: scenario text,
//! character/setting/prop portraits, per-scene images with consistent
//! subjects, per-scene video clips, voiceover, and music, by orchestrating
//! calls to generative text, image, video, speech, and music services.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fresco::{
//!     ChirpClient, FrescoConfig, GcsClient, GeminiImageClient, GeminiTextClient,
//!     GenerationServices, ImagenClient, Language, LyriaClient, ScenarioRequest, VeoClient,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     fresco::init_tracing();
//!     let config = FrescoConfig::load()?;
//!     let store = Arc::new(GcsClient::new(&config.bucket)?);
//!
//!     let services = GenerationServices {
//!         text: Arc::new(GeminiTextClient::new(config.clone())?),
//!         image: Arc::new(ImagenClient::new(config.clone())?),
//!         reference_image: Arc::new(GeminiImageClient::new(config.clone(), store.clone())?),
//!         video: Arc::new(VeoClient::new(config.clone())?),
//!         speech: Arc::new(ChirpClient::new(config.clone())?),
//!         music: Arc::new(LyriaClient::new(config.clone())?),
//!         store,
//!     };
//!
//!     let request = ScenarioRequest {
//!         name: "Lighthouse".into(),
//!         pitch: "A lighthouse keeper befriends a sea monster".into(),
//!         num_scenes: 3,
//!         style: "watercolor".into(),
//!         aspect_ratio: "16:9".into(),
//!         duration_seconds: 8,
//!         language: Language::new("English (United States)", "en-US"),
//!         model: None,
//!         thinking_budget: 0,
//!     };
//!     let scenario = fresco::generate_scenario(&services, &request).await?;
//!     println!("{}", scenario.scenario);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Fresco is organized as a workspace with focused crates:
//!
//! - `fresco_core` — scenario data model and the unit-result contract
//! - `fresco_interface` — collaborator trait definitions
//! - `fresco_error` — error types and content-safety translation
//! - `fresco_models` — Vertex AI service implementations
//! - `fresco_pipeline` — the generation orchestration pipeline
//!
//! This crate (`fresco`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use fresco_core::{
    Composition, DialogueLine, Entity, EntityKind, GenerationResult, Genre, ImagePrompt,
    Language, Mood, PromptReference, Scenario, Scene, VideoPrompt,
};
pub use fresco_error::{
    AudioGenError, AudioGenErrorKind, ConfigError, FrescoError, FrescoErrorKind, FrescoResult,
    HttpError, ImageGenError, ImageGenErrorKind, PipelineError, PipelineErrorKind, StorageError,
    StorageErrorKind, TextGenError, TextGenErrorKind, VideoGenError, VideoGenErrorKind,
    rai_user_message,
};
pub use fresco_interface::{
    ImageGenerator, ImagePrediction, MusicGenerator, ObjectStore, Part, ReferenceImageGenerator,
    ResponseFormat, SpeechSynthesizer, TextGenerator, TextRequest, VideoGenerator,
    VideoJobRequest, VideoOperation, VideoPollStatus,
};
pub use fresco_models::{
    ChirpClient, FrescoConfig, GcsClient, GeminiImageClient, GeminiTextClient, ImagenClient,
    LyriaClient, RetryPolicy, VeoClient,
};
pub use fresco_pipeline::{
    CharacterRework, CharacterUpdate, GenerationServices, ScenarioRequest, TextRegeneration,
    VideoRunSettings, edit_image, generate_music, generate_scenario, generate_scene_video,
    generate_storyboard, generate_videos, generate_voiceovers, image_prompt_block,
    regenerate_character_and_scenario, regenerate_character_from_text,
    regenerate_scenario_from_setting, regenerate_scene_image, scene_image_prompt_block,
    video_prompt_block,
};

/// Initialize a `tracing` subscriber honoring `RUST_LOG`.
///
/// Call once at process start; later calls are ignored so tests can call
/// it freely.
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .try_init();
}
