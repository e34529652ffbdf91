//! Trait definitions for the generative service collaborators.
//!
//! The pipeline consumes every external service through these seams: text,
//! image, video, speech, and music generation plus object storage. The
//! `fresco_models` crate provides Vertex AI implementations; tests provide
//! mocks. No I/O happens in this crate.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{
    ImageGenerator, MusicGenerator, ObjectStore, ReferenceImageGenerator, SpeechSynthesizer,
    TextGenerator, VideoGenerator,
};
pub use types::{
    ImagePrediction, Part, ResponseFormat, TextRequest, VideoJobRequest, VideoOperation,
    VideoPollStatus,
};
