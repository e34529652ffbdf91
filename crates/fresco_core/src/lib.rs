//! Core data types for the Fresco storyboard generation library.
//!
//! This crate provides the foundation data types shared by the pipeline,
//! the collaborator interfaces, and their implementations: the `Scenario`
//! aggregate and its parts, the structured image/video prompt descriptors,
//! and the `GenerationResult` unit-level result contract.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod entity;
mod language;
mod music;
mod prompt;
mod result;
mod scenario;
mod scene;

pub use entity::{Entity, EntityKind};
pub use language::Language;
pub use music::{Genre, Mood};
pub use prompt::{Composition, DialogueLine, ImagePrompt, PromptReference, VideoPrompt};
pub use result::GenerationResult;
pub use scenario::Scenario;
pub use scene::Scene;
