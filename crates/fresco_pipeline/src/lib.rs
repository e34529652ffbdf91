//! Generation orchestration pipeline.
//!
//! This crate turns a pitch into a rendered storyboard by sequencing calls
//! to the generative collaborators behind the `fresco_interface` traits:
//!
//! 1. [`generate_scenario`] writes the scenario and fans out portrait
//!    images for every character, setting, and prop.
//! 2. [`generate_storyboard`] produces the scenes and fans out per-scene
//!    images, each conditioned on the portraits of the entities it
//!    references.
//! 3. [`generate_videos`] submits one video job per scene image and polls
//!    each to completion.
//! 4. [`generate_music`] and [`generate_voiceovers`] add the audio layers,
//!    and the regeneration actions rework single entities consistently.
//!
//! Failure discipline throughout: parsing and text-model failures are fatal
//! and propagate as errors; anything scoped to one entity, one scene, or
//! one clip is isolated in a [`GenerationResult`](fresco_core::GenerationResult)
//! and never disturbs its siblings. Fan-outs run concurrently in-flight and
//! aggregate in input order.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audio;
mod extraction;
mod prompt;
mod prompts;
mod regenerate;
mod scenario;
mod services;
mod storyboard;
mod video;

pub use audio::{generate_music, generate_voiceovers};
pub use extraction::{extract_json, parse_json};
pub use prompt::{
    entity_portrait_block, image_prompt_block, scene_image_prompt_block, video_prompt_block,
};
pub use regenerate::{
    CharacterRework, CharacterUpdate, TextRegeneration, edit_image,
    regenerate_character_and_scenario, regenerate_character_from_text,
    regenerate_scenario_from_setting, regenerate_scene_image,
};
pub use scenario::{ScenarioRequest, generate_scenario};
pub use services::GenerationServices;
pub use storyboard::generate_storyboard;
pub use video::{VideoRunSettings, generate_scene_video, generate_videos};
