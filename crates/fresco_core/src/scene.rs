//! One storyboard beat.

use crate::{ImagePrompt, VideoPrompt};
use serde::{Deserialize, Serialize};

/// One storyboard scene with its prompts and generated media.
///
/// Created in bulk by the storyboard generator; the image, video, and
/// voiceover steps fill in their URI fields afterwards. Scenes are never
/// deleted individually (whole-scenario granularity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Structured descriptor for the scene's still image
    pub image_prompt: ImagePrompt,
    /// Structured descriptor for the scene's video clip
    pub video_prompt: VideoPrompt,
    /// What happens in the scene, in the scenario's language
    pub description: String,
    /// One-sentence narrator line for this scene
    pub voiceover: String,
    /// Names of characters visually present, referencing `Scenario.characters`
    #[serde(default)]
    pub characters_present: Vec<String>,
    /// Storage URI of the generated scene image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_gcs_uri: Option<String>,
    /// Storage URI of the generated video clip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_uri: Option<String>,
    /// Storage URI of the synthesized voiceover audio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voiceover_audio_uri: Option<String>,
    /// User-facing message when a generation step failed for this scene
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
