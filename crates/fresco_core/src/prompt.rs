//! Structured prompt descriptors produced by the text model.
//!
//! Field names mirror the JSON keys of the constrained response schema
//! (`Style`, `Camera_Motion`, ...), which in turn mirror the block format
//! the image and video models were tuned against.

use serde::{Deserialize, Serialize};

/// A named reference to an entity in the owning scenario, optionally
/// carrying the full description for text-only prompt mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptReference {
    /// Entity name, resolved against the scenario's entity lists
    pub name: String,
    /// Full description, present only in text-only prompt mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PromptReference {
    /// Reference an entity by name only.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// Shot composition parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    /// e.g. "Cinematic close-up", "Wide establishing shot"
    pub shot_type: String,
    /// e.g. "high-contrast", "soft natural light"
    pub lighting: String,
    /// e.g. "gritty realism", "atmospheric"
    pub overall_mood: String,
}

/// Structured visual descriptor for one scene image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePrompt {
    /// Visual language of the project
    #[serde(rename = "Style")]
    pub style: String,
    /// What happens in the frame
    #[serde(rename = "Scene")]
    pub scene: String,
    /// Shot composition
    #[serde(rename = "Composition")]
    pub composition: Composition,
    /// Characters present, referenced by name
    #[serde(rename = "Subject", default)]
    pub subject: Vec<PromptReference>,
    /// Props present, referenced by name
    #[serde(rename = "Prop", default)]
    pub prop: Vec<PromptReference>,
    /// Settings present, referenced by name
    #[serde(rename = "Context", default)]
    pub context: Vec<PromptReference>,
}

/// One line of scene dialogue. Speakers are identified by physical
/// description rather than name so the video model's grounding stays
/// consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueLine {
    /// Physical description of the speaker, e.g. "the woman with red hair"
    pub speaker: String,
    /// The spoken line
    pub line: String,
}

/// Structured motion/audio descriptor for one scene video clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoPrompt {
    /// What the subjects do within the clip
    #[serde(rename = "Action")]
    pub action: String,
    /// Camera movement, stated even when static
    #[serde(rename = "Camera_Motion")]
    pub camera_motion: String,
    /// Diegetic sound only; music and narration are separate layers
    #[serde(rename = "Ambiance_Audio")]
    pub ambiance_audio: String,
    /// Short dialogue lines that fit the clip
    #[serde(rename = "Dialogue", default)]
    pub dialogue: Vec<DialogueLine>,
}
