//! The root scenario aggregate.

use crate::{Entity, Genre, Language, Mood, PromptReference, Scene};
use serde::{Deserialize, Serialize};

/// The full story package: narrative text, cast, settings, props,
/// mood/music, and scenes.
///
/// Names within `characters`, within `settings`, and within `props` must be
/// unique; they are the only foreign key scene prompts use to reference
/// entities. Duplicate names are a data-integrity violation the caller must
/// prevent.
///
/// Pipeline stages treat a scenario as an immutable input and return an
/// updated copy, so concurrent per-entity and per-scene tasks never share
/// mutable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Display name of the project
    pub name: String,
    /// The user's story pitch
    pub pitch: String,
    /// Visual style, e.g. "watercolor"
    pub style: String,
    /// Aspect ratio for settings, scene images, and video, e.g. "16:9"
    pub aspect_ratio: String,
    /// Target duration of each scene clip in seconds
    pub duration_seconds: u32,
    /// Language for narrative text and voiceover
    pub language: Language,
    /// The narrative text
    pub scenario: String,
    /// Music genre picked from the fixed vocabulary
    pub genre: Genre,
    /// Mood picked from the fixed vocabulary
    pub mood: Mood,
    /// English-only music brief with no story or artist references
    pub music: String,
    /// Storage URI of the generated music track
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_url: Option<String>,
    /// Optional logo overlay image for the final composition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_overlay: Option<String>,
    /// Cast of the story
    pub characters: Vec<Entity>,
    /// Locations of the story
    pub settings: Vec<Entity>,
    /// Featured objects
    #[serde(default)]
    pub props: Vec<Entity>,
    /// Storyboard scenes, populated by the storyboard generator
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

impl Scenario {
    /// Resolve prompt references against an entity list by exact name match.
    ///
    /// References to nonexistent entities silently yield no match; broken
    /// references degrade gracefully rather than erroring.
    ///
    /// # Examples
    ///
    /// ```
    /// use fresco_core::{Entity, PromptReference, Scenario};
    ///
    /// let entities = vec![Entity::new("Ada", "a keeper"), Entity::new("Grace", "a diver")];
    /// let refs = vec![PromptReference::named("Ada"), PromptReference::named("Nonexistent")];
    /// let resolved = Scenario::resolve_references(&entities, &refs);
    /// assert_eq!(resolved.len(), 1);
    /// assert_eq!(resolved[0].name, "Ada");
    /// ```
    pub fn resolve_references<'a>(
        entities: &'a [Entity],
        references: &[PromptReference],
    ) -> Vec<&'a Entity> {
        entities
            .iter()
            .filter(|entity| references.iter().any(|r| r.name == entity.name))
            .collect()
    }

    /// Characters referenced by a scene's `Subject` list.
    pub fn subjects_for<'a>(&'a self, references: &[PromptReference]) -> Vec<&'a Entity> {
        Self::resolve_references(&self.characters, references)
    }

    /// Props referenced by a scene's `Prop` list.
    pub fn props_for<'a>(&'a self, references: &[PromptReference]) -> Vec<&'a Entity> {
        Self::resolve_references(&self.props, references)
    }

    /// Settings referenced by a scene's `Context` list.
    pub fn settings_for<'a>(&'a self, references: &[PromptReference]) -> Vec<&'a Entity> {
        Self::resolve_references(&self.settings, references)
    }
}
