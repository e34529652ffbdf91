//! Story entities: characters, settings, and props.

use serde::{Deserialize, Deserializer, Serialize};

/// Which entity list a descriptor belongs to.
///
/// The kind decides the portrait framing: characters are shot at medium
/// distance, settings wide, props close; characters and props render square
/// while settings use the scenario's aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum EntityKind {
    /// A character in the story
    Character,
    /// A location the story plays in
    Setting,
    /// An object the story features
    Prop,
}

impl EntityKind {
    /// Shot type used when generating this entity's portrait image.
    pub fn shot_type(&self) -> &'static str {
        match self {
            EntityKind::Character => "Medium Shot",
            EntityKind::Setting => "Wide Shot",
            EntityKind::Prop => "Close Shot",
        }
    }

    /// Aspect ratio for this entity's portrait image. Settings inherit the
    /// scenario's aspect ratio; everything else is square.
    pub fn portrait_aspect_ratio<'a>(&self, scenario_aspect_ratio: &'a str) -> &'a str {
        match self {
            EntityKind::Setting => scenario_aspect_ratio,
            EntityKind::Character | EntityKind::Prop => "1:1",
        }
    }
}

/// One character, setting, or prop.
///
/// `name` is the join key scene prompts use to reference the entity, so
/// names must be unique within their list (see [`Scenario`](crate::Scenario)).
///
/// # Examples
///
/// ```
/// use fresco_core::Entity;
///
/// let entity = Entity::new("Ada", "A weathered lighthouse keeper in her sixties");
/// assert!(entity.image_gcs_uri.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique name within the owning list
    pub name: String,
    /// Visual description used for prompt building
    #[serde(deserialize_with = "string_or_lines")]
    pub description: String,
    /// Storage URI of the generated portrait, if generation succeeded
    #[serde(rename = "imageGcsUri", default, skip_serializing_if = "Option::is_none")]
    pub image_gcs_uri: Option<String>,
}

impl Entity {
    /// Create a new entity with no generated image.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image_gcs_uri: None,
        }
    }
}

/// The scenario prompt shows the model layered description examples, and
/// models sometimes echo the array form back. Accept either a plain string
/// or an array of lines joined with newlines.
fn string_or_lines<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrLines {
        One(String),
        Many(Vec<String>),
    }

    Ok(match StringOrLines::deserialize(deserializer)? {
        StringOrLines::One(s) => s,
        StringOrLines::Many(lines) => lines.join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_accepts_plain_string() {
        let entity: Entity =
            serde_json::from_str(r#"{"name": "Ada", "description": "A keeper"}"#).unwrap();
        assert_eq!(entity.description, "A keeper");
    }

    #[test]
    fn test_description_accepts_line_array() {
        let entity: Entity = serde_json::from_str(
            r#"{"name": "Ada", "description": ["A keeper", "Weathered face, wool coat"]}"#,
        )
        .unwrap();
        assert_eq!(entity.description, "A keeper\nWeathered face, wool coat");
    }

    #[test]
    fn test_shot_types_by_kind() {
        assert_eq!(EntityKind::Character.shot_type(), "Medium Shot");
        assert_eq!(EntityKind::Setting.shot_type(), "Wide Shot");
        assert_eq!(EntityKind::Prop.shot_type(), "Close Shot");
    }

    #[test]
    fn test_portrait_aspect_ratios() {
        assert_eq!(EntityKind::Character.portrait_aspect_ratio("16:9"), "1:1");
        assert_eq!(EntityKind::Setting.portrait_aspect_ratio("16:9"), "16:9");
        assert_eq!(EntityKind::Prop.portrait_aspect_ratio("9:16"), "1:1");
    }
}
