//! Prompt templates and response schemas for the text model.

use fresco_core::{Genre, Language, Mood, Scenario};
use serde_json::{Value, json};
use std::fmt::Write;
use strum::IntoEnumIterator;

/// Bullet list of the fixed genre vocabulary.
fn genre_list() -> String {
    Genre::iter().fold(String::new(), |mut out, genre| {
        let _ = writeln!(out, "- {}", genre);
        out
    })
}

/// Bullet list of the fixed mood vocabulary.
fn mood_list() -> String {
    Mood::iter().fold(String::new(), |mut out, mood| {
        let _ = writeln!(out, "- {}", mood);
        out
    })
}

/// `Name: description` lines for an entity list.
fn entity_lines(entities: &[fresco_core::Entity]) -> String {
    entities.iter().fold(String::new(), |mut out, entity| {
        let _ = writeln!(out, "{}: {}", entity.name, entity.description);
        out
    })
}

/// Prompt instructing the model to write the scenario for a pitch.
///
/// The model picks one genre and one mood from the fixed vocabularies,
/// writes an English-only music brief, and emits characters and settings
/// with layered descriptions, all as a single JSON object.
pub fn scenario_prompt(pitch: &str, language: &Language) -> String {
    format!(
        r#"You are tasked with generating a creative scenario for a short movie and creating prompts for storyboard illustrations. Follow these instructions carefully:
1. First, you will be given a story pitch. This story pitch will be the foundation for your scenario.

<pitch>
{pitch}
</pitch>

2. Generate a scenario in {lang} for a movie based on the story pitch. Stick as close as possible to the pitch. Do not include children in your scenario.

3. What Music Genre will best fit this video, pick from:
{genres}
4. What is the mood of this video, pick from:
{moods}
5. Generate a short description of the music, in English only, that will be used in the video. No references to the story, no references to known artists or songs.

6. Format your output as follows:
- First, provide a detailed description of your scenario in {lang}.
- Then from this scenario provide a short description of each character in the story inside the characters key.
- Then from this scenario provide a short description of each setting in the story inside the settings key.

Format the response as a JSON object.
Here's an example of how your output should be structured:
{{
 "scenario": "[Brief description of your creative scenario based on the given story pitch]",
 "genre": "[Music genre]",
 "mood": "[Mood]",
 "music": "[Short description of the music that will be used in the video, no references to the story, no references to known artists or songs]",
 "language": {{
   "name": "{lang}",
   "code": "{code}"
 }},
 "characters": [
  {{
    "name": "[character 1 name]",
    "description": "[character 1 description in {lang}. Be hyper-specific and affirmative. Include age, gender, ethnicity, specific facial features if any, hair style and color, facial hair or absence of it for male, skin details and exact clothing, including textures and accessories.]"
  }}
 ],
 "settings": [
  {{
    "name": "[setting 1 name]",
    "description": "[setting 1 description in {lang}. This description establishes the atmosphere, lighting, and key features that must remain consistent. Be evocative: describe the mood, the materials, the lighting, and even the smell or feeling of the air.]"
  }}
 ]
}}

Remember, your goal is to create a compelling and visually interesting story that can be effectively illustrated through a storyboard. Be creative, consistent, and detailed in your scenario and prompts.
"#,
        pitch = pitch,
        lang = language.name,
        code = language.code,
        genres = genre_list(),
        moods = mood_list(),
    )
}

/// Prompt instructing the model to emit exactly `num_scenes` scenes for a
/// scenario. Used together with [`scenes_response_schema`], which pins the
/// structure of every scene.
pub fn scenes_prompt(
    scenario: &Scenario,
    num_scenes: usize,
    style: &str,
    language: &Language,
) -> String {
    format!(
        r#"You are tasked with generating creative scenes for a short movie and creating prompts for storyboard illustrations. Follow these instructions carefully:
1. First, you will be given a scenario in {scenario_lang}. This scenario will be the foundation for your storyboard.

<scenario>
{scenario_text}
</scenario>

<characters>
{characters}</characters>

<settings>
{settings}</settings>

<props>
{props}</props>

<music>
{music}
</music>

<mood>
{mood}
</mood>

2. Generate exactly {num_scenes} creative scenes to create a storyboard illustrating the scenario. For each scene, provide:
 1. A structured image prompt (imagePrompt) for the first frame of the video. Style defines the visual language and should be {style}. Composition describes the shot: shot_type (e.g. Cinematic close-up, Wide establishing shot), lighting (e.g. high-contrast, soft natural light), overall_mood (e.g. gritty realism, atmospheric). Subject lists the names of the characters visually present, Prop the names of featured props, Context the names of the settings in view; use the exact names from the tags above. Scene describes what is visible in the frame, in {lang}. No children.
 2. A structured video prompt (videoPrompt), focusing on the movement of the characters and objects in the scene. Action describes precisely what the subjects do within the clip. Camera_Motion states the camera movement explicitly, even if static. Ambiance_Audio describes diegetic sound only; do not mention music or narration. Dialogue assigns short natural lines, with each speaker identified by physical description, not name (e.g. "The man in the blue shirt"). The dialogue across all scenes should make the story comprehensible for the viewer.
 3. A scene description in {lang} explaining what happens (description). You can use the character(s) name(s) in your descriptions.
 4. A short, narrator voiceover text in {lang}. One full sentence, 6s max. (voiceover). You can use the character(s) name(s) in your voiceovers.
Ensure that the scenes, when viewed in sequence, tell a coherent story.

Format the response as a JSON object with a single "scenes" array.
Remember, your goal is to create a compelling and visually interesting story that can be effectively illustrated through a storyboard. Be creative, consistent, and detailed in your prompts.
Remember, the number of scenes should be exactly {num_scenes}.
"#,
        scenario_lang = scenario.language.name,
        scenario_text = scenario.scenario,
        characters = entity_lines(&scenario.characters),
        settings = entity_lines(&scenario.settings),
        props = entity_lines(&scenario.props),
        music = scenario.music,
        mood = scenario.mood,
        num_scenes = num_scenes,
        style = style,
        lang = language.name,
    )
}

/// Strict response schema for the scenes call.
///
/// Every object and array field is required and non-nullable so the model
/// cannot omit structure; scene-count enforcement stays with the model, and
/// the pipeline neither truncates nor pads the result.
pub fn scenes_response_schema() -> Value {
    let name_reference = json!({
        "type": "ARRAY",
        "nullable": false,
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING", "nullable": false }
            },
            "required": ["name"],
        }
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "scenes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "imagePrompt": {
                            "type": "OBJECT",
                            "nullable": false,
                            "properties": {
                                "Style": { "type": "STRING", "nullable": false },
                                "Composition": {
                                    "type": "OBJECT",
                                    "nullable": false,
                                    "properties": {
                                        "shot_type": { "type": "STRING", "nullable": false },
                                        "lighting": { "type": "STRING", "nullable": false },
                                        "overall_mood": { "type": "STRING", "nullable": false }
                                    },
                                    "required": ["shot_type", "lighting", "overall_mood"],
                                },
                                "Subject": name_reference.clone(),
                                "Prop": name_reference.clone(),
                                "Context": name_reference,
                                "Scene": { "type": "STRING", "nullable": false }
                            },
                            "required": ["Style", "Composition", "Subject", "Prop", "Context", "Scene"],
                        },
                        "videoPrompt": {
                            "type": "OBJECT",
                            "nullable": false,
                            "properties": {
                                "Action": { "type": "STRING", "nullable": false },
                                "Camera_Motion": { "type": "STRING", "nullable": false },
                                "Ambiance_Audio": { "type": "STRING", "nullable": false },
                                "Dialogue": {
                                    "type": "ARRAY",
                                    "nullable": false,
                                    "items": {
                                        "type": "OBJECT",
                                        "properties": {
                                            "speaker": { "type": "STRING", "nullable": false },
                                            "line": { "type": "STRING", "nullable": false }
                                        },
                                        "required": ["speaker", "line"],
                                    }
                                }
                            },
                            "required": ["Action", "Camera_Motion", "Ambiance_Audio", "Dialogue"],
                        },
                        "description": { "type": "STRING", "nullable": false },
                        "voiceover": { "type": "STRING", "nullable": false },
                        "charactersPresent": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": ["imagePrompt", "videoPrompt", "description", "voiceover", "charactersPresent"],
                }
            }
        },
        "required": ["scenes"],
    })
}

/// Prompt for rewriting a character description and the scenario text to
/// match a reference image, preserving every other character.
pub fn regenerate_character_prompt(
    current_scenario: &str,
    character_name: &str,
    current_description: &str,
    all_characters: &[fresco_core::Entity],
) -> String {
    let character_list = all_characters.iter().fold(String::new(), |mut out, c| {
        let _ = writeln!(out, "- {}: {}", c.name, c.description);
        out
    });

    format!(
        r#"Analyze the provided image and update both the character description and scenario text to match the visual characteristics shown.

CURRENT SCENARIO:
"{current_scenario}"

ALL CHARACTERS IN THE STORY:
{character_list}
CHARACTER TO UPDATE ({character_name}):
"{current_description}"

INSTRUCTIONS:
1. Examine the uploaded image carefully
2. Update ONLY the description of {character_name} to accurately reflect what you see in the image (appearance, clothing, features, etc.)
3. Update any references to {character_name} in the scenario text to maintain consistency with the new appearance
4. PRESERVE ALL OTHER CHARACTERS - do not remove or modify descriptions of other characters
5. Keep the story as a multi-character narrative - maintain all character interactions and plot elements
6. Preserve the story narrative and flow, but ensure all descriptions of {character_name} match the visual characteristics
7. Keep the same tone and style as the original text

Return both the updated scenario (maintaining all characters) and the updated description for {character_name}."#,
    )
}

/// Response schema for [`regenerate_character_prompt`].
pub fn character_update_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "updatedScenario": { "type": "STRING", "nullable": false },
            "updatedCharacter": {
                "type": "OBJECT",
                "nullable": false,
                "properties": {
                    "name": { "type": "STRING", "nullable": false },
                    "description": { "type": "STRING", "nullable": false }
                },
                "required": ["name", "description"],
            }
        },
        "required": ["updatedScenario", "updatedCharacter"],
    })
}

/// Prompt for rewriting the scenario text after an entity was renamed or
/// redescribed. `noun` is "character" or "setting".
pub fn rewrite_scenario_prompt(
    noun: &str,
    current_scenario: &str,
    old_name: &str,
    new_name: &str,
    new_description: &str,
) -> String {
    format!(
        r#"Update the following scenario to reflect {noun} changes. The {noun} previously named "{old_name}" is now named "{new_name}" with the following updated description: "{new_description}".

CURRENT SCENARIO:
"{current_scenario}"

INSTRUCTIONS:
1. Replace all references to "{old_name}" with "{new_name}" (if the name changed)
2. Update any {noun} descriptions in the scenario to match the new description
3. Ensure the story flow and narrative remain coherent
4. Maintain the same tone and style as the original scenario
5. Keep the scenario length similar to the original

Return ONLY the updated scenario text, no additional formatting or explanations."#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fresco_core::Entity;

    #[test]
    fn test_scenario_prompt_embeds_vocabularies() {
        let language = Language::new("English (United States)", "en-US");
        let prompt = scenario_prompt("A lighthouse keeper befriends a sea monster", &language);
        assert!(prompt.contains("<pitch>"));
        assert!(prompt.contains("A lighthouse keeper befriends a sea monster"));
        assert!(prompt.contains("- R&B & Soul"));
        assert!(prompt.contains("- Inspirational"));
        assert!(prompt.contains("\"code\": \"en-US\""));
    }

    #[test]
    fn test_scenes_schema_requires_all_structure() {
        let schema = scenes_response_schema();
        let scene_schema = &schema["properties"]["scenes"]["items"];
        let required = scene_schema["required"].as_array().unwrap();
        for field in ["imagePrompt", "videoPrompt", "description", "voiceover"] {
            assert!(required.iter().any(|v| v == field), "missing {field}");
        }
        assert_eq!(
            scene_schema["properties"]["imagePrompt"]["properties"]["Subject"]["type"],
            "ARRAY"
        );
    }

    #[test]
    fn test_regenerate_character_prompt_lists_cast() {
        let cast = vec![Entity::new("Ada", "a keeper"), Entity::new("Grace", "a diver")];
        let prompt = regenerate_character_prompt("Once upon a time", "Ada", "a keeper", &cast);
        assert!(prompt.contains("- Grace: a diver"));
        assert!(prompt.contains("CHARACTER TO UPDATE (Ada)"));
    }
}
