//! Deterministic serialization of structured prompts.
//!
//! The image and video models expect prompts in a fixed-key-order,
//! two-space-indented `key: value` block format. Field order is a
//! compatibility contract with the models' learned expectations, so these
//! functions emit keys in exactly the documented order and nothing else —
//! no timestamps, no randomness. Values render on a single line; embedded
//! newlines become spaces.

use fresco_core::{ImagePrompt, PromptReference, VideoPrompt};
use std::fmt::Write;

/// Render a scalar value on one line.
fn scalar(value: &str) -> String {
    value.replace('\n', " ")
}

/// Serialize an image prompt with entity references inlined.
///
/// Key order: `Style`, `Scene`, `Composition{shot_type, lighting,
/// overall_mood}`, `Subject[]`, `Context[]`. Used for the text-only image
/// generation mode, where entity descriptions travel in the prompt itself.
///
/// # Examples
///
/// ```
/// use fresco_core::{Composition, ImagePrompt};
/// use fresco_pipeline::image_prompt_block;
///
/// let prompt = ImagePrompt {
///     style: "watercolor".into(),
///     scene: "A lighthouse at dusk".into(),
///     composition: Composition {
///         shot_type: "Wide establishing shot".into(),
///         lighting: "soft dusk light".into(),
///         overall_mood: "wistful".into(),
///     },
///     subject: vec![],
///     prop: vec![],
///     context: vec![],
/// };
/// let block = image_prompt_block(&prompt);
/// assert!(block.starts_with("Style: watercolor\n"));
/// ```
pub fn image_prompt_block(prompt: &ImagePrompt) -> String {
    let mut out = String::new();
    write_style_scene_composition(&mut out, prompt);
    write_reference_list(&mut out, "Subject", &prompt.subject);
    write_reference_list(&mut out, "Context", &prompt.context);
    out
}

/// Serialize the reduced image prompt used with reference-image
/// conditioning: `Style`, `Scene`, `Composition` only. Entity appearance is
/// supplied by the attached reference images, not by inlined text.
pub fn scene_image_prompt_block(prompt: &ImagePrompt) -> String {
    let mut out = String::new();
    write_style_scene_composition(&mut out, prompt);
    out
}

fn write_style_scene_composition(out: &mut String, prompt: &ImagePrompt) {
    let _ = writeln!(out, "Style: {}", scalar(&prompt.style));
    let _ = writeln!(out, "Scene: {}", scalar(&prompt.scene));
    let _ = writeln!(out, "Composition:");
    let _ = writeln!(out, "  shot_type: {}", scalar(&prompt.composition.shot_type));
    let _ = writeln!(out, "  lighting: {}", scalar(&prompt.composition.lighting));
    let _ = writeln!(
        out,
        "  overall_mood: {}",
        scalar(&prompt.composition.overall_mood)
    );
}

fn write_reference_list(out: &mut String, key: &str, references: &[PromptReference]) {
    let _ = writeln!(out, "{}:", key);
    for reference in references {
        let _ = writeln!(out, "  - name: {}", scalar(&reference.name));
        let _ = writeln!(
            out,
            "    description: {}",
            scalar(reference.description.as_deref().unwrap_or(""))
        );
    }
}

/// Serialize a video prompt.
///
/// Key order: `Action`, `Camera_Motion`, `Ambiance_Audio`,
/// `Dialogue[{speaker, line}]`.
pub fn video_prompt_block(prompt: &VideoPrompt) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Action: {}", scalar(&prompt.action));
    let _ = writeln!(out, "Camera_Motion: {}", scalar(&prompt.camera_motion));
    let _ = writeln!(out, "Ambiance_Audio: {}", scalar(&prompt.ambiance_audio));
    let _ = writeln!(out, "Dialogue:");
    for line in &prompt.dialogue {
        let _ = writeln!(out, "  - speaker: {}", scalar(&line.speaker));
        let _ = writeln!(out, "    line: {}", scalar(&line.line));
    }
    out
}

/// Serialize an entity portrait prompt.
///
/// Key order: `style`, `shot_type`, `description`. Shot type varies by
/// entity kind (characters medium, settings wide, props close).
pub fn entity_portrait_block(style: &str, shot_type: &str, description: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "style: {}", scalar(style));
    let _ = writeln!(out, "shot_type: {}", scalar(shot_type));
    let _ = writeln!(out, "description: {}", scalar(description));
    out
}
