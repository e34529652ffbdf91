//! Storyboard generation: scenario → scenes with reference-conditioned
//! images.

use crate::extraction::{extract_json, parse_json};
use crate::prompt::{image_prompt_block, scene_image_prompt_block};
use crate::prompts::{scenes_prompt, scenes_response_schema};
use crate::scenario::portrait_image;
use crate::services::GenerationServices;
use fresco_core::{Entity, GenerationResult, Language, PromptReference, Scenario, Scene};
use fresco_error::{FrescoResult, PipelineError, PipelineErrorKind};
use fresco_interface::{Part, TextRequest};
use futures::future::join_all;
use serde::Deserialize;
use tracing::{debug, error, instrument, warn};

/// Reference-image conditioning is the primary generation mode; the
/// text-only fallback stays available for scenes with no characters.
const USE_REFERENCE_IMAGES: bool = true;

#[derive(Debug, Deserialize)]
struct ScenesEnvelope {
    scenes: Vec<Scene>,
}

/// Generate `num_scenes` storyboard scenes for a scenario, then fan out
/// per-scene image generation.
///
/// Each scene's image call attaches the portraits of the characters, props,
/// and settings the scene references, giving visual continuity across the
/// storyboard. Entity references resolve by exact name; names that match
/// nothing are silently dropped. One scene's image failure never disturbs
/// the batch: the scene keeps an empty `image_gcs_uri` and, for moderation
/// rejections, a translated `error_message`.
///
/// Returns an independent copy of the scenario with `scenes` populated; the
/// input is never mutated.
#[instrument(skip(services, scenario, language), fields(name = %scenario.name))]
pub async fn generate_storyboard(
    services: &GenerationServices,
    scenario: &Scenario,
    num_scenes: usize,
    style: &str,
    language: &Language,
) -> FrescoResult<Scenario> {
    match generate_storyboard_inner(services, scenario, num_scenes, style, language).await {
        Ok(updated) => Ok(updated),
        Err(e) => {
            error!(error = %e, "Storyboard generation failed");
            Err(PipelineError::new(PipelineErrorKind::StoryboardGeneration(e.to_string())).into())
        }
    }
}

async fn generate_storyboard_inner(
    services: &GenerationServices,
    scenario: &Scenario,
    num_scenes: usize,
    style: &str,
    language: &Language,
) -> FrescoResult<Scenario> {
    debug!("Creating a storyboard");
    let mut updated = scenario.clone();
    updated.scenes = Vec::new();

    let prompt = scenes_prompt(scenario, num_scenes, style, language);
    let request = TextRequest::json_with_schema(prompt, scenes_response_schema());
    let text = services.text.generate(&request).await?;
    let envelope: ScenesEnvelope = parse_json(&extract_json(&text)?)?;

    // Per-scene image fan-out; results land in input order.
    let scenes = join_all(
        envelope
            .scenes
            .into_iter()
            .enumerate()
            .map(|(index, scene)| scene_with_image(services, &updated, index, scene)),
    )
    .await;

    updated.scenes = scenes;
    Ok(updated)
}

async fn scene_with_image(
    services: &GenerationServices,
    scenario: &Scenario,
    index: usize,
    mut scene: Scene,
) -> Scene {
    debug!(scene = index + 1, "Generating image for scene");
    match scene_image(services, scenario, &scene).await {
        GenerationResult::Success(uri) => {
            debug!(scene = index + 1, uri = %uri, "Scene image generated");
            scene.image_gcs_uri = Some(uri);
        }
        GenerationResult::Failure { error_message } => {
            warn!(scene = index + 1, error = %error_message, "Scene image generation failed");
            scene.image_gcs_uri = None;
            scene.error_message = Some(error_message);
        }
    }
    scene
}

/// Generate one scene image, choosing between the reference-conditioned
/// mode and the text-only fallback.
async fn scene_image(
    services: &GenerationServices,
    scenario: &Scenario,
    scene: &Scene,
) -> GenerationResult<String> {
    if USE_REFERENCE_IMAGES && !scene.characters_present.is_empty() {
        let mut parts = Vec::new();
        push_reference_parts(&mut parts, scenario.subjects_for(&scene.image_prompt.subject));
        push_reference_parts(&mut parts, scenario.props_for(&scene.image_prompt.prop));
        push_reference_parts(&mut parts, scenario.settings_for(&scene.image_prompt.context));
        parts.push(Part::text(scene_image_prompt_block(&scene.image_prompt)));

        match services.reference_image.generate_with_references(&parts).await {
            Ok(result) => result,
            Err(e) => GenerationResult::failure(e.to_string()),
        }
    } else {
        // Text-only mode: entity appearance travels in the prompt itself.
        let mut prompt = scene.image_prompt.clone();
        inline_descriptions(&mut prompt.subject, &scenario.characters);
        inline_descriptions(&mut prompt.prop, &scenario.props);
        inline_descriptions(&mut prompt.context, &scenario.settings);
        portrait_image(
            services,
            &image_prompt_block(&prompt),
            &scenario.aspect_ratio,
        )
        .await
    }
}

/// Append `name` + portrait pairs for the resolved entities. Entities
/// without a generated portrait contribute nothing; the prompt text still
/// carries the scene.
fn push_reference_parts(parts: &mut Vec<Part>, entities: Vec<&Entity>) {
    for entity in entities {
        if let Some(uri) = &entity.image_gcs_uri {
            parts.push(Part::text(&entity.name));
            parts.push(Part::image_uri(uri));
        }
    }
}

/// Fill missing reference descriptions from the entity list, matching by
/// exact name.
fn inline_descriptions(references: &mut [PromptReference], entities: &[Entity]) {
    for reference in references {
        if reference.description.is_none() {
            reference.description = entities
                .iter()
                .find(|entity| entity.name == reference.name)
                .map(|entity| entity.description.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_descriptions_matches_by_exact_name() {
        let entities = vec![Entity::new("Ada", "a keeper"), Entity::new("Grace", "a diver")];
        let mut references = vec![
            PromptReference::named("Grace"),
            PromptReference::named("Nonexistent"),
        ];
        inline_descriptions(&mut references, &entities);
        assert_eq!(references[0].description.as_deref(), Some("a diver"));
        assert!(references[1].description.is_none());
    }

    #[test]
    fn test_push_reference_parts_skips_entities_without_portraits() {
        let with_image = Entity {
            image_gcs_uri: Some("gs://bucket/images/ada.png".into()),
            ..Entity::new("Ada", "a keeper")
        };
        let without_image = Entity::new("Grace", "a diver");
        let mut parts = Vec::new();
        push_reference_parts(&mut parts, vec![&with_image, &without_image]);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], Part::text("Ada"));
        assert_eq!(parts[1], Part::image_uri("gs://bucket/images/ada.png"));
    }
}
