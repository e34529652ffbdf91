//! Targeted regeneration: rework one entity while keeping the scenario
//! consistent.

use crate::extraction::{extract_json, parse_json};
use crate::prompt::{entity_portrait_block, image_prompt_block};
use crate::prompts::{character_update_schema, regenerate_character_prompt, rewrite_scenario_prompt};
use crate::scenario::portrait_image;
use crate::services::GenerationServices;
use fresco_core::{Entity, GenerationResult, ImagePrompt};
use fresco_error::{FrescoResult, PipelineError, PipelineErrorKind, rai_user_message};
use fresco_interface::{Part, ResponseFormat, TextRequest};
use serde::Deserialize;
use tracing::{debug, error, instrument, warn};

/// A rewritten character name and description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterUpdate {
    /// Character name (unchanged by the image-driven rewrite)
    pub name: String,
    /// Description rewritten to match the reference image
    pub description: String,
}

/// Result of an image-driven character rewrite.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRegeneration {
    /// Scenario text with every mention of the character kept consistent
    pub updated_scenario: String,
    /// The character's rewritten record
    pub updated_character: CharacterUpdate,
}

/// Rewrite a character's description and the scenario text to match a
/// reference image, preserving every other character's description and
/// narrative role.
///
/// Multimodal call: the image plus instructions, with the response bound to
/// a `{updatedScenario, updatedCharacter}` schema.
#[instrument(skip(services, current_scenario, current_description, all_characters))]
pub async fn regenerate_character_and_scenario(
    services: &GenerationServices,
    current_scenario: &str,
    character_name: &str,
    current_description: &str,
    reference_image_uri: &str,
    all_characters: &[Entity],
) -> FrescoResult<TextRegeneration> {
    let prompt = regenerate_character_prompt(
        current_scenario,
        character_name,
        current_description,
        all_characters,
    );
    let request = TextRequest {
        parts: vec![Part::image_uri(reference_image_uri), Part::Text(prompt)],
        response_format: ResponseFormat::Json,
        response_schema: Some(character_update_schema()),
        thinking_budget: -1,
        model: None,
    };

    match regeneration_text(services, &request).await {
        Ok(text) => parse_json(&extract_json(&text)?),
        Err(e) => {
            error!(error = %e, "Character regeneration failed");
            Err(PipelineError::new(PipelineErrorKind::Regeneration(e.to_string())).into())
        }
    }
}

/// Rewrite the scenario text after a setting was renamed or redescribed,
/// preserving tone, length, and coherence.
#[instrument(skip(services, current_scenario, new_description))]
pub async fn regenerate_scenario_from_setting(
    services: &GenerationServices,
    current_scenario: &str,
    old_name: &str,
    new_name: &str,
    new_description: &str,
) -> FrescoResult<String> {
    let prompt = rewrite_scenario_prompt(
        "setting",
        current_scenario,
        old_name,
        new_name,
        new_description,
    );
    let request = TextRequest::text(prompt).with_thinking_budget(-1);

    match regeneration_text(services, &request).await {
        Ok(text) => Ok(text.trim().to_string()),
        Err(e) => {
            error!(error = %e, "Setting regeneration failed");
            Err(PipelineError::new(PipelineErrorKind::Regeneration(e.to_string())).into())
        }
    }
}

/// Result of a text-driven character rewrite: fresh portrait plus rewritten
/// scenario text.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRework {
    /// Scenario text with every mention of the character kept consistent
    pub updated_scenario: String,
    /// Storage URI of the character's new portrait
    pub image_gcs_uri: String,
}

/// Regenerate a character from an edited name/description: generate a new
/// portrait first, then rewrite the scenario text to match.
///
/// Unlike the per-entity fan-out, a moderation rejection here is fatal —
/// there is no partial result worth keeping — and surfaces the translated
/// message.
#[instrument(skip(services, current_scenario, new_description, style))]
pub async fn regenerate_character_from_text(
    services: &GenerationServices,
    current_scenario: &str,
    old_name: &str,
    new_name: &str,
    new_description: &str,
    style: &str,
) -> FrescoResult<CharacterRework> {
    let portrait_prompt = entity_portrait_block(style, "Medium Shot", new_description);
    let prediction = services
        .image
        .generate_image(&portrait_prompt, "1:1", false)
        .await
        .map_err(|e| PipelineError::new(PipelineErrorKind::Regeneration(e.to_string())))?;

    if let Some(reason) = prediction.rai_filtered_reason {
        warn!(reason = %reason, "Portrait regeneration was filtered");
        return Err(
            PipelineError::new(PipelineErrorKind::Regeneration(rai_user_message(&reason))).into(),
        );
    }
    let image_gcs_uri = prediction.gcs_uri.ok_or_else(|| {
        PipelineError::new(PipelineErrorKind::Regeneration(
            "portrait generation returned no image".to_string(),
        ))
    })?;
    debug!(uri = %image_gcs_uri, "New portrait generated");

    let prompt = rewrite_scenario_prompt(
        "character",
        current_scenario,
        old_name,
        new_name,
        new_description,
    );
    let request = TextRequest::text(prompt).with_thinking_budget(-1);
    match regeneration_text(services, &request).await {
        Ok(text) => Ok(CharacterRework {
            updated_scenario: text.trim().to_string(),
            image_gcs_uri,
        }),
        Err(e) => {
            error!(error = %e, "Character rewrite failed");
            Err(PipelineError::new(PipelineErrorKind::Regeneration(e.to_string())).into())
        }
    }
}

/// Regenerate a single scene image from its structured prompt via the
/// schema-based image service.
///
/// Unit-level operation: moderation rejections and failures come back as a
/// [`GenerationResult`] failure with a displayable message.
#[instrument(skip(services, prompt))]
pub async fn regenerate_scene_image(
    services: &GenerationServices,
    prompt: &ImagePrompt,
    aspect_ratio: &str,
) -> GenerationResult<String> {
    portrait_image(services, &image_prompt_block(prompt), aspect_ratio).await
}

/// Conversationally edit an existing image: one multimodal call with the
/// stored image and a plain-language instruction.
///
/// Unit-level operation; transport failures degrade to a generic failure
/// message rather than an error.
#[instrument(skip(services, instruction))]
pub async fn edit_image(
    services: &GenerationServices,
    image_gcs_uri: &str,
    instruction: &str,
) -> GenerationResult<String> {
    let parts = vec![Part::image_uri(image_gcs_uri), Part::text(instruction)];
    match services.reference_image.generate_with_references(&parts).await {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "Image edit failed");
            GenerationResult::failure("An error occurred while editing the image")
        }
    }
}

async fn regeneration_text(
    services: &GenerationServices,
    request: &TextRequest,
) -> FrescoResult<String> {
    services.text.generate(request).await
}
