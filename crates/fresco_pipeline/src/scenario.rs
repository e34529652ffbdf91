//! Scenario generation: pitch → narrative text, cast, and portraits.

use crate::extraction::{extract_json, parse_json};
use crate::prompt::entity_portrait_block;
use crate::prompts::scenario_prompt;
use crate::services::GenerationServices;
use fresco_core::{
    Entity, EntityKind, GenerationResult, Genre, Language, Mood, Scenario,
};
use fresco_error::{FrescoResult, PipelineError, PipelineErrorKind, rai_user_message};
use fresco_interface::TextRequest;
use futures::future::join_all;
use serde::Deserialize;
use tracing::{debug, error, instrument, warn};

/// Inputs for [`generate_scenario`].
#[derive(Debug, Clone)]
pub struct ScenarioRequest {
    /// Display name of the project
    pub name: String,
    /// The user's story pitch
    pub pitch: String,
    /// Scene count requested for the later storyboard step
    pub num_scenes: usize,
    /// Visual style, e.g. "watercolor"
    pub style: String,
    /// Aspect ratio for settings and scene media, e.g. "16:9"
    pub aspect_ratio: String,
    /// Target duration of each scene clip in seconds
    pub duration_seconds: u32,
    /// Language for narrative text and voiceover
    pub language: Language,
    /// Text model override; the client default when `None`
    pub model: Option<String>,
    /// Thinking-token budget for the text call
    pub thinking_budget: i32,
}

/// The fields the text model writes; caller-supplied fields are merged in
/// afterwards.
#[derive(Debug, Deserialize)]
struct ScenarioDraft {
    scenario: String,
    genre: Genre,
    mood: Mood,
    music: String,
    characters: Vec<Entity>,
    settings: Vec<Entity>,
    #[serde(default)]
    props: Vec<Entity>,
}

/// Generate a scenario from a pitch, then fan out portrait images for every
/// character, setting, and prop.
///
/// Text-model and parse failures abort the whole operation. Per-entity
/// image failures never do: a filtered or failed portrait leaves that
/// entity's `image_gcs_uri` empty and its siblings untouched.
#[instrument(skip(services, request), fields(name = %request.name))]
pub async fn generate_scenario(
    services: &GenerationServices,
    request: &ScenarioRequest,
) -> FrescoResult<Scenario> {
    match generate_scenario_inner(services, request).await {
        Ok(scenario) => Ok(scenario),
        Err(e) => {
            error!(error = %e, "Scenario generation failed");
            Err(PipelineError::new(PipelineErrorKind::ScenarioGeneration(e.to_string())).into())
        }
    }
}

async fn generate_scenario_inner(
    services: &GenerationServices,
    request: &ScenarioRequest,
) -> FrescoResult<Scenario> {
    debug!("Creating a scenario");
    let prompt = scenario_prompt(&request.pitch, &request.language);
    let mut text_request =
        TextRequest::json(prompt).with_thinking_budget(request.thinking_budget);
    if let Some(model) = &request.model {
        text_request = text_request.with_model(model);
    }

    let text = services.text.generate(&text_request).await?;
    let draft: ScenarioDraft = parse_json(&extract_json(&text)?)?;

    // The three entity lists fan out concurrently and independently, as do
    // the entities within each list. Results land in input order.
    let (characters, settings, props) = futures::join!(
        annotate_entities(
            services,
            &request.style,
            EntityKind::Character,
            &request.aspect_ratio,
            draft.characters,
        ),
        annotate_entities(
            services,
            &request.style,
            EntityKind::Setting,
            &request.aspect_ratio,
            draft.settings,
        ),
        annotate_entities(
            services,
            &request.style,
            EntityKind::Prop,
            &request.aspect_ratio,
            draft.props,
        ),
    );

    Ok(Scenario {
        name: request.name.clone(),
        pitch: request.pitch.clone(),
        style: request.style.clone(),
        aspect_ratio: request.aspect_ratio.clone(),
        duration_seconds: request.duration_seconds,
        language: request.language.clone(),
        scenario: draft.scenario,
        genre: draft.genre,
        mood: draft.mood,
        music: draft.music,
        music_url: None,
        logo_overlay: None,
        characters,
        settings,
        props,
        scenes: Vec::new(),
    })
}

/// Generate portraits for one entity list, preserving input order.
async fn annotate_entities(
    services: &GenerationServices,
    style: &str,
    kind: EntityKind,
    scenario_aspect_ratio: &str,
    entities: Vec<Entity>,
) -> Vec<Entity> {
    join_all(entities.into_iter().enumerate().map(|(index, entity)| async move {
        debug!(kind = %kind, index = index + 1, name = %entity.name, "Generating portrait image");
        let prompt = entity_portrait_block(style, kind.shot_type(), &entity.description);
        let aspect_ratio = kind.portrait_aspect_ratio(scenario_aspect_ratio);
        let result = portrait_image(services, &prompt, aspect_ratio).await;
        if let Some(message) = result.error_message() {
            warn!(kind = %kind, name = %entity.name, error = %message, "Portrait generation failed");
        }
        Entity {
            image_gcs_uri: result.ok(),
            ..entity
        }
    }))
    .await
}

/// One portrait call, folded into the unit-level result contract: a
/// moderation rejection carries the translated message, any other failure
/// its own message. Neither aborts the batch.
pub(crate) async fn portrait_image(
    services: &GenerationServices,
    prompt: &str,
    aspect_ratio: &str,
) -> GenerationResult<String> {
    match services.image.generate_image(prompt, aspect_ratio, false).await {
        Ok(prediction) => {
            if let Some(reason) = prediction.rai_filtered_reason {
                GenerationResult::failure(rai_user_message(&reason))
            } else if let Some(uri) = prediction.gcs_uri {
                GenerationResult::success(uri)
            } else {
                GenerationResult::failure("Image generation returned no image")
            }
        }
        Err(e) => GenerationResult::failure(e.to_string()),
    }
}
