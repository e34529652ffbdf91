//! Audio layers: music track and per-scene voiceovers.

use crate::services::GenerationServices;
use fresco_core::{GenerationResult, Scenario, Scene};
use fresco_error::FrescoResult;
use futures::future::join_all;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Generate the scenario's music track and store it, returning the storage
/// URI.
///
/// The music brief sent to the model is the genre, the mood, and the
/// scenario's English-only music description; the narrative itself never
/// leaks into the music prompt.
#[instrument(skip(services, scenario), fields(name = %scenario.name))]
pub async fn generate_music(
    services: &GenerationServices,
    scenario: &Scenario,
) -> FrescoResult<String> {
    let prompt = format!("{}, {}, {}", scenario.genre, scenario.mood, scenario.music);
    debug!(prompt = %prompt, "Generating music");

    let bytes = services.music.generate_music(&prompt).await?;
    let key = format!("audio/music-{}.wav", Uuid::new_v4());
    let uri = services.store.upload(&bytes, &key, "audio/wav").await?;
    debug!(uri = %uri, "Music track stored");
    Ok(uri)
}

/// Synthesize one voiceover clip per scene and store each, preserving
/// input order.
///
/// Voiceovers are independent units: a failed synthesis or upload yields a
/// failure entry for that scene and leaves the rest of the batch untouched.
#[instrument(skip(services, scenes), fields(scenes = scenes.len()))]
pub async fn generate_voiceovers(
    services: &GenerationServices,
    scenes: &[Scene],
    language_code: &str,
    voice: Option<&str>,
) -> Vec<GenerationResult<String>> {
    let tasks = scenes.iter().enumerate().map(|(index, scene)| async move {
        debug!(scene = index + 1, "Synthesizing voiceover");
        match voiceover_uri(services, &scene.voiceover, language_code, voice).await {
            Ok(uri) => GenerationResult::success(uri),
            Err(e) => {
                warn!(scene = index + 1, error = %e, "Voiceover synthesis failed");
                GenerationResult::failure(e.to_string())
            }
        }
    });
    join_all(tasks).await
}

async fn voiceover_uri(
    services: &GenerationServices,
    text: &str,
    language_code: &str,
    voice: Option<&str>,
) -> FrescoResult<String> {
    let bytes = services.speech.synthesize(text, language_code, voice).await?;
    let key = format!("audio/voiceover-{}.mp3", Uuid::new_v4());
    services.store.upload(&bytes, &key, "audio/mpeg").await
}
