//! Scene video generation: submit one job per scene image and poll each to
//! completion.

use crate::prompt::video_prompt_block;
use crate::services::GenerationServices;
use fresco_core::{GenerationResult, Scene};
use fresco_error::{
    FrescoError, FrescoErrorKind, FrescoResult, PipelineError, PipelineErrorKind, VideoGenError,
    VideoGenErrorKind, rai_user_message,
};
use fresco_interface::{VideoJobRequest, VideoOperation, VideoPollStatus};
use futures::future::join_all;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Parameters for a video generation run.
#[derive(Debug, Clone)]
pub struct VideoRunSettings {
    /// Requested aspect ratio; anything other than "9:16" renders as "16:9"
    pub aspect_ratio: String,
    /// Video model identifier
    pub model: String,
    /// Whether the model should generate an audio track
    pub generate_audio: bool,
    /// Clip duration in seconds
    pub duration_seconds: u32,
    /// Interval between operation polls
    pub poll_interval: Duration,
    /// Ceiling on total poll time per scene
    pub poll_timeout: Duration,
}

impl Default for VideoRunSettings {
    fn default() -> Self {
        Self {
            aspect_ratio: "16:9".to_string(),
            model: "veo-3.0-generate-001".to_string(),
            generate_audio: true,
            duration_seconds: 8,
            poll_interval: Duration::from_secs(2),
            poll_timeout: Duration::from_secs(5 * 60),
        }
    }
}

impl VideoRunSettings {
    /// Only portrait 9:16 is honored as-is; every other request renders
    /// landscape.
    fn effective_aspect_ratio(&self) -> &str {
        if self.aspect_ratio == "9:16" { "9:16" } else { "16:9" }
    }
}

/// Generate video clips for every scene that has a generated image.
///
/// Scenes without an image are filtered out before the fan-out. All jobs
/// run concurrently and independently: one scene's failure — including a
/// poll timeout — never cancels its siblings. The result vector matches the
/// order of the image-bearing input scenes, one entry per job, each either
/// the output video URI or that scene's failure message.
#[instrument(skip(services, scenes, settings), fields(scenes = scenes.len()))]
pub async fn generate_videos(
    services: &GenerationServices,
    scenes: &[Scene],
    settings: &VideoRunSettings,
) -> Vec<GenerationResult<String>> {
    debug!("Generating videos in parallel");
    let tasks = scenes
        .iter()
        .enumerate()
        .filter(|(_, scene)| scene.image_gcs_uri.is_some())
        .map(|(index, scene)| async move {
            debug!(scene = index + 1, "Starting video generation");
            match generate_scene_video(services, scene, settings).await {
                Ok(uri) => {
                    debug!(scene = index + 1, uri = %uri, "Video generated");
                    GenerationResult::success(uri)
                }
                Err(e) => {
                    warn!(scene = index + 1, error = %e, "Video generation failed");
                    GenerationResult::failure(video_failure_message(&e))
                }
            }
        });
    join_all(tasks).await
}

/// Generate the video clip for a single scene: submit the job, then poll
/// until done or the ceiling elapses.
///
/// # Errors
///
/// - [`VideoGenErrorKind::Timeout`] when the poll ceiling elapses. The
///   remote job keeps running; only the local wait stops.
/// - [`VideoGenErrorKind::Filtered`] / [`VideoGenErrorKind::OperationFailed`]
///   when the provider rejects or fails the completed operation.
pub async fn generate_scene_video(
    services: &GenerationServices,
    scene: &Scene,
    settings: &VideoRunSettings,
) -> FrescoResult<String> {
    let image_gcs_uri = scene.image_gcs_uri.clone().ok_or_else(|| {
        PipelineError::new(PipelineErrorKind::VideoGeneration(
            "scene has no generated image".to_string(),
        ))
    })?;

    // Keep the model from burning captions into the frame; narration and
    // subtitles are separate layers.
    let prompt = format!("{}\nSubtitles: off", video_prompt_block(&scene.video_prompt));

    let request = VideoJobRequest {
        prompt,
        image_gcs_uri,
        aspect_ratio: settings.effective_aspect_ratio().to_string(),
        model: settings.model.clone(),
        generate_audio: settings.generate_audio,
        duration_seconds: settings.duration_seconds,
    };

    let operation = services.video.submit(&request).await?;
    let status = poll_until_done(services, &operation, settings).await?;

    if let Some(message) = status.error_message {
        return Err(VideoGenError::new(VideoGenErrorKind::OperationFailed(message)).into());
    }
    if let Some(reason) = status.rai_media_filtered_reasons.first() {
        return Err(VideoGenError::new(VideoGenErrorKind::Filtered(reason.clone())).into());
    }
    status
        .video_uris
        .into_iter()
        .next()
        .ok_or_else(|| VideoGenError::new(VideoGenErrorKind::MissingVideo).into())
}

/// Poll an operation at a fixed interval until `done` or the ceiling
/// elapses. An explicit loop with a time budget, so pathological poll
/// counts cannot grow the call stack.
async fn poll_until_done(
    services: &GenerationServices,
    operation: &VideoOperation,
    settings: &VideoRunSettings,
) -> FrescoResult<VideoPollStatus> {
    let started = Instant::now();
    loop {
        let elapsed = started.elapsed();
        if elapsed > settings.poll_timeout {
            warn!(operation = %operation.name, elapsed_secs = elapsed.as_secs(), "Operation timed out");
            return Err(VideoGenError::new(VideoGenErrorKind::Timeout {
                elapsed_secs: elapsed.as_secs(),
            })
            .into());
        }

        debug!(operation = %operation.name, elapsed_ms = elapsed.as_millis() as u64, "Polling operation");
        let status = services.video.poll(operation).await?;
        if status.done {
            return Ok(status);
        }
        tokio::time::sleep(settings.poll_interval).await;
    }
}

/// User-facing message for a failed scene video. Provider rejections
/// translate through the content-safety table; everything else keeps its
/// diagnostic message.
fn video_failure_message(error: &FrescoError) -> String {
    if let FrescoErrorKind::VideoGen(e) = error.kind() {
        match &e.kind {
            VideoGenErrorKind::Filtered(reason) => return rai_user_message(reason),
            VideoGenErrorKind::OperationFailed(message) => return rai_user_message(message),
            _ => {}
        }
    }
    error.to_string()
}
