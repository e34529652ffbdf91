//! Mock collaborators for pipeline tests.
//!
//! Behavior is keyed by prompt content (substring rules), so fan-out tests
//! stay deterministic regardless of completion order.

#![allow(dead_code)]

use async_trait::async_trait;
use fresco_core::{
    Composition, Entity, GenerationResult, Genre, ImagePrompt, Language, Mood, Scenario, Scene,
    VideoPrompt,
};
use fresco_error::{
    AudioGenError, AudioGenErrorKind, FrescoResult, ImageGenError, ImageGenErrorKind,
    TextGenError, TextGenErrorKind,
};
use fresco_interface::{
    ImageGenerator, ImagePrediction, MusicGenerator, ObjectStore, Part, ReferenceImageGenerator,
    SpeechSynthesizer, TextGenerator, TextRequest, VideoGenerator, VideoJobRequest,
    VideoOperation, VideoPollStatus,
};
use fresco_pipeline::GenerationServices;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Text generator that replays scripted responses in order.
#[derive(Default)]
pub struct MockTextGenerator {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<TextRequest>>,
}

impl MockTextGenerator {
    pub fn with_responses(responses: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.iter().map(|r| r.to_string()).collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn request(&self, index: usize) -> TextRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, request: &TextRequest) -> FrescoResult<String> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TextGenError::new(TextGenErrorKind::EmptyResponse).into())
    }
}

/// Outcome rule for the schema-based image mock.
pub enum ImageOutcome {
    /// Moderation rejection with a raw provider reason
    Filtered(String),
    /// Transport-level failure
    Fail(String),
}

/// Schema-based image generator whose outcome depends on prompt content.
#[derive(Default)]
pub struct MockImageGenerator {
    rules: Vec<(String, ImageOutcome)>,
    counter: AtomicUsize,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockImageGenerator {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_rules(rules: Vec<(&str, ImageOutcome)>) -> Arc<Self> {
        Arc::new(Self {
            rules: rules
                .into_iter()
                .map(|(substring, outcome)| (substring.to_string(), outcome))
                .collect(),
            counter: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn call(&self, index: usize) -> (String, String) {
        self.calls.lock().unwrap()[index].clone()
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
        _enhance_prompt: bool,
    ) -> FrescoResult<ImagePrediction> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), aspect_ratio.to_string()));

        for (substring, outcome) in &self.rules {
            if prompt.contains(substring.as_str()) {
                return match outcome {
                    ImageOutcome::Filtered(reason) => Ok(ImagePrediction {
                        gcs_uri: None,
                        rai_filtered_reason: Some(reason.clone()),
                    }),
                    ImageOutcome::Fail(message) => Err(ImageGenError::new(
                        ImageGenErrorKind::ApiRequest(message.clone()),
                    )
                    .into()),
                };
            }
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(ImagePrediction {
            gcs_uri: Some(format!("gs://test-bucket/images/img-{n}.png")),
            rai_filtered_reason: None,
        })
    }
}

/// Outcome rule for the reference-conditioned image mock.
pub enum ReferenceOutcome {
    /// Unit-level failure with a displayable message
    Failure(String),
    /// Transport-level error
    Fail(String),
}

/// Reference-conditioned image generator; rules match against any text part.
#[derive(Default)]
pub struct MockReferenceImageGenerator {
    rules: Vec<(String, ReferenceOutcome)>,
    counter: AtomicUsize,
    calls: Mutex<Vec<Vec<Part>>>,
}

impl MockReferenceImageGenerator {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_rules(rules: Vec<(&str, ReferenceOutcome)>) -> Arc<Self> {
        Arc::new(Self {
            rules: rules
                .into_iter()
                .map(|(substring, outcome)| (substring.to_string(), outcome))
                .collect(),
            counter: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn call(&self, index: usize) -> Vec<Part> {
        self.calls.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl ReferenceImageGenerator for MockReferenceImageGenerator {
    async fn generate_with_references(
        &self,
        parts: &[Part],
    ) -> FrescoResult<GenerationResult<String>> {
        self.calls.lock().unwrap().push(parts.to_vec());

        let text: String = parts
            .iter()
            .filter_map(|part| match part {
                Part::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n");

        for (substring, outcome) in &self.rules {
            if text.contains(substring.as_str()) {
                return match outcome {
                    ReferenceOutcome::Failure(message) => {
                        Ok(GenerationResult::failure(message.clone()))
                    }
                    ReferenceOutcome::Fail(message) => Err(ImageGenError::new(
                        ImageGenErrorKind::ApiRequest(message.clone()),
                    )
                    .into()),
                };
            }
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(GenerationResult::success(format!(
            "gs://test-bucket/images/ref-{n}.png"
        )))
    }
}

/// Outcome rule for the video mock, keyed by the submitted image URI.
pub enum VideoOutcome {
    /// Complete successfully after this many polls
    DoneAfter(usize),
    /// Complete with a moderation rejection
    Filtered(String),
    /// Complete with a provider-reported operation error
    OperationError(String),
    /// Never complete (for timeout tests)
    NeverDone,
}

/// Video generator with scripted per-scene poll behavior.
#[derive(Default)]
pub struct MockVideoGenerator {
    rules: Vec<(String, VideoOutcome)>,
    submits: Mutex<Vec<VideoJobRequest>>,
    poll_counts: Mutex<HashMap<String, usize>>,
}

impl MockVideoGenerator {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_rules(rules: Vec<(&str, VideoOutcome)>) -> Arc<Self> {
        Arc::new(Self {
            rules: rules
                .into_iter()
                .map(|(substring, outcome)| (substring.to_string(), outcome))
                .collect(),
            submits: Mutex::new(Vec::new()),
            poll_counts: Mutex::new(HashMap::new()),
        })
    }

    pub fn submit_count(&self) -> usize {
        self.submits.lock().unwrap().len()
    }

    pub fn submit(&self, index: usize) -> VideoJobRequest {
        self.submits.lock().unwrap()[index].clone()
    }

    fn output_uri(operation: &VideoOperation) -> String {
        let key = operation
            .name
            .rsplit('/')
            .next()
            .unwrap_or("clip")
            .replace(".png", "");
        format!("gs://test-bucket/videos/{key}.mp4")
    }
}

#[async_trait]
impl VideoGenerator for MockVideoGenerator {
    async fn submit(&self, request: &VideoJobRequest) -> FrescoResult<VideoOperation> {
        self.submits.lock().unwrap().push(request.clone());
        Ok(VideoOperation {
            name: format!("operations/{}", request.image_gcs_uri),
            model: request.model.clone(),
        })
    }

    async fn poll(&self, operation: &VideoOperation) -> FrescoResult<VideoPollStatus> {
        let polls = {
            let mut counts = self.poll_counts.lock().unwrap();
            let entry = counts.entry(operation.name.clone()).or_insert(0);
            *entry += 1;
            *entry
        };

        for (substring, outcome) in &self.rules {
            if operation.name.contains(substring.as_str()) {
                return Ok(match outcome {
                    VideoOutcome::DoneAfter(required) if polls >= *required => VideoPollStatus {
                        done: true,
                        video_uris: vec![Self::output_uri(operation)],
                        ..Default::default()
                    },
                    VideoOutcome::DoneAfter(_) => VideoPollStatus::default(),
                    VideoOutcome::Filtered(reason) => VideoPollStatus {
                        done: true,
                        rai_media_filtered_reasons: vec![reason.clone()],
                        ..Default::default()
                    },
                    VideoOutcome::OperationError(message) => VideoPollStatus {
                        done: true,
                        error_message: Some(message.clone()),
                        ..Default::default()
                    },
                    VideoOutcome::NeverDone => VideoPollStatus::default(),
                });
            }
        }

        Ok(VideoPollStatus {
            done: true,
            video_uris: vec![Self::output_uri(operation)],
            ..Default::default()
        })
    }
}

/// Speech synthesizer that fails when the text matches a rule.
#[derive(Default)]
pub struct MockSpeechSynthesizer {
    fail_when: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockSpeechSynthesizer {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_on(substring: &str) -> Arc<Self> {
        Arc::new(Self {
            fail_when: Some(substring.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        _language_code: &str,
        _voice: Option<&str>,
    ) -> FrescoResult<Vec<u8>> {
        self.calls.lock().unwrap().push(text.to_string());
        if let Some(substring) = &self.fail_when {
            if text.contains(substring.as_str()) {
                return Err(AudioGenError::new(AudioGenErrorKind::ApiRequest(
                    "synthesis unavailable".to_string(),
                ))
                .into());
            }
        }
        Ok(vec![0x49, 0x44, 0x33])
    }
}

/// Music generator that records prompts and returns fixed bytes.
#[derive(Default)]
pub struct MockMusicGenerator {
    prompts: Mutex<Vec<String>>,
}

impl MockMusicGenerator {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn prompt(&self, index: usize) -> String {
        self.prompts.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl MusicGenerator for MockMusicGenerator {
    async fn generate_music(&self, prompt: &str) -> FrescoResult<Vec<u8>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(vec![0x52, 0x49, 0x46, 0x46])
    }
}

/// In-memory object store.
#[derive(Default)]
pub struct MockObjectStore {
    uploads: Mutex<Vec<(String, String)>>,
}

impl MockObjectStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn upload_key(&self, index: usize) -> String {
        self.uploads.lock().unwrap()[index].0.clone()
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn upload(&self, _bytes: &[u8], key: &str, content_type: &str) -> FrescoResult<String> {
        self.uploads
            .lock()
            .unwrap()
            .push((key.to_string(), content_type.to_string()));
        Ok(format!("gs://test-bucket/{key}"))
    }

    async fn signed_url(&self, uri: &str, _download: bool) -> FrescoResult<String> {
        Ok(uri.replace("gs://", "https://storage.googleapis.com/"))
    }

    fn mime_type(&self, _uri: &str) -> String {
        "image/png".to_string()
    }
}

/// Bundle of mocks plus the services handle the pipeline consumes.
pub struct TestHarness {
    pub text: Arc<MockTextGenerator>,
    pub image: Arc<MockImageGenerator>,
    pub reference_image: Arc<MockReferenceImageGenerator>,
    pub video: Arc<MockVideoGenerator>,
    pub speech: Arc<MockSpeechSynthesizer>,
    pub music: Arc<MockMusicGenerator>,
    pub store: Arc<MockObjectStore>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            text: MockTextGenerator::with_responses(&[]),
            image: MockImageGenerator::succeeding(),
            reference_image: MockReferenceImageGenerator::succeeding(),
            video: MockVideoGenerator::succeeding(),
            speech: MockSpeechSynthesizer::succeeding(),
            music: MockMusicGenerator::succeeding(),
            store: MockObjectStore::new(),
        }
    }

    pub fn services(&self) -> GenerationServices {
        GenerationServices {
            text: self.text.clone(),
            image: self.image.clone(),
            reference_image: self.reference_image.clone(),
            video: self.video.clone(),
            speech: self.speech.clone(),
            music: self.music.clone(),
            store: self.store.clone(),
        }
    }
}

/// A scenario with generated portraits, ready for storyboard/video tests.
pub fn sample_scenario() -> Scenario {
    Scenario {
        name: "Lighthouse".to_string(),
        pitch: "A lighthouse keeper befriends a sea monster".to_string(),
        style: "watercolor".to_string(),
        aspect_ratio: "16:9".to_string(),
        duration_seconds: 8,
        language: Language::new("English (United States)", "en-US"),
        scenario: "Ada keeps the lamp burning until the sea answers back.".to_string(),
        genre: Genre::Cinematic,
        mood: Mood::Calm,
        music: "Gentle strings over slow waves".to_string(),
        music_url: None,
        logo_overlay: None,
        characters: vec![
            Entity {
                image_gcs_uri: Some("gs://test-bucket/images/ada.png".to_string()),
                ..Entity::new("Ada", "A weathered lighthouse keeper in an oilskin coat")
            },
            Entity {
                image_gcs_uri: Some("gs://test-bucket/images/monster.png".to_string()),
                ..Entity::new("The Monster", "A gentle sea creature with kelp-green scales")
            },
        ],
        settings: vec![Entity {
            image_gcs_uri: Some("gs://test-bucket/images/lighthouse.png".to_string()),
            ..Entity::new("The Lighthouse", "A white tower on a rocky point")
        }],
        props: vec![Entity {
            image_gcs_uri: Some("gs://test-bucket/images/lantern.png".to_string()),
            ..Entity::new("The Lantern", "A brass storm lantern with a cracked pane")
        }],
        scenes: Vec::new(),
    }
}

/// A scene referencing the sample scenario's entities.
pub fn sample_scene(scene_text: &str, characters_present: &[&str]) -> Scene {
    use fresco_core::PromptReference;

    Scene {
        image_prompt: ImagePrompt {
            style: "watercolor".to_string(),
            scene: scene_text.to_string(),
            composition: Composition {
                shot_type: "Wide establishing shot".to_string(),
                lighting: "soft dawn light".to_string(),
                overall_mood: "hopeful".to_string(),
            },
            subject: characters_present
                .iter()
                .map(|name| PromptReference::named(*name))
                .collect(),
            prop: Vec::new(),
            context: vec![PromptReference::named("The Lighthouse")],
        },
        video_prompt: VideoPrompt {
            action: "The keeper waves from the gallery".to_string(),
            camera_motion: "Static wide shot".to_string(),
            ambiance_audio: "Waves and gulls".to_string(),
            dialogue: Vec::new(),
        },
        description: scene_text.to_string(),
        voiceover: format!("Narrator: {scene_text}"),
        characters_present: characters_present.iter().map(|s| s.to_string()).collect(),
        image_gcs_uri: None,
        video_uri: None,
        voiceover_audio_uri: None,
        error_message: None,
    }
}
