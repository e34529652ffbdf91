//! Injected collaborator handles.

use fresco_interface::{
    ImageGenerator, MusicGenerator, ObjectStore, ReferenceImageGenerator, SpeechSynthesizer,
    TextGenerator, VideoGenerator,
};
use std::sync::Arc;

/// The bundle of service handles every pipeline operation runs against.
///
/// Constructed once at process start and passed by reference; the pipeline
/// holds no module-level singletons. Tests substitute mock implementations
/// for any subset of the collaborators.
#[derive(Clone)]
pub struct GenerationServices {
    /// Text generation service
    pub text: Arc<dyn TextGenerator>,
    /// Schema-based image generation service
    pub image: Arc<dyn ImageGenerator>,
    /// Reference-conditioned multimodal image generation service
    pub reference_image: Arc<dyn ReferenceImageGenerator>,
    /// Video generation service
    pub video: Arc<dyn VideoGenerator>,
    /// Text-to-speech service
    pub speech: Arc<dyn SpeechSynthesizer>,
    /// Music generation service
    pub music: Arc<dyn MusicGenerator>,
    /// Object storage service
    pub store: Arc<dyn ObjectStore>,
}

impl std::fmt::Debug for GenerationServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationServices").finish_non_exhaustive()
    }
}
