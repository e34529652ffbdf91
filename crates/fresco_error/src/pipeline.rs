//! Pipeline-level error types.
//!
//! These cover the fatal conditions of the orchestration pipeline: model
//! output that cannot be parsed, and stage failures wrapped with enough
//! context for diagnostics. Per-unit failures (one portrait, one scene
//! image) never surface as these errors.

/// Specific error conditions for pipeline operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Model output could not be parsed as JSON
    #[display("Failed to parse AI response: {}", _0)]
    Parse(String),
    /// No JSON structure was found in the model output
    #[display("No JSON found in response (length: {})", _0)]
    NoJsonFound(usize),
    /// Scenario generation failed
    #[display("Failed to generate scenario: {}", _0)]
    ScenarioGeneration(String),
    /// Storyboard generation failed
    #[display("Failed to generate storyboard: {}", _0)]
    StoryboardGeneration(String),
    /// Video generation failed
    #[display("Failed to generate video(s): {}", _0)]
    VideoGeneration(String),
    /// A regeneration action failed
    #[display("Failed to regenerate: {}", _0)]
    Regeneration(String),
}

/// Pipeline error with source location tracking.
///
/// # Examples
///
/// ```
/// use fresco_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::Parse("expected value".into()));
/// assert!(format!("{}", err).contains("Failed to parse"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
