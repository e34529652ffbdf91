//! Video generation error types.

/// Specific error conditions for video generation jobs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum VideoGenErrorKind {
    /// API request failed
    #[display("Video generation request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Polling exceeded the wait ceiling. Distinct from provider rejection
    /// so callers can offer "try again later" messaging. The remote job is
    /// not cancelled; only the local poll loop stops.
    #[display("Video generation timed out after {}s", elapsed_secs)]
    Timeout {
        /// Seconds elapsed before the poll loop gave up
        elapsed_secs: u64,
    },
    /// The operation completed with a provider-reported error
    #[display("Video generation operation failed: {}", _0)]
    OperationFailed(String),
    /// The provider's content-safety filter rejected the result.
    /// Carries the raw provider reason; translate with
    /// [`rai_user_message`](crate::rai_user_message) before display.
    #[display("Video generation was filtered: {}", _0)]
    Filtered(String),
    /// The completed operation carried no video output
    #[display("Video generation operation completed without a video")]
    MissingVideo,
}

/// Video generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use fresco_error::{VideoGenError, VideoGenErrorKind};
///
/// let err = VideoGenError::new(VideoGenErrorKind::Timeout { elapsed_secs: 300 });
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Video Generation Error: {} at line {} in {}", kind, line, file)]
pub struct VideoGenError {
    /// The specific error condition
    pub kind: VideoGenErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl VideoGenError {
    /// Create a new VideoGenError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: VideoGenErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether this error is the poll-ceiling timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, VideoGenErrorKind::Timeout { .. })
    }
}
