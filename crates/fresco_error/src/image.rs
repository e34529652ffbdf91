//! Image generation error types.

/// Specific error conditions for image generation calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImageGenErrorKind {
    /// API request failed
    #[display("Image generation request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The response contained no predictions
    #[display("Image generation response contained no predictions")]
    NoPredictions,
    /// The prediction carried neither an image URI nor a filter reason
    #[display("Image generation response contained no image URI")]
    MissingUri,
    /// The provider's content-safety filter rejected the request.
    /// Carries the raw provider reason; translate with
    /// [`rai_user_message`](crate::rai_user_message) before display.
    #[display("Image generation was filtered: {}", _0)]
    Filtered(String),
}

/// Image generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use fresco_error::{ImageGenError, ImageGenErrorKind};
///
/// let err = ImageGenError::new(ImageGenErrorKind::NoPredictions);
/// assert!(format!("{}", err).contains("no predictions"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Generation Error: {} at line {} in {}", kind, line, file)]
pub struct ImageGenError {
    /// The specific error condition
    pub kind: ImageGenErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ImageGenError {
    /// Create a new ImageGenError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageGenErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
