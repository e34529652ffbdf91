//! Text generation error types.

/// Specific error conditions for text generation calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TextGenErrorKind {
    /// API request failed
    #[display("Text generation request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The model returned no text
    #[display("No text generated from the AI model")]
    EmptyResponse,
}

/// Text generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use fresco_error::{TextGenError, TextGenErrorKind};
///
/// let err = TextGenError::new(TextGenErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("No text generated"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Text Generation Error: {} at line {} in {}", kind, line, file)]
pub struct TextGenError {
    /// The specific error condition
    pub kind: TextGenErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TextGenError {
    /// Create a new TextGenError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TextGenErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
