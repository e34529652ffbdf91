//! Audio generation error types (speech synthesis and music).

/// Specific error conditions for speech and music generation calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum AudioGenErrorKind {
    /// API request failed
    #[display("Audio generation request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The response contained no audio payload
    #[display("No audio content received from the API")]
    EmptyAudio,
    /// Base64 decoding of the audio payload failed
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
}

/// Audio generation error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Audio Generation Error: {} at line {} in {}", kind, line, file)]
pub struct AudioGenError {
    /// The specific error condition
    pub kind: AudioGenErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl AudioGenError {
    /// Create a new AudioGenError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AudioGenErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
