//! Top-level error wrapper types.

use crate::{
    AudioGenError, ConfigError, HttpError, ImageGenError, PipelineError, StorageError,
    TextGenError, VideoGenError,
};

/// This is the foundation error enum, with one variant per error domain in
/// the workspace.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: FrescoError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FrescoErrorKind {
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Text generation error
    #[from(TextGenError)]
    TextGen(TextGenError),
    /// Image generation error
    #[from(ImageGenError)]
    ImageGen(ImageGenError),
    /// Video generation error
    #[from(VideoGenError)]
    VideoGen(VideoGenError),
    /// Audio generation error (speech or music)
    #[from(AudioGenError)]
    AudioGen(AudioGenError),
    /// Object storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Pipeline orchestration error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Fresco error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoResult, ConfigError};
///
/// fn might_fail() -> FrescoResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fresco Error: {}", _0)]
pub struct FrescoError(Box<FrescoErrorKind>);

impl FrescoError {
    /// Create a new error from a kind.
    pub fn new(kind: FrescoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FrescoErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FrescoErrorKind
impl<T> From<T> for FrescoError
where
    T: Into<FrescoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fresco operations.
///
/// # Examples
///
/// ```
/// use fresco_error::{FrescoResult, HttpError};
///
/// fn fetch_data() -> FrescoResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type FrescoResult<T> = std::result::Result<T, FrescoError>;
