//! Object storage error types.

/// Specific error conditions for object storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Upload failed
    #[display("Upload failed for '{}': {}", key, message)]
    Upload {
        /// Object key being written
        key: String,
        /// Error message
        message: String,
    },
    /// Signed URL issuance failed
    #[display("Failed to sign URL for '{}': {}", uri, message)]
    SignedUrl {
        /// Storage URI being signed
        uri: String,
        /// Error message
        message: String,
    },
    /// A storage URI did not have the expected `scheme://bucket/key` shape
    #[display("Invalid storage URI: {}", _0)]
    InvalidUri(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
}

/// Object storage error with source location tracking.
///
/// # Examples
///
/// ```
/// use fresco_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::InvalidUri("not-a-uri".into()));
/// assert!(format!("{}", err).contains("Invalid storage URI"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The specific error condition
    pub kind: StorageErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StorageError {
    /// Create a new StorageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
