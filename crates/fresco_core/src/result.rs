//! The unit-level generation result contract.

use serde::{Deserialize, Serialize};

/// Discriminated result of one generation unit (one portrait, one scene
/// image, one voiceover).
///
/// Every unit-level operation returns this instead of throwing across the
/// component boundary; thrown errors are reserved for pipeline-fatal
/// conditions. Serialized as `{"success": true, "value": ...}` or
/// `{"success": false, "errorMessage": "..."}`.
///
/// # Examples
///
/// ```
/// use fresco_core::GenerationResult;
///
/// let ok: GenerationResult<String> = GenerationResult::success("gs://bucket/img.png".into());
/// assert!(ok.is_success());
///
/// let failed: GenerationResult<String> = GenerationResult::failure("filtered");
/// assert_eq!(failed.error_message(), Some("filtered"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "GenerationResultRepr<T>",
    into = "GenerationResultRepr<T>",
    bound(serialize = "T: Serialize + Clone", deserialize = "T: serde::de::DeserializeOwned")
)]
pub enum GenerationResult<T> {
    /// The unit produced a value
    Success(T),
    /// The unit failed with a user-facing message
    Failure {
        /// Message safe to surface to end users
        error_message: String,
    },
}

impl<T> GenerationResult<T> {
    /// Wrap a produced value.
    pub fn success(value: T) -> Self {
        GenerationResult::Success(value)
    }

    /// Record a failure with a user-facing message.
    pub fn failure(message: impl Into<String>) -> Self {
        GenerationResult::Failure {
            error_message: message.into(),
        }
    }

    /// Whether the unit succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success(_))
    }

    /// Whether the unit failed.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The produced value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            GenerationResult::Success(value) => Some(value),
            GenerationResult::Failure { .. } => None,
        }
    }

    /// The failure message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            GenerationResult::Success(_) => None,
            GenerationResult::Failure { error_message } => Some(error_message),
        }
    }

    /// Convert into an `Option`, discarding any failure message.
    pub fn ok(self) -> Option<T> {
        match self {
            GenerationResult::Success(value) => Some(value),
            GenerationResult::Failure { .. } => None,
        }
    }

    /// Map the success value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> GenerationResult<U> {
        match self {
            GenerationResult::Success(value) => GenerationResult::Success(f(value)),
            GenerationResult::Failure { error_message } => {
                GenerationResult::Failure { error_message }
            }
        }
    }
}

/// Wire representation: `success` flag plus one of `value`/`errorMessage`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
struct GenerationResultRepr<T> {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl<T: Clone> From<GenerationResult<T>> for GenerationResultRepr<T> {
    fn from(result: GenerationResult<T>) -> Self {
        match result {
            GenerationResult::Success(value) => Self {
                success: true,
                value: Some(value),
                error_message: None,
            },
            GenerationResult::Failure { error_message } => Self {
                success: false,
                value: None,
                error_message: Some(error_message),
            },
        }
    }
}

impl<T> TryFrom<GenerationResultRepr<T>> for GenerationResult<T> {
    type Error = String;

    fn try_from(repr: GenerationResultRepr<T>) -> Result<Self, Self::Error> {
        if repr.success {
            repr.value
                .map(GenerationResult::Success)
                .ok_or_else(|| "successful result is missing its value".to_string())
        } else {
            Ok(GenerationResult::Failure {
                error_message: repr.error_message.unwrap_or_default(),
            })
        }
    }
}
