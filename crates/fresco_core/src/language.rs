//! Locale descriptor for text and speech generation.

use serde::{Deserialize, Serialize};

/// A locale used to request text and speech output in a specific language.
///
/// Immutable value object; `code` is a BCP-47 tag such as `en-US`.
///
/// # Examples
///
/// ```
/// use fresco_core::Language;
///
/// let lang = Language::new("English (United States)", "en-US");
/// assert_eq!(lang.code, "en-US");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    /// Human-readable language name, e.g. "English (United States)"
    pub name: String,
    /// BCP-47 language code, e.g. "en-US"
    pub code: String,
}

impl Language {
    /// Create a new language descriptor.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}
