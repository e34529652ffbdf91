//! Content-safety (RAI) filter reason translation.
//!
//! Vertex image and video responses report moderation rejections as reason
//! strings carrying numeric support codes (for example
//! `"58061214 Support codes: 58061214"`). This module maps those codes to
//! messages safe to show end users. It is a pure, total function: any input,
//! including unrecognized codes, yields a non-empty message.

/// One support code and its user-facing message.
struct RaiEntry {
    code: &'static str,
    message: &'static str,
}

/// Support codes published for the Imagen and Veo responsible-AI filters.
/// Multiple codes can map to the same category.
const RAI_MESSAGES: &[RaiEntry] = &[
    RaiEntry {
        code: "58061214",
        message: "The request was blocked because it may involve children. This category is not currently supported.",
    },
    RaiEntry {
        code: "17301594",
        message: "The request was blocked because it may involve children. This category is not currently supported.",
    },
    RaiEntry {
        code: "29310472",
        message: "The request was blocked because it may depict a celebrity or public figure.",
    },
    RaiEntry {
        code: "15236754",
        message: "The request was blocked because it may depict a celebrity or public figure.",
    },
    RaiEntry {
        code: "64151117",
        message: "The generated content may depict a celebrity or public figure and was filtered.",
    },
    RaiEntry {
        code: "42237218",
        message: "The generated content may depict a celebrity or public figure and was filtered.",
    },
    RaiEntry {
        code: "62263041",
        message: "The request was blocked because it may relate to dangerous content.",
    },
    RaiEntry {
        code: "57734940",
        message: "The request was blocked because it may include hateful content.",
    },
    RaiEntry {
        code: "22137204",
        message: "The generated content may include hateful content and was filtered.",
    },
    RaiEntry {
        code: "74803281",
        message: "The request was blocked by the content filter. Try rephrasing the prompt.",
    },
    RaiEntry {
        code: "29578790",
        message: "The request was blocked by the content filter. Try rephrasing the prompt.",
    },
    RaiEntry {
        code: "42876398",
        message: "The request was blocked by the content filter. Try rephrasing the prompt.",
    },
    RaiEntry {
        code: "39322892",
        message: "The request was blocked because generating people is restricted for this configuration.",
    },
    RaiEntry {
        code: "92201652",
        message: "The request was blocked because it may include personal information.",
    },
    RaiEntry {
        code: "89371032",
        message: "The request was blocked because it may include prohibited content.",
    },
    RaiEntry {
        code: "49114662",
        message: "The generated content may include prohibited content and was filtered.",
    },
    RaiEntry {
        code: "72817394",
        message: "The generated content may include prohibited content and was filtered.",
    },
    RaiEntry {
        code: "90789179",
        message: "The request was blocked because it may include sexually explicit content.",
    },
    RaiEntry {
        code: "63429089",
        message: "The generated content may include sexually explicit content and was filtered.",
    },
    RaiEntry {
        code: "43188360",
        message: "The generated content may include sexually explicit content and was filtered.",
    },
    RaiEntry {
        code: "78610348",
        message: "The request was blocked because it may include toxic language.",
    },
    RaiEntry {
        code: "61493863",
        message: "The request was blocked because it may relate to violence.",
    },
    RaiEntry {
        code: "56562880",
        message: "The generated content may relate to violence and was filtered.",
    },
    RaiEntry {
        code: "32635315",
        message: "The request was blocked because it may include vulgar content.",
    },
];

const RAI_FALLBACK: &str =
    "The request was blocked by the content safety filter. Try adjusting the prompt and generating again.";

/// Translate a provider content-safety reason into a user-facing message.
///
/// The reason may be a bare support code or a longer string that embeds one;
/// the first recognized code wins. Unknown reasons fall back to a generic
/// message, so the result is never empty and this function never fails.
///
/// # Examples
///
/// ```
/// use fresco_error::rai_user_message;
///
/// let msg = rai_user_message("Support codes: 39322892");
/// assert!(msg.contains("generating people"));
///
/// let unknown = rai_user_message("something new");
/// assert!(!unknown.is_empty());
/// ```
pub fn rai_user_message(reason: &str) -> String {
    for entry in RAI_MESSAGES {
        if reason.contains(entry.code) {
            return entry.message.to_string();
        }
    }
    RAI_FALLBACK.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_code_translates() {
        let msg = rai_user_message("58061214");
        assert!(msg.contains("children"));
    }

    #[test]
    fn test_code_embedded_in_reason_text() {
        let msg = rai_user_message(
            "Unable to show generated images. All images were filtered out. Support codes: 90789179",
        );
        assert!(msg.contains("sexually explicit"));
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let msg = rai_user_message("00000000");
        assert_eq!(msg, RAI_FALLBACK);
    }

    #[test]
    fn test_never_empty_for_any_input() {
        for input in ["", "garbage", "Support codes:", "🙂", "1234"] {
            assert!(!rai_user_message(input).is_empty());
        }
    }
}
