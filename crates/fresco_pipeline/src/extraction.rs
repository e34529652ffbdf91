//! Utilities for extracting structured data from model responses.
//!
//! Model output often wraps JSON in markdown code fences or pads it with
//! explanatory text, even in JSON mode. This module strips that decoration
//! defensively before parsing.

use fresco_error::{FrescoResult, PipelineError, PipelineErrorKind};

/// Extract JSON from a response that may contain markdown or extra text.
///
/// Extraction strategies, in order:
/// 1. Markdown code blocks: ```` ```json ... ``` ````
/// 2. The first balanced `{ ... }` or `[ ... ]` structure
///
/// # Errors
///
/// Returns a [`PipelineError`] if no JSON structure is found.
///
/// # Examples
///
/// ```
/// use fresco_pipeline::extract_json;
///
/// let response = "Here you go:\n```json\n{\"scenario\": \"...\"}\n```\n";
/// let json = extract_json(response).unwrap();
/// assert!(json.starts_with('{'));
/// ```
pub fn extract_json(response: &str) -> FrescoResult<String> {
    if let Some(json) = extract_from_code_block(response) {
        return Ok(json);
    }

    // Prefer whichever structure opens first so an array of scenes is not
    // truncated to its first object.
    let candidates = match (response.find('['), response.find('{')) {
        (Some(bracket), Some(brace)) if bracket < brace => [('[', ']'), ('{', '}')],
        _ => [('{', '}'), ('[', ']')],
    };
    for (open, close) in candidates {
        if let Some(json) = extract_balanced(response, open, close) {
            return Ok(json);
        }
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON found in model response"
    );
    Err(PipelineError::new(PipelineErrorKind::NoJsonFound(response.len())).into())
}

/// Extract the contents of the first markdown code fence, tolerating a
/// missing closing fence on truncated responses.
fn extract_from_code_block(response: &str) -> Option<String> {
    let start = response.find("```")?;
    let after_fence = start + 3;
    // Skip an optional language tag up to the end of the line.
    let content_start = response[after_fence..]
        .find('\n')
        .map(|n| after_fence + n + 1)
        .unwrap_or(after_fence);

    match response[content_start..].find("```") {
        Some(end) => Some(response[content_start..content_start + end].trim().to_string()),
        None => Some(response[content_start..].trim().to_string()),
    }
}

/// Extract content between balanced delimiters, respecting JSON string
/// literals and escapes.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + 1].to_string());
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse extracted JSON into a typed value.
///
/// # Errors
///
/// Returns a [`PipelineError`] carrying the parser's message, so callers
/// can surface it for diagnostics.
pub fn parse_json<T>(json_str: &str) -> FrescoResult<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview: String = json_str.chars().take(100).collect();
        tracing::error!(error = %e, json_preview = %preview, "JSON parsing failed");
        PipelineError::new(PipelineErrorKind::Parse(e.to_string())).into()
    })
}
