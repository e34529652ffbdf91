//! Request and response types shared by the collaborator traits.

use serde::{Deserialize, Serialize};

/// One piece of multimodal request content: prompt text or a reference to a
/// previously generated image in object storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Part {
    /// Plain prompt text
    Text(String),
    /// Reference image by storage URI
    ImageUri {
        /// Opaque storage locator, e.g. `gs://bucket/images/ada.png`
        uri: String,
        /// MIME type of the referenced image
        mime: String,
    },
}

impl Part {
    /// A text part.
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text(text.into())
    }

    /// A PNG image reference part.
    pub fn image_uri(uri: impl Into<String>) -> Self {
        Part::ImageUri {
            uri: uri.into(),
            mime: "image/png".to_string(),
        }
    }
}

/// Requested output shape for a text generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseFormat {
    /// Plain text response
    Text,
    /// JSON response, optionally bound to a schema
    Json,
}

/// A text generation request.
///
/// # Examples
///
/// ```
/// use fresco_interface::TextRequest;
///
/// let request = TextRequest::json("Write a scenario as JSON.");
/// assert!(request.response_schema.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRequest {
    /// Interleaved text and image-reference content
    pub parts: Vec<Part>,
    /// Requested output shape
    pub response_format: ResponseFormat,
    /// JSON schema the response must conform to; only meaningful with
    /// [`ResponseFormat::Json`]
    pub response_schema: Option<serde_json::Value>,
    /// Thinking-token budget; 0 disables thinking, -1 lets the model decide
    pub thinking_budget: i32,
    /// Model identifier override; the client's default when `None`
    pub model: Option<String>,
}

impl TextRequest {
    /// A plain-text request from a single prompt.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::Text(prompt.into())],
            response_format: ResponseFormat::Text,
            response_schema: None,
            thinking_budget: 0,
            model: None,
        }
    }

    /// A JSON-mode request from a single prompt, without a schema.
    pub fn json(prompt: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::Text(prompt.into())],
            response_format: ResponseFormat::Json,
            response_schema: None,
            thinking_budget: 0,
            model: None,
        }
    }

    /// A JSON-mode request bound to a response schema.
    pub fn json_with_schema(prompt: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            response_schema: Some(schema),
            ..Self::json(prompt)
        }
    }

    /// Replace the content parts (for multimodal requests).
    pub fn with_parts(mut self, parts: Vec<Part>) -> Self {
        self.parts = parts;
        self
    }

    /// Override the model for this request.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the thinking-token budget.
    pub fn with_thinking_budget(mut self, budget: i32) -> Self {
        self.thinking_budget = budget;
        self
    }
}

/// One prediction from the schema-based image service.
///
/// Exactly one of the fields is normally present: a storage URI on success,
/// or the raw content-safety filter reason on moderation rejection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePrediction {
    /// Storage URI of the generated image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcs_uri: Option<String>,
    /// Raw provider filter reason when the request was moderated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rai_filtered_reason: Option<String>,
}

/// Parameters for submitting one scene video job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoJobRequest {
    /// Serialized video prompt text
    pub prompt: String,
    /// Storage URI of the scene image the clip is conditioned on
    pub image_gcs_uri: String,
    /// Output aspect ratio, e.g. "16:9"
    pub aspect_ratio: String,
    /// Video model identifier
    pub model: String,
    /// Whether the model should generate an audio track
    pub generate_audio: bool,
    /// Clip duration in seconds
    pub duration_seconds: u32,
}

/// Opaque handle for a submitted video generation job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoOperation {
    /// Provider operation name
    pub name: String,
    /// Model the job was submitted against (polling is model-scoped)
    pub model: String,
}

/// Status of a polled video operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPollStatus {
    /// Whether the operation has finished
    pub done: bool,
    /// Output video URIs, present when done and successful
    #[serde(default)]
    pub video_uris: Vec<String>,
    /// Raw content-safety filter reasons, present when the result was moderated
    #[serde(default)]
    pub rai_media_filtered_reasons: Vec<String>,
    /// Provider-reported operation error, if the job failed outright
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
