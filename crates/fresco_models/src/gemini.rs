//! Gemini text generation client.

use crate::{FrescoConfig, vertex_access_token};
use async_trait::async_trait;
use fresco_error::{FrescoResult, TextGenError, TextGenErrorKind};
use fresco_interface::{Part, ResponseFormat, TextGenerator, TextRequest};
use serde_json::{Value, json};
use tracing::{debug, instrument};

/// Client for the Gemini `generateContent` REST surface.
///
/// Supports JSON-mode output with an optional response schema, and
/// multimodal input (text plus stored-image references) for the
/// regeneration flows. Text calls are not retried.
pub struct GeminiTextClient {
    client: reqwest::Client,
    token: String,
    config: FrescoConfig,
}

impl std::fmt::Debug for GeminiTextClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiTextClient")
            .field("model", &self.config.text_model)
            .finish_non_exhaustive()
    }
}

impl GeminiTextClient {
    /// Create a new client from configuration and the ambient access token.
    #[instrument(name = "gemini_text_client_new", skip(config))]
    pub fn new(config: FrescoConfig) -> FrescoResult<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            token: vertex_access_token()?,
            config,
        })
    }

    /// Serialize request parts into Gemini content parts.
    fn content_parts(parts: &[Part]) -> Vec<Value> {
        parts
            .iter()
            .map(|part| match part {
                Part::Text(text) => json!({ "text": text }),
                Part::ImageUri { uri, mime } => json!({
                    "fileData": { "fileUri": uri, "mimeType": mime }
                }),
            })
            .collect()
    }

    /// Build the generation config block for a request.
    fn generation_config(request: &TextRequest) -> Value {
        let mut config = json!({
            "thinkingConfig": {
                "includeThoughts": false,
                "thinkingBudget": request.thinking_budget,
            },
        });
        match request.response_format {
            ResponseFormat::Json => {
                config["responseMimeType"] = json!("application/json");
                if let Some(schema) = &request.response_schema {
                    config["responseSchema"] = schema.clone();
                }
            }
            ResponseFormat::Text => {
                config["responseMimeType"] = json!("text/plain");
            }
        }
        config
    }

    /// Concatenate the text parts of the first candidate.
    fn extract_text(body: &Value) -> Option<String> {
        let parts = body
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .as_array()?;
        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[async_trait]
impl TextGenerator for GeminiTextClient {
    async fn generate(&self, request: &TextRequest) -> FrescoResult<String> {
        let model = request.model.as_deref().unwrap_or(&self.config.text_model);
        let url = self.config.model_endpoint(model, "generateContent");

        let body = json!({
            "contents": [{
                "role": "user",
                "parts": Self::content_parts(&request.parts),
            }],
            "generationConfig": Self::generation_config(request),
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| TextGenError::new(TextGenErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| TextGenError::new(TextGenErrorKind::ApiRequest(e.to_string())))?;

        if !status.is_success() {
            return Err(TextGenError::new(TextGenErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: payload.to_string(),
            })
            .into());
        }

        let text = Self::extract_text(&payload)
            .ok_or_else(|| TextGenError::new(TextGenErrorKind::EmptyResponse))?;
        debug!(model = model, chars = text.len(), "Text generation completed");
        Ok(text)
    }
}
