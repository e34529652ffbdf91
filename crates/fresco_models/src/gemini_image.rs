//! Reference-conditioned image generation via the Gemini image model.

use crate::{FrescoConfig, vertex_access_token};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use fresco_core::GenerationResult;
use fresco_error::{FrescoResult, ImageGenError, ImageGenErrorKind, rai_user_message};
use fresco_interface::{ObjectStore, Part, ReferenceImageGenerator};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Client for the multimodal Gemini image model.
///
/// Accepts interleaved text and stored-image reference parts and returns a
/// freshly generated image. The model responds with inline bytes, which are
/// uploaded to object storage so downstream steps only ever see URIs.
///
/// Moderation and generation failures surface as unit-level
/// [`GenerationResult`] failures with displayable messages, never as `Err`.
pub struct GeminiImageClient {
    client: reqwest::Client,
    token: String,
    config: FrescoConfig,
    store: Arc<dyn ObjectStore>,
}

impl std::fmt::Debug for GeminiImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiImageClient")
            .field("model", &self.config.image_edit_model)
            .finish_non_exhaustive()
    }
}

impl GeminiImageClient {
    /// Create a new client from configuration, the ambient access token,
    /// and the store that receives generated images.
    #[instrument(name = "gemini_image_client_new", skip(config, store))]
    pub fn new(config: FrescoConfig, store: Arc<dyn ObjectStore>) -> FrescoResult<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            token: vertex_access_token()?,
            config,
            store,
        })
    }

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

    /// Pull the first inline image out of a response, if any.
    fn inline_image(payload: &Value) -> Option<(&str, &str)> {
        let parts = payload
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .as_array()?;
        parts.iter().find_map(|part| {
            let inline = part.get("inlineData")?;
            let data = inline.get("data")?.as_str()?;
            let mime = inline
                .get("mimeType")
                .and_then(Value::as_str)
                .unwrap_or("image/png");
            Some((data, mime))
        })
    }

    /// A safety finish reason on the first candidate, if the result was
    /// moderated.
    fn safety_finish_reason(payload: &Value) -> Option<&str> {
        let reason = payload
            .get("candidates")?
            .get(0)?
            .get("finishReason")?
            .as_str()?;
        match reason {
            "SAFETY" | "IMAGE_SAFETY" | "PROHIBITED_CONTENT" | "SPII" | "BLOCKLIST" => {
                Some(reason)
            }
            _ => None,
        }
    }
}

#[async_trait]
impl ReferenceImageGenerator for GeminiImageClient {
    async fn generate_with_references(
        &self,
        parts: &[Part],
    ) -> FrescoResult<GenerationResult<String>> {
        let url = self
            .config
            .model_endpoint(&self.config.image_edit_model, "generateContent");

        let body = json!({
            "contents": [{
                "role": "user",
                "parts": Self::content_parts(parts),
            }],
            "generationConfig": {
                "responseModalities": ["TEXT", "IMAGE"],
                "candidateCount": 1,
            },
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ImageGenError::new(ImageGenErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| ImageGenError::new(ImageGenErrorKind::ApiRequest(e.to_string())))?;

        if !status.is_success() {
            return Err(ImageGenError::new(ImageGenErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: payload.to_string(),
            })
            .into());
        }

        if let Some(reason) = Self::safety_finish_reason(&payload) {
            warn!(reason = reason, "Reference image generation was filtered");
            return Ok(GenerationResult::failure(rai_user_message(reason)));
        }

        let Some((data, mime)) = Self::inline_image(&payload) else {
            return Ok(GenerationResult::failure(
                "No image was returned by the model",
            ));
        };

        let bytes = BASE64
            .decode(data)
            .map_err(|e| ImageGenError::new(ImageGenErrorKind::ApiRequest(e.to_string())))?;

        let extension = mime.split('/').nth(1).unwrap_or("png");
        let key = format!("images/gemini-{}.{}", Uuid::new_v4(), extension);
        let uri = self.store.upload(&bytes, &key, mime).await?;
        debug!(uri = %uri, "Reference-conditioned image stored");
        Ok(GenerationResult::success(uri))
    }
}
