//! Imagen schema-based image generation client.

use crate::{FrescoConfig, RetryPolicy, vertex_access_token};
use async_trait::async_trait;
use fresco_error::{FrescoResult, ImageGenError, ImageGenErrorKind};
use fresco_interface::{ImageGenerator, ImagePrediction};
use serde_json::{Value, json};
use tracing::{debug, instrument};

/// Client for the Imagen `predict` REST surface.
///
/// One image per call; the generated image lands directly in the configured
/// storage bucket and the response carries its URI. Moderation rejections
/// come back as a prediction with `rai_filtered_reason` rather than an
/// error. Transient failures are retried five times with backoff.
pub struct ImagenClient {
    client: reqwest::Client,
    token: String,
    config: FrescoConfig,
    retry: RetryPolicy,
}

impl std::fmt::Debug for ImagenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagenClient")
            .field("model", &self.config.image_model)
            .finish_non_exhaustive()
    }
}

impl ImagenClient {
    /// Create a new client from configuration and the ambient access token.
    #[instrument(name = "imagen_client_new", skip(config))]
    pub fn new(config: FrescoConfig) -> FrescoResult<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            token: vertex_access_token()?,
            config,
            retry: RetryPolicy::generation(),
        })
    }

    async fn predict(&self, body: &Value) -> FrescoResult<Value> {
        let url = self.config.model_endpoint(&self.config.image_model, "predict");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
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
        Ok(payload)
    }

    fn first_prediction(payload: &Value) -> FrescoResult<ImagePrediction> {
        let prediction = payload
            .get("predictions")
            .and_then(Value::as_array)
            .and_then(|p| p.first())
            .ok_or_else(|| ImageGenError::new(ImageGenErrorKind::NoPredictions))?;

        Ok(ImagePrediction {
            gcs_uri: prediction
                .get("gcsUri")
                .and_then(Value::as_str)
                .map(str::to_string),
            rai_filtered_reason: prediction
                .get("raiFilteredReason")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}

#[async_trait]
impl ImageGenerator for ImagenClient {
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
        enhance_prompt: bool,
    ) -> FrescoResult<ImagePrediction> {
        let body = json!({
            "instances": [{ "prompt": prompt }],
            "parameters": {
                "safetySetting": "block_only_high",
                "personGeneration": "allow_all",
                "sampleCount": 1,
                "aspectRatio": aspect_ratio,
                "includeRaiReason": true,
                "storageUri": self.config.images_storage_uri(),
                "enhancePrompt": enhance_prompt,
                "language": "auto",
                "addWatermark": false,
            },
        });

        let payload: Value = self.retry.run(|| self.predict(&body)).await?;

        let prediction = Self::first_prediction(&payload)?;
        debug!(
            filtered = prediction.rai_filtered_reason.is_some(),
            "Image generation completed"
        );
        Ok(prediction)
    }
}
