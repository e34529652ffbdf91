//! Lyria music generation client.

use crate::{FrescoConfig, RetryPolicy, vertex_access_token};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use fresco_error::{AudioGenError, AudioGenErrorKind, FrescoResult};
use fresco_interface::MusicGenerator;
use serde_json::{Value, json};
use tracing::{debug, instrument};

/// Client for the Lyria `predict` surface.
///
/// Returns the raw generated audio bytes; upload and post-processing are
/// the caller's concern. Music calls carry a single-retry budget.
pub struct LyriaClient {
    client: reqwest::Client,
    token: String,
    config: FrescoConfig,
    retry: RetryPolicy,
}

impl std::fmt::Debug for LyriaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LyriaClient")
            .field("model", &self.config.music_model)
            .finish_non_exhaustive()
    }
}

impl LyriaClient {
    /// Create a new client from configuration and the ambient access token.
    #[instrument(name = "lyria_client_new", skip(config))]
    pub fn new(config: FrescoConfig) -> FrescoResult<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            token: vertex_access_token()?,
            config,
            retry: RetryPolicy::customization(),
        })
    }

    async fn predict(&self, body: &Value) -> FrescoResult<Value> {
        let url = self.config.model_endpoint(&self.config.music_model, "predict");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(|e| AudioGenError::new(AudioGenErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| AudioGenError::new(AudioGenErrorKind::ApiRequest(e.to_string())))?;

        if !status.is_success() {
            return Err(AudioGenError::new(AudioGenErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: payload.to_string(),
            })
            .into());
        }
        Ok(payload)
    }
}

#[async_trait]
impl MusicGenerator for LyriaClient {
    async fn generate_music(&self, prompt: &str) -> FrescoResult<Vec<u8>> {
        let body = json!({
            "instances": [{ "prompt": prompt }],
            "parameters": { "sampleCount": 1 },
        });

        let payload = self.retry.run(|| self.predict(&body)).await?;

        let audio = payload
            .get("predictions")
            .and_then(Value::as_array)
            .and_then(|p| p.first())
            .and_then(|p| p.get("bytesBase64Encoded"))
            .and_then(Value::as_str)
            .ok_or_else(|| AudioGenError::new(AudioGenErrorKind::EmptyAudio))?;

        let bytes = BASE64
            .decode(audio)
            .map_err(|e| AudioGenError::new(AudioGenErrorKind::Base64Decode(e.to_string())))?;
        debug!(bytes = bytes.len(), "Music generation completed");
        Ok(bytes)
    }
}
