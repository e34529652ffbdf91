//! Veo video generation client (submit + poll).

use crate::{FrescoConfig, RetryPolicy, vertex_access_token};
use async_trait::async_trait;
use fresco_error::{FrescoResult, VideoGenError, VideoGenErrorKind};
use fresco_interface::{VideoGenerator, VideoJobRequest, VideoOperation, VideoPollStatus};
use serde_json::{Value, json};
use tracing::{debug, instrument};

/// Client for the Veo long-running prediction surface.
///
/// `submit` starts a job via `predictLongRunning` (retried five times with
/// backoff) and returns the opaque operation handle; `poll` queries
/// `fetchPredictOperation` once. The poll-until-done loop with its interval
/// and ceiling belongs to the pipeline, which owns the timeout semantics.
pub struct VeoClient {
    client: reqwest::Client,
    token: String,
    config: FrescoConfig,
    retry: RetryPolicy,
}

impl std::fmt::Debug for VeoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VeoClient")
            .field("model", &self.config.video_model)
            .finish_non_exhaustive()
    }
}

impl VeoClient {
    /// Create a new client from configuration and the ambient access token.
    #[instrument(name = "veo_client_new", skip(config))]
    pub fn new(config: FrescoConfig) -> FrescoResult<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            token: vertex_access_token()?,
            config,
            retry: RetryPolicy::generation(),
        })
    }

    async fn post_json(&self, url: &str, body: &Value) -> FrescoResult<Value> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(|e| VideoGenError::new(VideoGenErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| VideoGenError::new(VideoGenErrorKind::ApiRequest(e.to_string())))?;

        if !status.is_success() {
            return Err(VideoGenError::new(VideoGenErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: payload.to_string(),
            })
            .into());
        }
        Ok(payload)
    }

    fn parse_poll_status(payload: &Value) -> VideoPollStatus {
        let done = payload
            .get("done")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let response = payload.get("response");

        let video_uris = response
            .and_then(|r| r.get("videos"))
            .and_then(Value::as_array)
            .map(|videos| {
                videos
                    .iter()
                    .filter_map(|v| v.get("gcsUri").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let rai_media_filtered_reasons = response
            .and_then(|r| r.get("raiMediaFilteredReasons"))
            .and_then(Value::as_array)
            .map(|reasons| {
                reasons
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let error_message = payload
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string);

        VideoPollStatus {
            done,
            video_uris,
            rai_media_filtered_reasons,
            error_message,
        }
    }
}

#[async_trait]
impl VideoGenerator for VeoClient {
    async fn submit(&self, request: &VideoJobRequest) -> FrescoResult<VideoOperation> {
        let url = self
            .config
            .model_endpoint(&request.model, "predictLongRunning");

        let body = json!({
            "instances": [{
                "prompt": request.prompt,
                "image": {
                    "gcsUri": request.image_gcs_uri,
                    "mimeType": "png",
                },
            }],
            "parameters": {
                "storageUri": self.config.videos_storage_uri(),
                "sampleCount": 1,
                "aspectRatio": request.aspect_ratio,
                "generateAudio": request.generate_audio,
                "durationSeconds": request.duration_seconds,
            },
        });

        let payload = self.retry.run(|| self.post_json(&url, &body)).await?;

        let name = payload
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                VideoGenError::new(VideoGenErrorKind::ApiRequest(
                    "submission response carried no operation name".to_string(),
                ))
            })?
            .to_string();

        debug!(operation = %name, "Video job submitted");
        Ok(VideoOperation {
            name,
            model: request.model.clone(),
        })
    }

    async fn poll(&self, operation: &VideoOperation) -> FrescoResult<VideoPollStatus> {
        let url = self
            .config
            .model_endpoint(&operation.model, "fetchPredictOperation");
        let body = json!({ "operationName": operation.name });
        let payload = self.post_json(&url, &body).await?;
        Ok(Self::parse_poll_status(&payload))
    }
}
