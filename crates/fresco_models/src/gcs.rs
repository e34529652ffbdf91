//! Cloud Storage object store client.

use crate::vertex_access_token;
use async_trait::async_trait;
use fresco_error::{FrescoResult, StorageError, StorageErrorKind};
use fresco_interface::ObjectStore;
use tracing::{debug, instrument};

/// Client for the Cloud Storage JSON upload surface.
///
/// Storage URIs are opaque `gs://bucket/key` strings everywhere else in the
/// workspace; this is the only place that takes them apart.
pub struct GcsClient {
    client: reqwest::Client,
    token: String,
    bucket: String,
}

impl std::fmt::Debug for GcsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GcsClient")
            .field("bucket", &self.bucket)
            .finish_non_exhaustive()
    }
}

/// Split a `gs://bucket/key` URI into bucket and key.
fn parse_gs_uri(uri: &str) -> FrescoResult<(&str, &str)> {
    let rest = uri
        .strip_prefix("gs://")
        .ok_or_else(|| StorageError::new(StorageErrorKind::InvalidUri(uri.to_string())))?;
    rest.split_once('/')
        .filter(|(bucket, key)| !bucket.is_empty() && !key.is_empty())
        .ok_or_else(|| StorageError::new(StorageErrorKind::InvalidUri(uri.to_string())).into())
}

impl GcsClient {
    /// Create a new client for a bucket using the ambient access token.
    #[instrument(name = "gcs_client_new", skip(bucket))]
    pub fn new(bucket: impl Into<String>) -> FrescoResult<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            token: vertex_access_token()?,
            bucket: bucket.into(),
        })
    }
}

#[async_trait]
impl ObjectStore for GcsClient {
    async fn upload(&self, bytes: &[u8], key: &str, content_type: &str) -> FrescoResult<String> {
        let url = format!(
            "https://storage.googleapis.com/upload/storage/v1/b/{}/o?uploadType=media&name={}",
            self.bucket, key
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Content-Type", content_type)
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| {
                StorageError::new(StorageErrorKind::Upload {
                    key: key.to_string(),
                    message: e.to_string(),
                })
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::new(StorageErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let uri = format!("gs://{}/{}", self.bucket, key);
        debug!(uri = %uri, bytes = bytes.len(), "Object uploaded");
        Ok(uri)
    }

    async fn signed_url(&self, uri: &str, download: bool) -> FrescoResult<String> {
        // URL signing itself is an infrastructure concern (service-account
        // credentials); this client hands back the media endpoint the
        // deployment's signing proxy fronts.
        let (bucket, key) = parse_gs_uri(uri)?;
        let mut url = format!("https://storage.googleapis.com/{}/{}", bucket, key);
        if download {
            url.push_str("?response-content-disposition=attachment");
        }
        Ok(url)
    }

    fn mime_type(&self, uri: &str) -> String {
        let extension = uri.rsplit('.').next().unwrap_or_default();
        match extension.to_ascii_lowercase().as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "webp" => "image/webp",
            "mp4" => "video/mp4",
            "mp3" => "audio/mpeg",
            "wav" => "audio/wav",
            _ => "application/octet-stream",
        }
        .to_string()
    }
}
