//! Chirp text-to-speech client.

use crate::{FrescoConfig, vertex_access_token};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use fresco_error::{AudioGenError, AudioGenErrorKind, FrescoResult};
use fresco_interface::SpeechSynthesizer;
use serde_json::{Value, json};
use tracing::{debug, instrument};

/// Client for the Cloud Text-to-Speech `text:synthesize` surface using the
/// Chirp 3 HD voice family.
///
/// Voice names follow the `{language}-Chirp3-HD-{name}` convention; the
/// configured default name is used when the caller does not pick one.
pub struct ChirpClient {
    client: reqwest::Client,
    token: String,
    config: FrescoConfig,
}

impl std::fmt::Debug for ChirpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChirpClient")
            .field("default_voice", &self.config.tts_voice)
            .finish_non_exhaustive()
    }
}

impl ChirpClient {
    /// Create a new client from configuration and the ambient access token.
    #[instrument(name = "chirp_client_new", skip(config))]
    pub fn new(config: FrescoConfig) -> FrescoResult<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            token: vertex_access_token()?,
            config,
        })
    }

    /// Full Chirp voice name for a language code and short voice name.
    fn voice_name(language_code: &str, voice: &str) -> String {
        format!("{}-Chirp3-HD-{}", language_code, voice)
    }
}

#[async_trait]
impl SpeechSynthesizer for ChirpClient {
    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
        voice: Option<&str>,
    ) -> FrescoResult<Vec<u8>> {
        let voice = voice.unwrap_or(&self.config.tts_voice);
        let name = Self::voice_name(language_code, voice);

        let body = json!({
            "input": { "text": text },
            "voice": {
                "languageCode": language_code,
                "name": name,
            },
            "audioConfig": { "audioEncoding": "MP3" },
        });

        let response = self
            .client
            .post("https://texttospeech.googleapis.com/v1/text:synthesize")
            .bearer_auth(&self.token)
            .json(&body)
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

        let audio = payload
            .get("audioContent")
            .and_then(Value::as_str)
            .ok_or_else(|| AudioGenError::new(AudioGenErrorKind::EmptyAudio))?;

        let bytes = BASE64
            .decode(audio)
            .map_err(|e| AudioGenError::new(AudioGenErrorKind::Base64Decode(e.to_string())))?;
        debug!(voice = %name, bytes = bytes.len(), "Speech synthesis completed");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_name_convention() {
        assert_eq!(
            ChirpClient::voice_name("en-US", "Algenib"),
            "en-US-Chirp3-HD-Algenib"
        );
        assert_eq!(
            ChirpClient::voice_name("fr-FR", "Charon"),
            "fr-FR-Chirp3-HD-Charon"
        );
    }
}
