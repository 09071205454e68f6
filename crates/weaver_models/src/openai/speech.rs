//! OpenAI speech synthesis client.

use crate::openai::SpeechRequest;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use weaver_error::{UpstreamError, UpstreamErrorKind, WeaverResult};
use weaver_interface::SpeechSynthesizer;

const OPENAI_SPEECH_URL: &str = "https://api.openai.com/v1/audio/speech";

/// Client for the OpenAI speech synthesis API.
///
/// Returns encoded mp3 bytes for the given text and voice.
#[derive(Debug, Clone)]
pub struct SpeechClient {
    client: Client,
    api_key: String,
    model: String,
}

impl SpeechClient {
    /// Creates a new speech client.
    ///
    /// Reads the API key from the `OPENAI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not set.
    pub fn new(model: impl Into<String>) -> WeaverResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            UpstreamError::new(UpstreamErrorKind::MissingApiKey("OPENAI_API_KEY".to_string()))
        })?;
        Ok(Self::with_api_key(api_key, model))
    }

    /// Creates a new speech client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for SpeechClient {
    #[instrument(skip(self, text), fields(provider = "openai", model = %self.model, text_len = text.len()))]
    async fn synthesize(&self, text: &str, voice: &str) -> WeaverResult<Vec<u8>> {
        let request = SpeechRequest::new(&self.model, voice, text);

        debug!(voice = %voice, "Sending speech synthesis request");

        let response = self
            .client
            .post(OPENAI_SPEECH_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                UpstreamError::new(UpstreamErrorKind::Transport(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Speech API returned error");
            return Err(UpstreamError::new(UpstreamErrorKind::Api {
                status: status.as_u16(),
                message: body,
            })
            .into());
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(error = ?e, "Failed to read audio body");
            UpstreamError::new(UpstreamErrorKind::Decode(format!(
                "Failed to read audio bytes: {}",
                e
            )))
        })?;

        debug!(audio_bytes = bytes.len(), "Received synthesized audio");
        Ok(bytes.to_vec())
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
