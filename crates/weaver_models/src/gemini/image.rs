//! Gemini image synthesis client.

use crate::gemini::{GeminiContent, GeminiPart, GeminiRequest, GeminiResponse, GenerationConfig};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use tracing::{debug, error, instrument, warn};
use weaver_core::ReferenceImage;
use weaver_error::{UpstreamError, UpstreamErrorKind, WeaverResult};
use weaver_interface::{ImageQuality, ImageSynthesizer};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Prompt suffix anchoring the main character to the reference portrait.
const LIKENESS_SUFFIX: &str = ". The main character should look like the person in the \
    provided image, especially the face, the eyes, the nose, the chin should be recognizable.";

/// Prompt suffix for storybook-style narrative illustrations.
const HIGH_QUALITY_SUFFIX: &str = " A beautiful, high-quality, square (1:1) storybook \
    illustration in a whimsical, gentle art style.";

/// Prompt suffix for small icon-style choice renders.
const STANDARD_QUALITY_SUFFIX: &str =
    " A small, square (1:1), simple, clear, cute icon on a plain white background.";

/// Client for the Gemini multimodal generateContent API.
///
/// Sends a text prompt plus the reference portrait as inline media and
/// extracts the first inline image payload from the response. A response
/// with no inline payload fails with `UpstreamErrorKind::NoContent`.
#[derive(Debug, Clone)]
pub struct ImageClient {
    client: Client,
    api_key: String,
    model: String,
}

impl ImageClient {
    /// Creates a new image client.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is not set.
    pub fn new(model: impl Into<String>) -> WeaverResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            UpstreamError::new(UpstreamErrorKind::MissingApiKey("GEMINI_API_KEY".to_string()))
        })?;
        Ok(Self::with_api_key(api_key, model))
    }

    /// Creates a new image client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Builds the full prompt for the requested render quality.
    fn augment_prompt(prompt: &str, quality: ImageQuality) -> String {
        let suffix = match quality {
            ImageQuality::High => HIGH_QUALITY_SUFFIX,
            ImageQuality::Standard => STANDARD_QUALITY_SUFFIX,
        };
        format!("{}{}{}", prompt, LIKENESS_SUFFIX, suffix)
    }
}

#[async_trait]
impl ImageSynthesizer for ImageClient {
    #[instrument(skip(self, prompt, reference), fields(provider = "gemini", model = %self.model, quality = %quality))]
    async fn illustrate(
        &self,
        prompt: &str,
        reference: &ReferenceImage,
        quality: ImageQuality,
    ) -> WeaverResult<Vec<u8>> {
        let full_prompt = Self::augment_prompt(prompt, quality);

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![
                    GeminiPart::text(full_prompt),
                    GeminiPart::inline(reference.mime(), STANDARD.encode(reference.data())),
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
            }),
        };

        let url = format!("{}/{}:generateContent", GEMINI_BASE_URL, self.model);
        debug!(url = %url, "Sending image synthesis request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
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
            error!(status = %status, body = %body, "Image API returned error");
            return Err(UpstreamError::new(UpstreamErrorKind::Api {
                status: status.as_u16(),
                message: body,
            })
            .into());
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse image response");
            UpstreamError::new(UpstreamErrorKind::Decode(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        let inline = gemini_response.first_inline_data().ok_or_else(|| {
            warn!("Image response contained no inline payload");
            UpstreamError::new(UpstreamErrorKind::NoContent)
        })?;

        let bytes = STANDARD.decode(&inline.data).map_err(|e| {
            UpstreamError::new(UpstreamErrorKind::Decode(format!(
                "Base64 decode failed: {}",
                e
            )))
        })?;

        debug!(image_bytes = bytes.len(), mime = %inline.mime_type, "Received synthesized image");
        Ok(bytes)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
