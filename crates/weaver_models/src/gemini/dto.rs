//! Data transfer objects for the Gemini generateContent API.

use serde::{Deserialize, Serialize};

/// Inline media payload, base64-encoded on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the payload
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// One part of a content block: either text or inline media.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiPart {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline media content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl GeminiPart {
    /// A text-only part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// An inline-media part.
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// A content block holding an ordered list of parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Ordered parts
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// Generation parameters for the request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Requested output modalities
    pub response_modalities: Vec<String>,
}

/// Gemini generateContent request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Input content blocks
    pub contents: Vec<GeminiContent>,
    /// Generation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate {
    /// Generated content, absent when the candidate was filtered
    #[serde(default)]
    pub content: Option<GeminiContent>,
}

/// Gemini generateContent response.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse {
    /// Response candidates
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// First inline media payload across all candidates and parts, if any.
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .find_map(|part| part.inline_data.as_ref())
    }
}
