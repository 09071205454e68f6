//! Trait definitions for generation backends.

use crate::ImageQuality;
use async_trait::async_trait;
use weaver_core::{GenerateRequest, GenerateResponse, ReferenceImage};
use weaver_error::WeaverResult;

/// Text generation backend.
///
/// One call per turn: the full conversation history goes in, one raw reply
/// comes out. The orchestrator never retries; retry policy, if any, belongs
/// to an outer layer.
#[async_trait]
pub trait NarrativeDriver: Send + Sync {
    /// Generate the next story reply given the conversation so far.
    async fn generate(&self, req: &GenerateRequest) -> WeaverResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier used when the request does not override it.
    fn model_name(&self) -> &str;
}

/// Speech synthesis backend.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize speech audio for the given text and voice identifier.
    ///
    /// Returns encoded audio bytes in a playable format.
    async fn synthesize(&self, text: &str, voice: &str) -> WeaverResult<Vec<u8>>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;
}

/// Image synthesis backend.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    /// Synthesize an illustration for the given prompt.
    ///
    /// The reference image anchors the main character's facial likeness.
    /// A backend response with no extractable image payload fails with
    /// `UpstreamErrorKind::NoContent`, a distinct expected outcome.
    async fn illustrate(
        &self,
        prompt: &str,
        reference: &ReferenceImage,
        quality: ImageQuality,
    ) -> WeaverResult<Vec<u8>>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}
