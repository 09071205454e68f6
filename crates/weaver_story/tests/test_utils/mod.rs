//! Mock generation backends for orchestrator tests.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use weaver_core::{GenerateRequest, GenerateResponse, ReferenceImage};
use weaver_error::{UpstreamError, UpstreamErrorKind, WeaverResult};
use weaver_interface::{ImageQuality, ImageSynthesizer, NarrativeDriver, SpeechSynthesizer};

/// Narrative backend that replays a fixed script of replies.
pub struct ScriptedNarrative {
    replies: Mutex<Vec<String>>,
    calls: AtomicUsize,
    fail: bool,
}

impl ScriptedNarrative {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    /// Backend whose every call fails with a transport error.
    pub fn failing() -> Self {
        Self {
            replies: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NarrativeDriver for ScriptedNarrative {
    async fn generate(&self, _req: &GenerateRequest) -> WeaverResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(UpstreamError::new(UpstreamErrorKind::Transport(
                "scripted transport failure".to_string(),
            ))
            .into());
        }
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(UpstreamError::new(UpstreamErrorKind::EmptyResponse).into());
        }
        Ok(GenerateResponse::new(replies.remove(0)))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

/// Speech backend returning the input text as bytes, with optional
/// per-text failure injection. Records the voice of every call.
pub struct MockSpeech {
    fail_containing: Option<String>,
    calls: AtomicUsize,
    voices: Mutex<Vec<String>>,
}

impl MockSpeech {
    pub fn new() -> Self {
        Self {
            fail_containing: None,
            calls: AtomicUsize::new(0),
            voices: Mutex::new(Vec::new()),
        }
    }

    /// Fail any synthesis whose text contains the given fragment.
    pub fn failing_on(fragment: &str) -> Self {
        Self {
            fail_containing: Some(fragment.to_string()),
            calls: AtomicUsize::new(0),
            voices: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Voices passed to synthesis, in call order.
    pub fn voices(&self) -> Vec<String> {
        self.voices.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSpeech {
    async fn synthesize(&self, text: &str, voice: &str) -> WeaverResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.voices.lock().unwrap().push(voice.to_string());
        if let Some(fragment) = &self.fail_containing {
            if text.contains(fragment.as_str()) {
                return Err(UpstreamError::new(UpstreamErrorKind::Transport(
                    "injected speech failure".to_string(),
                ))
                .into());
            }
        }
        Ok(format!("audio:{}", text).into_bytes())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Image backend returning prompt and quality as bytes, with optional
/// per-prompt failure injection.
pub struct MockImage {
    fail_containing: Option<String>,
    calls: AtomicUsize,
}

impl MockImage {
    pub fn new() -> Self {
        Self {
            fail_containing: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail any synthesis whose prompt contains the given fragment.
    pub fn failing_on(fragment: &str) -> Self {
        Self {
            fail_containing: Some(fragment.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageSynthesizer for MockImage {
    async fn illustrate(
        &self,
        prompt: &str,
        _reference: &ReferenceImage,
        quality: ImageQuality,
    ) -> WeaverResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(fragment) = &self.fail_containing {
            if prompt.contains(fragment.as_str()) {
                return Err(UpstreamError::new(UpstreamErrorKind::NoContent).into());
            }
        }
        Ok(format!("image:{}:{}", quality, prompt).into_bytes())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
