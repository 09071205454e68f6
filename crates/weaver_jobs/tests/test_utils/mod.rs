//! Mock backends and polling helpers for scheduler tests.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::Semaphore;
use uuid::Uuid;
use weaver_core::{GenerateRequest, GenerateResponse, ReferenceImage, StoryConfig};
use weaver_error::{UpstreamError, UpstreamErrorKind, WeaverResult};
use weaver_interface::{ImageQuality, ImageSynthesizer, NarrativeDriver, SpeechSynthesizer};
use weaver_jobs::{JobScheduler, JobStatus};
use weaver_story::{GenerationConfig, TurnOrchestrator};

/// Narrative backend that replays a fixed script of replies.
pub struct ScriptedNarrative {
    replies: Mutex<Vec<String>>,
    fail: bool,
}

impl ScriptedNarrative {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            replies: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

#[async_trait]
impl NarrativeDriver for ScriptedNarrative {
    async fn generate(&self, _req: &GenerateRequest) -> WeaverResult<GenerateResponse> {
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

/// Narrative backend whose every call panics.
pub struct PanickingNarrative;

#[async_trait]
impl NarrativeDriver for PanickingNarrative {
    async fn generate(&self, _req: &GenerateRequest) -> WeaverResult<GenerateResponse> {
        panic!("narrative backend panicked");
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "panicking"
    }
}

/// Narrative backend that blocks until the test releases its gate.
pub struct GatedNarrative {
    gate: Arc<Semaphore>,
    reply: String,
}

impl GatedNarrative {
    pub fn new(reply: &str) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        (
            Self {
                gate: gate.clone(),
                reply: reply.to_string(),
            },
            gate,
        )
    }
}

#[async_trait]
impl NarrativeDriver for GatedNarrative {
    async fn generate(&self, _req: &GenerateRequest) -> WeaverResult<GenerateResponse> {
        match self.gate.acquire().await {
            Ok(_permit) => Ok(GenerateResponse::new(self.reply.clone())),
            Err(_) => Err(UpstreamError::new(UpstreamErrorKind::EmptyResponse).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "gated"
    }
}

/// Speech backend echoing the input text as bytes.
pub struct MockSpeech;

#[async_trait]
impl SpeechSynthesizer for MockSpeech {
    async fn synthesize(&self, text: &str, _voice: &str) -> WeaverResult<Vec<u8>> {
        Ok(format!("audio:{}", text).into_bytes())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Image backend echoing the prompt as bytes, with optional failure.
pub struct MockImage {
    fail_containing: Option<String>,
}

impl MockImage {
    pub fn new() -> Self {
        Self {
            fail_containing: None,
        }
    }

    pub fn failing_on(fragment: &str) -> Self {
        Self {
            fail_containing: Some(fragment.to_string()),
        }
    }
}

#[async_trait]
impl ImageSynthesizer for MockImage {
    async fn illustrate(
        &self,
        prompt: &str,
        _reference: &ReferenceImage,
        _quality: ImageQuality,
    ) -> WeaverResult<Vec<u8>> {
        if let Some(fragment) = &self.fail_containing {
            if prompt.contains(fragment.as_str()) {
                return Err(UpstreamError::new(UpstreamErrorKind::NoContent).into());
            }
        }
        Ok(format!("image:{}", prompt).into_bytes())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Scheduler over the given narrative backend with echo media mocks.
pub fn scheduler(narrative: Arc<dyn NarrativeDriver>, image: MockImage) -> JobScheduler {
    let orchestrator = TurnOrchestrator::new(
        narrative,
        Arc::new(MockSpeech),
        Arc::new(image),
        GenerationConfig::default(),
    );
    JobScheduler::new(Arc::new(orchestrator))
}

/// A story config with no reference portrait.
pub fn plain_story() -> StoryConfig {
    StoryConfig::builder().child_name("Mira").build().unwrap()
}

/// A story config carrying a reference portrait.
pub fn portrait_story() -> StoryConfig {
    StoryConfig::builder()
        .child_name("Mira")
        .reference_image(Some(ReferenceImage::new("image/png", vec![1, 2, 3])))
        .build()
        .unwrap()
}

/// Poll a job until it reaches a final status, with a bounded wait.
pub async fn wait_for_final(scheduler: &JobScheduler, id: Uuid) -> JobStatus {
    for _ in 0..500 {
        let status = scheduler.status(id);
        if status.is_final() || status == JobStatus::NotFound {
            return status;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    scheduler.status(id)
}
