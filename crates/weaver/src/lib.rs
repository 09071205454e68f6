//! Weaver - Interactive Personalized Storytelling
//!
//! Weaver turns a child's choices into a branching bedtime story with
//! narrated audio and illustrated scenes. Each turn sends the conversation
//! so far to a text backend, parses the reply into a narrative and up to
//! three choices, then synthesizes speech and illustrations for every piece
//! of the segment in parallel.
//!
//! # Features
//!
//! - **Pluggable Backends**: `NarrativeDriver`, `SpeechSynthesizer`, and
//!   `ImageSynthesizer` traits with OpenAI chat/TTS and Gemini image clients
//! - **Failure Isolation**: a failed audio or image task empties its slot;
//!   only a failed text generation fails the turn
//! - **Job-Based Execution**: submit turns as background jobs and poll for
//!   completion, including speculative pre-generation of every choice
//! - **Personalization**: the child's name, age, details, and a reference
//!   portrait are woven into the prompt and every illustration
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use weaver::{
//!     ChatClient, GenerationConfig, ImageClient, JobStatus, JobScheduler, SpeechClient,
//!     StoryConfig, TurnOrchestrator,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GenerationConfig::load()?;
//!     let orchestrator = TurnOrchestrator::new(
//!         Arc::new(ChatClient::new(config.text_model())?),
//!         Arc::new(SpeechClient::new(config.tts_model())?),
//!         Arc::new(ImageClient::new(config.image_model())?),
//!         config,
//!     );
//!
//!     let story = StoryConfig::builder().child_name("Mira").build()?;
//!     let scheduler = JobScheduler::new(Arc::new(orchestrator));
//!
//!     let id = scheduler.submit(None, None, story);
//!     loop {
//!         match scheduler.status(id) {
//!             JobStatus::Complete => break,
//!             JobStatus::Failed => return Err("turn failed".into()),
//!             _ => tokio::time::sleep(std::time::Duration::from_millis(200)).await,
//!         }
//!     }
//!     let segment = scheduler.result(id).ok_or("missing result")?;
//!     println!("{}", segment.narrative_text());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Weaver is organized as a workspace with focused crates:
//!
//! - `weaver_core` - Conversation, story, and media data types
//! - `weaver_interface` - Generation backend traits
//! - `weaver_error` - Error types
//! - `weaver_models` - OpenAI and Gemini client implementations
//! - `weaver_story` - Reply parsing and turn orchestration
//! - `weaver_jobs` - Job store and background scheduler
//!
//! This crate (`weaver`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use weaver_core::{
    Conversation, DEFAULT_TEMPERATURE, GenerateRequest, GenerateRequestBuilder, GenerateResponse,
    MediaAsset, MediaKind, Message, ReferenceImage, Role, StoryConfig, StoryConfigBuilder,
    StoryConfigBuilderError, init_telemetry,
};
pub use weaver_error::{
    ConfigError, StoryError, StoryErrorKind, UpstreamError, UpstreamErrorKind, WeaverError,
    WeaverErrorKind, WeaverResult,
};
pub use weaver_interface::{
    ImageQuality, ImageSynthesizer, NarrativeDriver, SpeechSynthesizer,
};
pub use weaver_jobs::{JobScheduler, JobStatus, JobStore};
pub use weaver_models::{ChatClient, ImageClient, SpeechClient};
pub use weaver_story::{
    ChoiceAssets, GenerationConfig, OPENING_MESSAGE, ParsedSegment, StorySegment, TurnOrchestrator,
    TurnText, build_system_prompt, parse_segment,
};
