//! Core data types for the Weaver storytelling pipeline.
//!
//! This crate provides the foundation data types threaded through every
//! generation turn: conversation history, story personalization, media
//! assets, and the request/response seam toward text backends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod conversation;
mod media;
mod message;
mod request;
mod role;
mod story_config;
mod telemetry;

pub use conversation::Conversation;
pub use media::{MediaAsset, MediaKind, ReferenceImage};
pub use message::Message;
pub use request::{DEFAULT_TEMPERATURE, GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
pub use story_config::{StoryConfig, StoryConfigBuilder, StoryConfigBuilderError};
pub use telemetry::init_telemetry;
