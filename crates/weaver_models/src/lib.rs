//! Generation backend clients for the Weaver storytelling pipeline.
//!
//! Provides the concrete implementations of the `weaver_interface` traits:
//!
//! - [`ChatClient`] - OpenAI-compatible chat completions for narrative text
//! - [`SpeechClient`] - OpenAI speech synthesis for narration audio
//! - [`ImageClient`] - Gemini multimodal generation for illustrations
//!
//! All clients read their API keys from environment variables and fail with
//! `UpstreamErrorKind::MissingApiKey` when unset.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod openai;

pub use gemini::ImageClient;
pub use openai::{ChatClient, SpeechClient};
