//! Request and response types for text generation.

use crate::Message;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Default sampling temperature for narrative generation.
///
/// Upper-mid range, favoring creative but controllable variety.
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

/// A text generation request.
///
/// # Examples
///
/// ```
/// use weaver_core::{GenerateRequest, Message, Role, DEFAULT_TEMPERATURE};
///
/// let request = GenerateRequest {
///     messages: vec![Message::new(Role::User, "Let's begin.")],
///     temperature: Some(DEFAULT_TEMPERATURE),
///     ..Default::default()
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Builder)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Model identifier to use
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new builder for GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// A text generation response.
///
/// # Examples
///
/// ```
/// use weaver_core::GenerateResponse;
///
/// let response = GenerateResponse::new("Once upon a time...");
/// assert!(response.text().starts_with("Once"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerateResponse {
    /// The generated reply text
    text: String,
}

impl GenerateResponse {
    /// Create a response from reply text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
