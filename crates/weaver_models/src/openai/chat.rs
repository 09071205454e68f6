//! OpenAI-compatible chat completions client.

use crate::openai::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use weaver_core::{GenerateRequest, GenerateResponse, Role};
use weaver_error::{UpstreamError, UpstreamErrorKind, WeaverResult};
use weaver_interface::NarrativeDriver;

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Client for OpenAI-compatible chat completion APIs.
///
/// Sends the full conversation history in one request and returns the first
/// completion choice. No retry: a failed call fails the turn's text phase.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl ChatClient {
    /// Creates a new chat client.
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

    /// Creates a new chat client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        debug!(model = %model, "Creating new chat client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model,
            base_url: OPENAI_CHAT_URL.to_string(),
        }
    }

    /// Override the endpoint URL, for OpenAI-compatible providers.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Converts a Weaver GenerateRequest to the OpenAI chat format.
    fn convert_request(&self, request: &GenerateRequest) -> WeaverResult<ChatRequest> {
        let messages: Vec<ChatMessage> = request
            .messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::System => "system",
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };
                ChatMessage {
                    role: role.to_string(),
                    content: msg.content.clone(),
                }
            })
            .collect();

        let mut builder = ChatRequest::builder();
        builder
            .model(request.model.clone().unwrap_or_else(|| self.model.clone()))
            .messages(messages);

        if let Some(max_tokens) = request.max_tokens {
            builder.max_tokens(Some(max_tokens));
        }
        if let Some(temperature) = request.temperature {
            builder.temperature(Some(temperature));
        }

        builder.build().map_err(|e| {
            UpstreamError::new(UpstreamErrorKind::Decode(format!(
                "Failed to build chat request: {}",
                e
            )))
            .into()
        })
    }
}

#[async_trait]
impl NarrativeDriver for ChatClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.model))]
    async fn generate(&self, req: &GenerateRequest) -> WeaverResult<GenerateResponse> {
        let chat_request = self.convert_request(req)?;

        debug!(
            message_count = chat_request.messages().len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                UpstreamError::new(UpstreamErrorKind::Transport(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Chat API returned error");
            return Err(UpstreamError::new(UpstreamErrorKind::Api {
                status: status.as_u16(),
                message: body,
            })
            .into());
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse chat response");
            UpstreamError::new(UpstreamErrorKind::Decode(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                prompt_tokens = ?usage.prompt_tokens,
                completion_tokens = ?usage.completion_tokens,
                "Received chat completion"
            );
        }

        let text = chat_response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| UpstreamError::new(UpstreamErrorKind::EmptyResponse))?;

        Ok(GenerateResponse::new(text))
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
