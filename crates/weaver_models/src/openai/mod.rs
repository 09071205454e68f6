//! OpenAI API clients: chat completions and speech synthesis.

mod chat;
mod dto;
mod speech;

pub use chat::ChatClient;
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatUsage, SpeechRequest};
pub use speech::SpeechClient;
