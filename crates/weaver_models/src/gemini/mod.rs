//! Google Gemini API client for image synthesis.

mod dto;
mod image;

pub use dto::{
    GeminiCandidate, GeminiContent, GeminiPart, GeminiRequest, GeminiResponse, GenerationConfig,
    InlineData,
};
pub use image::ImageClient;
