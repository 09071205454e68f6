//! Generation backend error types.
//!
//! Upstream errors cover every remote generation backend the pipeline talks
//! to: text completion, speech synthesis, and image synthesis. The kinds
//! distinguish transport failures from API rejections and from the expected
//! "succeeded but produced no usable payload" outcome.

/// Generation backend error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum UpstreamErrorKind {
    /// API key not found in environment
    #[display("{} environment variable not set", _0)]
    MissingApiKey(String),

    /// Request failed before reaching the backend
    #[display("Transport error: {}", _0)]
    Transport(String),

    /// Backend returned a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the backend
        message: String,
    },

    /// Response body could not be decoded
    #[display("Failed to decode response: {}", _0)]
    Decode(String),

    /// Backend returned a well-formed response with no choices
    #[display("Backend returned no completion choices")]
    EmptyResponse,

    /// Backend returned a response with no extractable media payload.
    ///
    /// This is a distinct, expected failure mode for image synthesis, not a
    /// transport or API error.
    #[display("No media payload found in backend response")]
    NoContent,
}

/// Generation backend error with location tracking.
///
/// # Examples
///
/// ```
/// use weaver_error::{UpstreamError, UpstreamErrorKind};
///
/// let err = UpstreamError::new(UpstreamErrorKind::NoContent);
/// assert!(err.is_no_content());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upstream Error: {} at {}:{}", kind, file, line)]
pub struct UpstreamError {
    /// The specific error kind
    pub kind: UpstreamErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl UpstreamError {
    /// Create a new upstream error at the current location.
    #[track_caller]
    pub fn new(kind: UpstreamErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the backend answered but produced no media payload.
    pub fn is_no_content(&self) -> bool {
        matches!(self.kind, UpstreamErrorKind::NoContent)
    }
}
