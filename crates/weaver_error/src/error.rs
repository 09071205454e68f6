//! Top-level error wrapper types.

use crate::{ConfigError, StoryError, UpstreamError};

/// Foundation error enum for the Weaver workspace.
///
/// # Examples
///
/// ```
/// use weaver_error::{WeaverError, ConfigError};
///
/// let config_err = ConfigError::new("Missing field: prompt");
/// let err: WeaverError = config_err.into();
/// assert!(format!("{}", err).contains("Config Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum WeaverErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Generation backend error
    #[from(UpstreamError)]
    Upstream(UpstreamError),
    /// Story orchestration error
    #[from(StoryError)]
    Story(StoryError),
}

/// Weaver error with kind discrimination.
///
/// # Examples
///
/// ```
/// use weaver_error::{WeaverResult, ConfigError};
///
/// fn might_fail() -> WeaverResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Weaver Error: {}", _0)]
pub struct WeaverError(Box<WeaverErrorKind>);

impl WeaverError {
    /// Create a new error from a kind.
    pub fn new(kind: WeaverErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &WeaverErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to WeaverErrorKind
impl<T> From<T> for WeaverError
where
    T: Into<WeaverErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Weaver operations.
///
/// # Examples
///
/// ```
/// use weaver_error::{WeaverResult, UpstreamError, UpstreamErrorKind};
///
/// fn fetch_data() -> WeaverResult<String> {
///     Err(UpstreamError::new(UpstreamErrorKind::EmptyResponse))?
/// }
/// ```
pub type WeaverResult<T> = std::result::Result<T, WeaverError>;
