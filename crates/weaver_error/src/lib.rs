//! Error types for the Weaver storytelling pipeline.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use weaver_error::{WeaverResult, UpstreamError, UpstreamErrorKind};
//!
//! fn fetch_data() -> WeaverResult<String> {
//!     Err(UpstreamError::new(UpstreamErrorKind::Transport(
//!         "Connection refused".to_string(),
//!     )))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod story;
mod upstream;

pub use config::ConfigError;
pub use error::{WeaverError, WeaverErrorKind, WeaverResult};
pub use story::{StoryError, StoryErrorKind};
pub use upstream::{UpstreamError, UpstreamErrorKind};
