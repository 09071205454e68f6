//! Backend traits for the Weaver storytelling pipeline.
//!
//! These traits are the seams between the turn orchestrator and the remote
//! generation services. Implementations live in `weaver_models`; tests
//! substitute mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ImageSynthesizer, NarrativeDriver, SpeechSynthesizer};
pub use types::ImageQuality;
