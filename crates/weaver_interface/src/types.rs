//! Shared types for backend traits.

use serde::{Deserialize, Serialize};

/// Render quality for synthesized illustrations.
///
/// Selects between the two prompt-augmentation templates: a larger
/// storybook-style illustration for the segment narrative versus a small
/// icon-style render for choice buttons. Both preserve facial likeness from
/// the reference image and produce a square aspect ratio.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum ImageQuality {
    /// Small icon-style render for choices
    Standard,
    /// Storybook-style illustration for the narrative
    High,
}
