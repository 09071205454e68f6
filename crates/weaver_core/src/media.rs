//! Media asset types for generated narration and illustrations.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Modality of a generated media asset.
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
pub enum MediaKind {
    /// Synthesized speech audio
    Audio,
    /// Synthesized illustration
    Image,
}

/// One generated media asset, scoped to a single job's result.
///
/// A failed synthesis call yields an asset with no payload rather than an
/// error: per-task failure isolation is the central resilience contract of
/// the turn pipeline.
///
/// # Examples
///
/// ```
/// use weaver_core::{MediaAsset, MediaKind};
///
/// let ok = MediaAsset::present(MediaKind::Audio, "Once upon a time", vec![0xff, 0xf3]);
/// let failed = MediaAsset::missing(MediaKind::Image, "Once upon a time");
///
/// assert!(ok.is_present());
/// assert!(!failed.is_present());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MediaAsset {
    /// Modality of the asset
    kind: MediaKind,
    /// The text this asset was generated from
    source_text: String,
    /// Encoded payload bytes, absent when synthesis failed
    data: Option<Vec<u8>>,
}

impl MediaAsset {
    /// Create an asset holding a successfully generated payload.
    pub fn present(kind: MediaKind, source_text: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            kind,
            source_text: source_text.into(),
            data: Some(data),
        }
    }

    /// Create an empty asset recording an isolated synthesis failure.
    pub fn missing(kind: MediaKind, source_text: impl Into<String>) -> Self {
        Self {
            kind,
            source_text: source_text.into(),
            data: None,
        }
    }

    /// True when the asset holds a payload.
    pub fn is_present(&self) -> bool {
        self.data.is_some()
    }
}

/// Reference portrait supplied with the story configuration.
///
/// Image backends are instructed to preserve recognizable facial likeness
/// from this image in every illustration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ReferenceImage {
    /// MIME type, e.g. "image/png" or "image/jpeg"
    mime: String,
    /// Raw image bytes
    data: Vec<u8>,
}

impl ReferenceImage {
    /// Create a new reference image.
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }
}
