//! Story segment types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use weaver_core::{Conversation, MediaAsset};

/// Structured form of one raw story reply.
///
/// Produced by [`parse_segment`](crate::parse_segment) before any media
/// synthesis happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSegment {
    /// Narrative prose, stripped of choice markup
    pub narrative: String,
    /// Choice texts in document order
    pub choices: Vec<String>,
    /// True when the story has concluded
    pub is_terminal: bool,
}

/// Media bundle for one choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChoiceAssets {
    /// Choice text as parsed from the reply
    text: String,
    /// Spoken rendition of the choice text
    audio: MediaAsset,
    /// Icon-style illustration, absent when illustrations are disabled
    image: Option<MediaAsset>,
}

impl ChoiceAssets {
    /// Create a new choice bundle.
    pub fn new(text: impl Into<String>, audio: MediaAsset, image: Option<MediaAsset>) -> Self {
        Self {
            text: text.into(),
            audio,
            image,
        }
    }
}

/// Complete result of one story turn.
///
/// Ordering is stable regardless of which synthesis task finished first:
/// narration, then illustration, then choices in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StorySegment {
    /// Narrative prose for display
    narrative_text: String,
    /// Spoken rendition of the narrative plus choice texts
    narration: MediaAsset,
    /// Scene illustration, absent when illustrations are disabled or no
    /// reference image was supplied
    illustration: Option<MediaAsset>,
    /// Choices in document order, empty on a terminal segment
    choices: Vec<ChoiceAssets>,
    /// True when the story has concluded
    is_terminal: bool,
    /// Conversation history including this turn's exchange
    history: Conversation,
}

impl StorySegment {
    /// Assemble a segment from settled media slots.
    pub fn new(
        narrative_text: impl Into<String>,
        narration: MediaAsset,
        illustration: Option<MediaAsset>,
        choices: Vec<ChoiceAssets>,
        is_terminal: bool,
        history: Conversation,
    ) -> Self {
        Self {
            narrative_text: narrative_text.into(),
            narration,
            illustration,
            choices,
            is_terminal,
            history,
        }
    }
}
