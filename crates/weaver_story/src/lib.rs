//! Turn orchestration and segment parsing for the Weaver storytelling
//! pipeline.
//!
//! One turn takes the conversation so far plus the child's chosen option,
//! generates the next story reply, parses it into a narrative and up to
//! three choices, then fans out parallel speech and illustration synthesis
//! for every piece of the segment. Individual media failures are isolated;
//! only a failed text generation fails the turn.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod orchestrator;
mod parser;
mod prompt;
mod segment;

pub use config::GenerationConfig;
pub use orchestrator::{TurnOrchestrator, TurnText};
pub use parser::parse_segment;
pub use prompt::{OPENING_MESSAGE, build_system_prompt};
pub use segment::{ChoiceAssets, ParsedSegment, StorySegment};
