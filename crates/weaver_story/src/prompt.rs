//! System prompt construction.

use weaver_core::StoryConfig;

/// First user message of every session, sent after the system prompt to
/// trigger the adventure-selection question.
pub const OPENING_MESSAGE: &str = "Let's begin.";

/// Interpolate the story configuration into a prompt template.
///
/// The template's `{name}`, `{age}`, and `{details}` placeholders are
/// replaced with the child's name, age, and joined personalization details.
pub fn build_system_prompt(story: &StoryConfig, template: &str) -> String {
    template
        .replace("{name}", story.child_name())
        .replace("{age}", &story.child_age().to_string())
        .replace("{details}", &story.personalization_details())
}
