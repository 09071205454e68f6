//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single message in a story conversation.
///
/// Content is an opaque text blob; the pipeline never interprets message
/// text except through the segment parser.
///
/// # Examples
///
/// ```
/// use weaver_core::{Message, Role};
///
/// let message = Message::new(Role::User, "Let's begin.");
///
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content, "Let's begin.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// Create a new message.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
