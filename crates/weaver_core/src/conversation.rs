//! Append-only conversation history.

use crate::{Message, Role};
use serde::{Deserialize, Serialize};

/// Ordered, append-only sequence of role-tagged messages.
///
/// The history is owned by the caller, threaded through every turn, and
/// returned augmented so the caller can persist it for the next request.
/// Invariant: the first message, if present, is the system instruction;
/// messages are never mutated in place, only appended.
///
/// # Examples
///
/// ```
/// use weaver_core::{Conversation, Role};
///
/// let mut history = Conversation::new();
/// history.push_system("You are a storyteller.");
/// history.push_user("Let's begin.");
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.messages()[0].role, Role::System);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation(Vec<Message>);

impl Conversation {
    /// Create an empty conversation.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a conversation from an existing ordered message sequence.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self(messages)
    }

    /// Append a system instruction.
    pub fn push_system(&mut self, content: impl Into<String>) {
        self.0.push(Message::new(Role::System, content));
    }

    /// Append a user message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.0.push(Message::new(Role::User, content));
    }

    /// Append an assistant message.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.0.push(Message::new(Role::Assistant, content));
    }

    /// All messages in order of appending.
    pub fn messages(&self) -> &[Message] {
        &self.0
    }

    /// The most recently appended message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    /// Number of messages in the history.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no messages have been appended.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
