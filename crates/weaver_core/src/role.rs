//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Role of a message sender in a story conversation.
///
/// # Examples
///
/// ```
/// use weaver_core::Role;
///
/// let user_role = Role::User;
/// let assistant_role = Role::Assistant;
/// assert_ne!(user_role, assistant_role);
///
/// // Display implementation
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages carry the storyteller instruction
    System,
    /// User messages are the child's chosen options
    User,
    /// Assistant messages are the generated story segments
    Assistant,
}
