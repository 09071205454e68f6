//! Story orchestration error types.

/// Story orchestration error conditions.
///
/// These cover caller-side mistakes that make a turn impossible to run.
/// Parse ambiguity is deliberately absent: a reply matching neither choice
/// convention falls back to a zero-choice segment and is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StoryErrorKind {
    /// Continuation requested without supplying the chosen option
    #[display("A continuation turn requires the user's choice")]
    MissingChoice,

    /// Supplied conversation history contains no messages
    #[display("Conversation history is empty")]
    EmptyHistory,
}

/// Story orchestration error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at {}:{}", kind, file, line)]
pub struct StoryError {
    /// The specific error kind
    pub kind: StoryErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl StoryError {
    /// Create a new story error at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use weaver_error::{StoryError, StoryErrorKind};
    ///
    /// let err = StoryError::new(StoryErrorKind::MissingChoice);
    /// assert!(format!("{}", err).contains("choice"));
    /// ```
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
