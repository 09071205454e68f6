//! Raw reply parsing.
//!
//! Model replies are expected to present choices in bracketed form, e.g.
//! `[Follow the path] or [Climb the tree]`. Replies that fall back to a
//! numbered list still parse; anything else degrades to a choice-free
//! narrative rather than an error.

use crate::ParsedSegment;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Maximum number of choices surfaced from one reply.
const MAX_CHOICES: usize = 3;

/// Phrase that marks the story's conclusion.
const TERMINAL_PHRASE: &str = "the end";

static BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]").unwrap_or_else(|e| panic!("bracket regex: {}", e)));

static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*\d+[.)]\s*(.+)$").unwrap_or_else(|e| panic!("numbered regex: {}", e))
});

/// Parse one raw model reply into narrative, choices, and a terminal flag.
///
/// Strategy chain: bracketed choices first, then a numbered list, then the
/// whole reply as a choice-free narrative. The narrative is the text before
/// the first choice marker. A segment is terminal when it offers no choices
/// and its narrative contains "The End" (case-insensitive).
///
/// # Examples
///
/// ```
/// use weaver_story::parse_segment;
///
/// let segment = parse_segment(
///     "Mira reached a fork in the path. Which way should she go?\n\
///      [Take the sunny trail] or [Follow the fireflies]",
/// );
/// assert_eq!(segment.choices.len(), 2);
/// assert!(!segment.is_terminal);
/// ```
pub fn parse_segment(raw: &str) -> ParsedSegment {
    let (narrative, choices) = extract_bracketed(raw)
        .or_else(|| extract_numbered(raw))
        .unwrap_or_else(|| {
            warn!("Reply contained no recognizable choices");
            (raw.trim().to_string(), Vec::new())
        });

    let is_terminal = choices.is_empty() && narrative.to_lowercase().contains(TERMINAL_PHRASE);
    debug!(
        choice_count = choices.len(),
        is_terminal, "Parsed story reply"
    );

    ParsedSegment {
        narrative,
        choices,
        is_terminal,
    }
}

/// Bracketed choices: `[Choice 1] or [Choice 2]`.
fn extract_bracketed(raw: &str) -> Option<(String, Vec<String>)> {
    let first = BRACKET_RE.find(raw)?;
    let choices: Vec<String> = BRACKET_RE
        .captures_iter(raw)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|choice| !choice.is_empty())
        .take(MAX_CHOICES)
        .collect();
    if choices.is_empty() {
        return None;
    }
    Some((raw[..first.start()].trim().to_string(), choices))
}

/// Numbered list fallback: `1. Choice` or `2) Choice`.
fn extract_numbered(raw: &str) -> Option<(String, Vec<String>)> {
    let first = NUMBERED_RE.find(raw)?;
    let choices: Vec<String> = NUMBERED_RE
        .captures_iter(raw)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|choice| !choice.is_empty())
        .take(MAX_CHOICES)
        .collect();
    if choices.is_empty() {
        return None;
    }
    Some((raw[..first.start()].trim().to_string(), choices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracketed_choices() {
        let segment = parse_segment(
            "Leo found a glowing door in the old oak tree. What should he do?\n\
             [Open the door] or [Knock first] or [Wait and watch]",
        );
        assert_eq!(
            segment.narrative,
            "Leo found a glowing door in the old oak tree. What should he do?"
        );
        assert_eq!(
            segment.choices,
            vec!["Open the door", "Knock first", "Wait and watch"]
        );
        assert!(!segment.is_terminal);
    }

    #[test]
    fn numbered_fallback() {
        let segment = parse_segment(
            "The tortoise smiled at the finish line. What happens next?\n\
             1. Celebrate with friends\n\
             2) Take a long nap",
        );
        assert_eq!(
            segment.narrative,
            "The tortoise smiled at the finish line. What happens next?"
        );
        assert_eq!(
            segment.choices,
            vec!["Celebrate with friends", "Take a long nap"]
        );
    }

    #[test]
    fn brackets_take_priority_over_numbers() {
        let segment = parse_segment("Pick 1 of these: [First] or [Second]");
        assert_eq!(segment.choices, vec!["First", "Second"]);
    }

    #[test]
    fn no_choices_is_not_an_error() {
        let segment = parse_segment("And they all lived happily ever after.");
        assert!(segment.choices.is_empty());
        assert!(!segment.is_terminal);
        assert_eq!(segment.narrative, "And they all lived happily ever after.");
    }

    #[test]
    fn terminal_requires_phrase_and_no_choices() {
        let segment =
            parse_segment("They shared the berries with everyone in the forest. The End.");
        assert!(segment.is_terminal);

        let with_choices = parse_segment("Is this the end? [Yes] or [No]");
        assert!(!with_choices.is_terminal);
    }

    #[test]
    fn terminal_phrase_is_case_insensitive() {
        let segment = parse_segment("THE END");
        assert!(segment.is_terminal);
    }

    #[test]
    fn empty_brackets_are_skipped() {
        let segment = parse_segment("Choose: [] or [Run home]");
        assert_eq!(segment.choices, vec!["Run home"]);
    }

    #[test]
    fn choices_capped_at_three() {
        let segment = parse_segment("Pick: [A] [B] [C] [D] [E]");
        assert_eq!(segment.choices, vec!["A", "B", "C"]);
    }

    #[test]
    fn choice_whitespace_trimmed() {
        let segment = parse_segment("Go where?\n[  the beach ] or [ the hills]");
        assert_eq!(segment.choices, vec!["the beach", "the hills"]);
    }

    #[test]
    fn empty_reply_yields_empty_segment() {
        let segment = parse_segment("");
        assert!(segment.narrative.is_empty());
        assert!(segment.choices.is_empty());
        assert!(!segment.is_terminal);
    }
}
