//! Per-session story personalization.

use crate::ReferenceImage;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable-per-session bundle of personalization fields.
///
/// Created once at session start from caller-supplied data and never
/// mutated; every orchestration call borrows it.
///
/// # Examples
///
/// ```
/// use weaver_core::StoryConfig;
///
/// let config = StoryConfig::builder()
///     .child_name("Marton")
///     .child_age(5u8)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.child_name(), "Marton");
/// assert_eq!(*config.child_age(), 5);
/// assert!(*config.illustrations());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct StoryConfig {
    /// Name of the child the story is personalized for
    child_name: String,
    /// Age of the child
    #[builder(default = "6")]
    child_age: u8,
    /// Personalization keys and values woven into the story
    #[builder(default)]
    personalization: BTreeMap<String, String>,
    /// Reference portrait for facial likeness in illustrations
    #[builder(default)]
    reference_image: Option<ReferenceImage>,
    /// Voice identifier override; the generation config's default voice
    /// applies when unset
    #[builder(default)]
    voice: Option<String>,
    /// Whether to generate illustrations for segments and choices
    #[builder(default = "true")]
    illustrations: bool,
}

impl StoryConfig {
    /// Creates a new builder for StoryConfig.
    pub fn builder() -> StoryConfigBuilder {
        StoryConfigBuilder::default()
    }

    /// Joined personalization details for prompt interpolation.
    ///
    /// Keys have underscores replaced by spaces, so
    /// `favourite_animal = rabbit` renders as "favourite animal is rabbit".
    /// Empty values are skipped.
    pub fn personalization_details(&self) -> String {
        self.personalization
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{} is {}", key.replace('_', " "), value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personalization_details_join_and_skip_empty() {
        let mut personalization = BTreeMap::new();
        personalization.insert("favourite_animal".to_string(), "rabbit".to_string());
        personalization.insert("favourite_colour".to_string(), "yellow".to_string());
        personalization.insert("pet_name".to_string(), String::new());

        let config = StoryConfig::builder()
            .child_name("Marton")
            .personalization(personalization)
            .build()
            .unwrap();

        assert_eq!(
            config.personalization_details(),
            "favourite animal is rabbit, favourite colour is yellow"
        );
    }

    #[test]
    fn builder_defaults() {
        let config = StoryConfig::builder().child_name("Ada").build().unwrap();
        assert_eq!(*config.child_age(), 6);
        assert!(config.voice().is_none());
        assert!(config.reference_image().is_none());
        assert!(config.personalization_details().is_empty());
    }
}
