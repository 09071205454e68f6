//! Generation configuration.
//!
//! Model names, the default voice, and the system prompt template load from
//! bundled defaults (`include_str!` of weaver.toml), optionally overridden
//! by a `weaver.toml` next to the running process.

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use serde::Deserialize;
use tracing::debug;
use weaver_error::{ConfigError, WeaverResult};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../weaver.toml");

/// OpenAI provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct OpenAiConfig {
    /// Chat completion model for narrative text
    text_model: String,
    /// Speech synthesis model for narration audio
    tts_model: String,
}

/// Gemini provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct GeminiConfig {
    /// Multimodal model for illustrations
    image_model: String,
}

/// Per-provider model selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ProvidersConfig {
    /// OpenAI settings
    openai: OpenAiConfig,
    /// Gemini settings
    gemini: GeminiConfig,
}

/// Story prompt settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct StoryPromptConfig {
    /// Voice identifier used when the story config does not override it
    default_voice: String,
    /// System prompt template with {name}, {age} and {details} placeholders
    prompt: String,
}

/// Generation settings for one deployment.
///
/// # Examples
///
/// ```
/// use weaver_story::GenerationConfig;
///
/// let config = GenerationConfig::load().unwrap();
/// assert!(!config.text_model().is_empty());
/// assert!(config.prompt_template().contains("{name}"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct GenerationConfig {
    /// Per-provider model selection
    providers: ProvidersConfig,
    /// Story prompt settings
    story: StoryPromptConfig,
}

impl GenerationConfig {
    /// Load configuration: bundled defaults merged with an optional
    /// `weaver.toml` in the working directory (user values win).
    ///
    /// # Errors
    ///
    /// Returns error if an override file exists but cannot be parsed, or if
    /// the merged configuration is missing required fields.
    pub fn load() -> WeaverResult<Self> {
        let merged = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name("weaver").required(false))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?;

        let config: Self = merged
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))?;

        debug!(
            text_model = %config.text_model(),
            tts_model = %config.tts_model(),
            image_model = %config.image_model(),
            "Loaded generation configuration"
        );
        Ok(config)
    }

    /// Chat completion model for narrative text.
    pub fn text_model(&self) -> &str {
        &self.providers.openai.text_model
    }

    /// Speech synthesis model for narration audio.
    pub fn tts_model(&self) -> &str {
        &self.providers.openai.tts_model
    }

    /// Multimodal model for illustrations.
    pub fn image_model(&self) -> &str {
        &self.providers.gemini.image_model
    }

    /// Voice identifier used when the story config does not override it.
    pub fn default_voice(&self) -> &str {
        &self.story.default_voice
    }

    /// System prompt template.
    pub fn prompt_template(&self) -> &str {
        &self.story.prompt
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        // The bundled defaults are validated by test below; a parse failure
        // here is a packaging bug, not a runtime condition.
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .and_then(Config::try_deserialize)
            .unwrap_or_else(|e| panic!("bundled weaver.toml is invalid: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        let config = GenerationConfig::default();
        assert_eq!(config.text_model(), "gpt-4o");
        assert_eq!(config.tts_model(), "tts-1");
        assert!(config.image_model().starts_with("gemini"));
        assert_eq!(config.default_voice(), "alloy");
    }

    #[test]
    fn prompt_template_has_placeholders() {
        let config = GenerationConfig::default();
        for placeholder in ["{name}", "{age}", "{details}"] {
            assert!(
                config.prompt_template().contains(placeholder),
                "missing {}",
                placeholder
            );
        }
    }
}
