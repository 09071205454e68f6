//! Turn orchestration.
//!
//! A turn runs in two phases. Phase one extends the conversation and calls
//! the narrative backend; a failure here fails the whole turn. Phase two
//! fans out one synthesis task per media slot and settles them all in
//! parallel; a failure here empties that slot and nothing else.

use crate::{
    ChoiceAssets, GenerationConfig, OPENING_MESSAGE, ParsedSegment, StorySegment,
    build_system_prompt, parse_segment,
};
use derive_getters::Getters;
use futures::FutureExt;
use futures::future::{BoxFuture, join_all};
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use weaver_core::{
    Conversation, DEFAULT_TEMPERATURE, GenerateRequest, MediaAsset, MediaKind, ReferenceImage,
    StoryConfig,
};
use weaver_error::{StoryError, StoryErrorKind, WeaverResult};
use weaver_interface::{ImageQuality, ImageSynthesizer, NarrativeDriver, SpeechSynthesizer};

/// Output of the text phase, input to the media phase.
#[derive(Debug, Clone, Getters)]
pub struct TurnText {
    /// Conversation history including this turn's exchange
    history: Conversation,
    /// Parsed form of the model reply
    parsed: ParsedSegment,
}

/// Identifies which media slot a settled task fills.
enum Slot {
    Narration,
    Illustration,
    ChoiceAudio(usize),
    ChoiceImage(usize),
}

/// Runs story turns against pluggable generation backends.
///
/// Holds no per-session state; the caller threads the conversation history
/// through each call.
pub struct TurnOrchestrator {
    narrative: Arc<dyn NarrativeDriver>,
    speech: Arc<dyn SpeechSynthesizer>,
    image: Arc<dyn ImageSynthesizer>,
    config: GenerationConfig,
}

impl TurnOrchestrator {
    /// Creates a new orchestrator over the given backends.
    pub fn new(
        narrative: Arc<dyn NarrativeDriver>,
        speech: Arc<dyn SpeechSynthesizer>,
        image: Arc<dyn ImageSynthesizer>,
        config: GenerationConfig,
    ) -> Self {
        Self {
            narrative,
            speech,
            image,
            config,
        }
    }

    /// Run one complete turn: text phase then media phase.
    ///
    /// Pass `None` history to start a session; the choice is ignored and the
    /// opening adventure question is generated. Continuing a session requires
    /// both a non-empty history and the chosen option.
    ///
    /// # Errors
    ///
    /// Returns error if the text phase fails. Media failures never surface
    /// here; they leave empty slots in the returned segment.
    #[instrument(skip_all, fields(child = %story.child_name()))]
    pub async fn run_turn(
        &self,
        history: Option<Conversation>,
        choice: Option<String>,
        story: &StoryConfig,
    ) -> WeaverResult<StorySegment> {
        let turn = self.generate_text(history, choice, story).await?;
        Ok(self.generate_media(turn, story).await)
    }

    /// Text phase: extend the conversation, call the narrative backend, and
    /// parse the reply.
    ///
    /// # Errors
    ///
    /// Returns error when a history is supplied without a choice, when the
    /// supplied history is empty, or when the narrative backend fails.
    #[instrument(skip_all, fields(provider = self.narrative.provider_name()))]
    pub async fn generate_text(
        &self,
        history: Option<Conversation>,
        choice: Option<String>,
        story: &StoryConfig,
    ) -> WeaverResult<TurnText> {
        let mut history = match (history, choice) {
            (None, _) => {
                debug!("Starting new story session");
                let mut conversation = Conversation::new();
                conversation
                    .push_system(build_system_prompt(story, self.config.prompt_template()));
                conversation.push_user(OPENING_MESSAGE);
                conversation
            }
            (Some(history), Some(choice)) => {
                if history.is_empty() {
                    return Err(StoryError::new(StoryErrorKind::EmptyHistory).into());
                }
                let mut conversation = history;
                conversation.push_user(choice);
                conversation
            }
            (Some(_), None) => {
                return Err(StoryError::new(StoryErrorKind::MissingChoice).into());
            }
        };

        let request = GenerateRequest {
            messages: history.messages().to_vec(),
            max_tokens: None,
            temperature: Some(DEFAULT_TEMPERATURE),
            model: Some(self.config.text_model().to_string()),
        };
        let response = self.narrative.generate(&request).await?;

        history.push_assistant(response.text());
        let parsed = parse_segment(response.text());
        debug!(
            history_len = history.len(),
            choice_count = parsed.choices.len(),
            is_terminal = parsed.is_terminal,
            "Text phase complete"
        );

        Ok(TurnText { history, parsed })
    }

    /// Media phase: fan out speech and illustration synthesis for every slot
    /// of the segment and settle them all in parallel.
    ///
    /// Never fails. Each synthesis error is logged and leaves its slot
    /// empty; every other slot still fills.
    #[instrument(skip_all, fields(choice_count = turn.parsed().choices.len()))]
    pub async fn generate_media(&self, turn: TurnText, story: &StoryConfig) -> StorySegment {
        let TurnText { history, parsed } = turn;
        let choice_texts: &[String] = if parsed.is_terminal {
            &[]
        } else {
            &parsed.choices
        };
        let narration_text = narration_text(&parsed.narrative, choice_texts);
        let voice = story
            .voice()
            .as_deref()
            .unwrap_or_else(|| self.config.default_voice());
        let reference = if *story.illustrations() {
            story.reference_image().as_ref()
        } else {
            None
        };

        let mut slots = Vec::new();
        let mut tasks: Vec<BoxFuture<'_, MediaAsset>> = Vec::new();

        slots.push(Slot::Narration);
        tasks.push(self.settle_audio(&narration_text, voice).boxed());

        if let Some(reference) = reference {
            slots.push(Slot::Illustration);
            tasks.push(
                self.settle_image(&parsed.narrative, reference, ImageQuality::High)
                    .boxed(),
            );
        }

        for (index, choice) in choice_texts.iter().enumerate() {
            slots.push(Slot::ChoiceAudio(index));
            tasks.push(self.settle_audio(choice, voice).boxed());
            if let Some(reference) = reference {
                slots.push(Slot::ChoiceImage(index));
                tasks.push(
                    self.settle_image(choice, reference, ImageQuality::Standard)
                        .boxed(),
                );
            }
        }

        let settled = join_all(tasks).await;

        let mut narration = MediaAsset::missing(MediaKind::Audio, &narration_text);
        let mut illustration = None;
        let mut choice_audio: Vec<Option<MediaAsset>> = vec![None; choice_texts.len()];
        let mut choice_images: Vec<Option<MediaAsset>> = vec![None; choice_texts.len()];

        for (slot, asset) in slots.into_iter().zip(settled) {
            match slot {
                Slot::Narration => narration = asset,
                Slot::Illustration => illustration = Some(asset),
                Slot::ChoiceAudio(index) => choice_audio[index] = Some(asset),
                Slot::ChoiceImage(index) => choice_images[index] = Some(asset),
            }
        }

        let choices = choice_texts
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let audio = choice_audio[index]
                    .take()
                    .unwrap_or_else(|| MediaAsset::missing(MediaKind::Audio, text));
                ChoiceAssets::new(text, audio, choice_images[index].take())
            })
            .collect();

        StorySegment::new(
            parsed.narrative,
            narration,
            illustration,
            choices,
            parsed.is_terminal,
            history,
        )
    }

    /// Synthesize speech, converting failure into an empty asset.
    async fn settle_audio(&self, text: &str, voice: &str) -> MediaAsset {
        match self.speech.synthesize(text, voice).await {
            Ok(data) => MediaAsset::present(MediaKind::Audio, text, data),
            Err(e) => {
                warn!(
                    provider = self.speech.provider_name(),
                    error = %e,
                    "Speech synthesis failed"
                );
                MediaAsset::missing(MediaKind::Audio, text)
            }
        }
    }

    /// Synthesize an illustration, converting failure into an empty asset.
    async fn settle_image(
        &self,
        prompt: &str,
        reference: &ReferenceImage,
        quality: ImageQuality,
    ) -> MediaAsset {
        match self.image.illustrate(prompt, reference, quality).await {
            Ok(data) => MediaAsset::present(MediaKind::Image, prompt, data),
            Err(e) => {
                warn!(
                    provider = self.image.provider_name(),
                    error = %e,
                    "Image synthesis failed"
                );
                MediaAsset::missing(MediaKind::Image, prompt)
            }
        }
    }
}

/// Text spoken for the narration slot: the narrative followed by the choice
/// texts so the child hears the options read aloud.
fn narration_text(narrative: &str, choices: &[String]) -> String {
    if choices.is_empty() {
        return narrative.to_string();
    }
    format!("{} {}", narrative, choices.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narration_text_appends_choices() {
        let choices = vec!["Go left".to_string(), "Go right".to_string()];
        assert_eq!(
            narration_text("A fork in the road.", &choices),
            "A fork in the road. Go left. Go right"
        );
    }

    #[test]
    fn narration_text_without_choices() {
        assert_eq!(narration_text("The End.", &[]), "The End.");
    }
}
