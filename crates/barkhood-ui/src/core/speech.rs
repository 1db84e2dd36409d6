//! Text-to-speech requests, built without touching the platform.

use barkhood_i18n::{Language, SpeechLocale};

/// A single utterance ready to hand to the speech engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeechRequest {
    /// Text to read aloud.
    pub text: String,
    /// Voice locale derived from the language.
    pub locale: SpeechLocale,
}

impl SpeechRequest {
    /// Build a request, or `None` when there is nothing to say.
    #[must_use]
    pub fn new(text: &str, language: Language) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            locale: language.speech_locale(),
        })
    }
}
