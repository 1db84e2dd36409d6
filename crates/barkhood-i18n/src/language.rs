//! Supported languages and the metadata derived from them.

use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Hebrew.
    He,
    /// English.
    En,
    /// Chinese (Simplified).
    Zh,
    /// Hindi.
    Hi,
    /// German.
    De,
    /// Spanish.
    Es,
    /// French.
    Fr,
}

/// Language used when nothing else has been selected.
pub const DEFAULT_LANGUAGE: Language = Language::He;

impl Language {
    /// All supported languages in display order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::He,
            Self::En,
            Self::Zh,
            Self::Hi,
            Self::De,
            Self::Es,
            Self::Fr,
        ]
    }

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::He => "he",
            Self::En => "en",
            Self::Zh => "zh",
            Self::Hi => "hi",
            Self::De => "de",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    /// Endonym shown in the language picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::He => "עברית",
            Self::En => "English",
            Self::Zh => "中文",
            Self::Hi => "हिन्दी",
            Self::De => "Deutsch",
            Self::Es => "Español",
            Self::Fr => "Français",
        }
    }

    /// English name, used when instructing the model which language to answer in.
    #[must_use]
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::He => "Hebrew",
            Self::En => "English",
            Self::Zh => "Simplified Chinese",
            Self::Hi => "Hindi",
            Self::De => "German",
            Self::Es => "Spanish",
            Self::Fr => "French",
        }
    }

    /// Map an arbitrary language tag (`en-US`, `HE`) to a supported language.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        // `iw` is the legacy ISO code some browsers still report for Hebrew.
        let base = if base == "iw" { "he" } else { base };
        Self::all()
            .iter()
            .copied()
            .find(|language| language.code() == base)
    }

    /// Text direction for this language. Hebrew is the only RTL language.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::He => Direction::Rtl,
            Self::En | Self::Zh | Self::Hi | Self::De | Self::Es | Self::Fr => Direction::Ltr,
        }
    }

    /// Locale tag handed to the platform speech synthesizer.
    ///
    /// Only Hebrew and English have a dedicated voice locale. The remaining
    /// languages are read with the English voice and report
    /// [`LocaleMapping::Fallback`] so callers can see the gap.
    #[must_use]
    pub const fn speech_locale(self) -> SpeechLocale {
        match self {
            Self::He => SpeechLocale::explicit("he-IL"),
            Self::En => SpeechLocale::explicit("en-US"),
            Self::Zh | Self::Hi | Self::De | Self::Es | Self::Fr => SpeechLocale::fallback("en-US"),
        }
    }
}

/// Layout direction derived from a [`Language`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Right-to-left.
    Rtl,
    /// Left-to-right.
    Ltr,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rtl => "rtl",
            Self::Ltr => "ltr",
        }
    }

    /// Whether the layout runs right-to-left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// How a speech locale was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleMapping {
    /// The language has its own voice locale.
    Explicit,
    /// The language borrows another language's voice.
    Fallback,
}

/// Locale tag plus the way it was picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SpeechLocale {
    /// BCP 47 tag, e.g. `he-IL`.
    pub tag: &'static str,
    /// Whether the tag is the language's own or a stand-in.
    pub mapping: LocaleMapping,
}

impl SpeechLocale {
    const fn explicit(tag: &'static str) -> Self {
        Self {
            tag,
            mapping: LocaleMapping::Explicit,
        }
    }

    const fn fallback(tag: &'static str) -> Self {
        Self {
            tag,
            mapping: LocaleMapping::Fallback,
        }
    }

    /// True when the language borrows another language's voice.
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self.mapping, LocaleMapping::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hebrew_is_rtl() {
        for language in Language::all() {
            let expected = if language == Language::He {
                Direction::Rtl
            } else {
                Direction::Ltr
            };
            assert_eq!(language.direction(), expected, "{}", language.code());
            assert_eq!(language.direction().is_rtl(), language == Language::He);
        }
    }

    #[test]
    fn direction_is_deterministic() {
        for language in Language::all() {
            assert_eq!(language.direction(), language.direction());
        }
        assert_eq!(Direction::Rtl.as_str(), "rtl");
        assert_eq!(Direction::Ltr.as_str(), "ltr");
    }

    #[test]
    fn lang_tags_resolve_to_base_language() {
        assert_eq!(Language::from_lang_tag("en-US"), Some(Language::En));
        assert_eq!(Language::from_lang_tag("HE"), Some(Language::He));
        assert_eq!(Language::from_lang_tag("iw-IL"), Some(Language::He));
        assert_eq!(Language::from_lang_tag("zh_CN"), Some(Language::Zh));
        assert_eq!(Language::from_lang_tag("ar"), None);
        assert_eq!(Language::from_lang_tag(""), None);
    }

    #[test]
    fn codes_round_trip_through_lang_tags() {
        for language in Language::all() {
            assert_eq!(Language::from_lang_tag(language.code()), Some(language));
        }
    }

    #[test]
    fn speech_locale_gap_is_explicit() {
        assert_eq!(Language::He.speech_locale().tag, "he-IL");
        assert_eq!(Language::En.speech_locale().tag, "en-US");
        let fallbacks: Vec<Language> = Language::all()
            .into_iter()
            .filter(|language| language.speech_locale().is_fallback())
            .collect();
        assert_eq!(
            fallbacks,
            vec![
                Language::Zh,
                Language::Hi,
                Language::De,
                Language::Es,
                Language::Fr
            ]
        );
        assert!(fallbacks.iter().all(|l| l.speech_locale().tag == "en-US"));
    }

    #[test]
    fn serialized_forms_are_lowercase_codes() {
        for language in Language::all() {
            let json = serde_json::to_value(language).unwrap();
            assert_eq!(json, serde_json::json!(language.code()));
            let back: Language = serde_json::from_value(json).unwrap();
            assert_eq!(back, language);
        }
        assert_eq!(serde_json::to_value(Direction::Rtl).unwrap(), "rtl");
        let back: Direction = serde_json::from_str("\"ltr\"").unwrap();
        assert_eq!(back, Direction::Ltr);
        assert_eq!(
            serde_json::to_value(Language::Fr.speech_locale()).unwrap(),
            serde_json::json!({ "tag": "en-US", "mapping": "fallback" })
        );
    }
}
