//! Session-scoped presentation configuration.
//!
//! # Design
//! - One owned value per running app, held by the root component and shared
//!   through context; there is no global.
//! - Every mutation goes through [`PresentationConfig::apply`].
//! - Direction is derived from the language and has no slot of its own.
//! - Nothing here is persisted; a reload starts from [`Default`].

use std::rc::Rc;

use barkhood_i18n::{DEFAULT_LANGUAGE, Direction, Language, TranslationSet, catalog};
use yew::Reducible;

use crate::core::theme::{FontScale, ThemeMode};

/// Language, text size and theme for the whole app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PresentationConfig {
    language: Language,
    font_scale: FontScale,
    theme: ThemeMode,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE,
            font_scale: FontScale::Medium,
            theme: ThemeMode::Dark,
        }
    }
}

/// The only ways to change a [`PresentationConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationAction {
    /// Replace the language; direction follows.
    SetLanguage(Language),
    /// Replace the text size.
    SetFontScale(FontScale),
    /// Replace the theme.
    SetTheme(ThemeMode),
    /// Switch between light and dark.
    ToggleTheme,
}

impl PresentationConfig {
    /// Selected language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Selected text size.
    #[must_use]
    pub const fn font_scale(&self) -> FontScale {
        self.font_scale
    }

    /// Selected theme.
    #[must_use]
    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Layout direction of the selected language.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Strings for the selected language.
    #[must_use]
    pub const fn strings(&self) -> &'static TranslationSet {
        catalog(self.language)
    }

    /// Attributes the root scope must carry for this configuration.
    #[must_use]
    pub const fn root_attributes(&self) -> RootAttributes {
        RootAttributes {
            dir: self.direction(),
            lang: self.language.code(),
            theme: self.theme.as_str(),
            theme_class: self.theme.class(),
            font_class: self.font_scale.class(),
        }
    }

    /// Apply one action. Each action touches exactly one axis.
    #[must_use]
    pub const fn apply(self, action: PresentationAction) -> Self {
        match action {
            PresentationAction::SetLanguage(language) => Self { language, ..self },
            PresentationAction::SetFontScale(font_scale) => Self { font_scale, ..self },
            PresentationAction::SetTheme(theme) => Self { theme, ..self },
            PresentationAction::ToggleTheme => Self {
                theme: self.theme.toggled(),
                ..self
            },
        }
    }
}

impl Reducible for PresentationConfig {
    type Action = PresentationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

/// Direction, language tag and classes for the root scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootAttributes {
    /// `dir` attribute.
    pub dir: Direction,
    /// `lang` attribute.
    pub lang: &'static str,
    /// `data-theme` attribute.
    pub theme: &'static str,
    /// Theme class.
    pub theme_class: &'static str,
    /// Text-size class.
    pub font_class: &'static str,
}

impl RootAttributes {
    /// Space-separated class list.
    #[must_use]
    pub fn class_list(&self) -> String {
        format!("{} {}", self.theme_class, self.font_class)
    }
}
