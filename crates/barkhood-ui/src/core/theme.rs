//! Theme and text-size axes of the presentation configuration.

use barkhood_i18n::TranslationKey;

/// Color theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    /// Light surfaces.
    Light,
    /// Dark surfaces.
    Dark,
}

impl ThemeMode {
    /// Map the settings toggle onto a theme.
    #[must_use]
    pub const fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Whether this is the dark theme.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value of the root `data-theme` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Class applied to the root scope.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark dark",
        }
    }

    /// Catalog key naming this theme.
    #[must_use]
    pub const fn label_key(self) -> TranslationKey {
        match self {
            Self::Light => TranslationKey::LightMode,
            Self::Dark => TranslationKey::DarkMode,
        }
    }
}

/// Ordered text-size levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontScale {
    /// Compact text.
    Small,
    /// Default text.
    Medium,
    /// Enlarged text.
    Large,
}

impl FontScale {
    /// Every level, smallest first.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Small, Self::Medium, Self::Large]
    }

    /// Size class applied to the root scope.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Small => "text-sm",
            Self::Medium => "text-base",
            Self::Large => "text-lg",
        }
    }

    /// Catalog key naming this level.
    #[must_use]
    pub const fn label_key(self) -> TranslationKey {
        match self {
            Self::Small => TranslationKey::FontSmall,
            Self::Medium => TranslationKey::FontMedium,
            Self::Large => TranslationKey::FontLarge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_round_trips_the_dark_flag() {
        assert_eq!(ThemeMode::from_dark(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_dark(false), ThemeMode::Light);
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn font_scale_levels_are_ordered_with_distinct_classes() {
        let levels = FontScale::all();
        assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
        let classes: Vec<_> = levels.iter().map(|level| level.class()).collect();
        assert_eq!(classes, vec!["text-sm", "text-base", "text-lg"]);
    }
}
