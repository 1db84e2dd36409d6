//! Category filter, rating sort and booking text for the directory.

use barkhood_i18n::{TranslationKey, TranslationSet, format_template};

use crate::features::stores::fixtures::{Store, StoreCategory, Walker};

/// Category chip selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Only the given category.
    Only(StoreCategory),
}

impl CategoryFilter {
    /// Chips in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::All,
            Self::Only(StoreCategory::Food),
            Self::Only(StoreCategory::Grooming),
            Self::Only(StoreCategory::Vet),
        ]
    }

    /// Stable identifier of the chip.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.id(),
        }
    }

    /// Catalog key of the chip label.
    #[must_use]
    pub const fn label_key(self) -> TranslationKey {
        match self {
            Self::All => TranslationKey::CategoryAll,
            Self::Only(StoreCategory::Food) => TranslationKey::CategoryFood,
            Self::Only(StoreCategory::Grooming) => TranslationKey::CategoryGrooming,
            Self::Only(StoreCategory::Vet) => TranslationKey::CategoryVet,
        }
    }

    /// Whether a store in `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: StoreCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

/// Local state of the directory view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectoryState {
    /// Selected chip.
    pub filter: CategoryFilter,
    /// Whether stores are ordered by rating.
    pub sort_by_rating: bool,
}

impl DirectoryState {
    /// Stores to display for the current chip and sort toggle.
    #[must_use]
    pub fn visible<'a>(&self, stores: &'a [Store]) -> Vec<&'a Store> {
        let mut visible: Vec<_> = stores
            .iter()
            .filter(|store| self.filter.matches(store.category))
            .collect();
        if self.sort_by_rating {
            visible.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }
        visible
    }
}

/// Confirmation shown after pressing "Book now".
#[must_use]
pub fn booking_message(strings: &TranslationSet, walker: &Walker) -> String {
    format_template(strings.booking_started, &[("name", walker.name)])
}

/// Distance line under a store.
#[must_use]
pub fn distance_label(strings: &TranslationSet, store: &Store) -> String {
    format_template(strings.away, &[("distance", store.distance)])
}
