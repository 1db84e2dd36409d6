//! Top-level view selection.

use std::rc::Rc;

use barkhood_i18n::TranslationKey;
use yew::Reducible;

/// The four top-level views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveView {
    /// Community feed.
    #[default]
    Feed,
    /// Places explorer.
    Map,
    /// Store and walker directory.
    Stores,
    /// AI dog expert.
    Assistant,
}

impl ActiveView {
    /// Every view in navigation order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Feed, Self::Map, Self::Stores, Self::Assistant]
    }

    /// Catalog key for the navigation label.
    #[must_use]
    pub const fn label_key(self) -> TranslationKey {
        match self {
            Self::Feed => TranslationKey::Feed,
            Self::Map => TranslationKey::Map,
            Self::Stores => TranslationKey::Stores,
            Self::Assistant => TranslationKey::Assistant,
        }
    }
}

/// Holds the active view. Any view may be selected from any other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewRouter {
    active: ActiveView,
}

impl ViewRouter {
    /// Currently selected view.
    #[must_use]
    pub const fn active(&self) -> ActiveView {
        self.active
    }

    /// Select `view`.
    pub const fn set_active_view(&mut self, view: ActiveView) {
        self.active = view;
    }
}

impl Reducible for ViewRouter {
    type Action = ActiveView;

    fn reduce(self: Rc<Self>, view: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.set_active_view(view);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_is_the_default_view() {
        assert_eq!(ViewRouter::default().active(), ActiveView::Feed);
    }

    #[test]
    fn every_transition_is_allowed() {
        for from in ActiveView::all() {
            for to in ActiveView::all() {
                let mut router = ViewRouter::default();
                router.set_active_view(from);
                router.set_active_view(to);
                assert_eq!(router.active(), to);
            }
        }
    }

    #[test]
    fn labels_are_distinct() {
        let keys: Vec<_> = ActiveView::all().iter().map(|view| view.label_key()).collect();
        for (index, key) in keys.iter().enumerate() {
            assert!(!keys[index + 1..].contains(key));
        }
    }
}
