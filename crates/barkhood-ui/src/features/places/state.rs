//! Place filtering and the AI search state machine.

use std::rc::Rc;

use barkhood_ai::{PlaceReference, PlaceSearchResult};
use barkhood_i18n::{TranslationSet, format_template};
use yew::Reducible;

use crate::features::places::fixtures::Place;

/// Places whose title or address contains `query`, ignoring case.
#[must_use]
pub fn filter_places<'a>(places: &'a [Place], query: &str) -> Vec<&'a Place> {
    let needle = query.trim().to_lowercase();
    places
        .iter()
        .filter(|place| {
            needle.is_empty()
                || place.title.to_lowercase().contains(&needle)
                || place.address.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Empty-state message for a search with no local matches.
#[must_use]
pub fn no_places_message(strings: &TranslationSet, query: &str) -> String {
    format_template(strings.no_places_for, &[("query", query.trim())])
}

/// Display title of a grounded reference.
#[must_use]
pub fn reference_title<'a>(strings: &'a TranslationSet, reference: &'a PlaceReference) -> &'a str {
    reference.title.as_deref().unwrap_or(strings.unknown_place)
}

/// Progress of the AI nearby search.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PlaceSearchState {
    /// No search issued yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The provider answered.
    Loaded(PlaceSearchResult),
    /// The provider failed.
    Failed,
}

/// Transitions of [`PlaceSearchState`].
#[derive(Clone, Debug, PartialEq)]
pub enum PlaceSearchAction {
    /// A request was sent.
    Begin,
    /// The request finished; `None` means it failed.
    Finish(Option<PlaceSearchResult>),
}

impl PlaceSearchState {
    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether the no-results message should be shown.
    #[must_use]
    pub fn shows_no_results(&self) -> bool {
        match self {
            Self::Failed => true,
            Self::Loaded(result) => result.is_empty(),
            Self::Idle | Self::Loading => false,
        }
    }

    /// Enter the loading state.
    #[must_use]
    pub const fn begin() -> Self {
        Self::Loading
    }

    /// Settle with the outcome of a request.
    #[must_use]
    pub fn finish(outcome: Option<PlaceSearchResult>) -> Self {
        outcome.map_or(Self::Failed, Self::Loaded)
    }
}

impl Reducible for PlaceSearchState {
    type Action = PlaceSearchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(match action {
            PlaceSearchAction::Begin => Self::begin(),
            PlaceSearchAction::Finish(outcome) => Self::finish(outcome),
        })
    }
}
