//! Places view.

use barkhood_ai::{Coordinates, PlaceQuery};
use barkhood_i18n::TranslationSet;
use gloo::console;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::context::{use_assistant, use_presentation};
use crate::components::atoms::{EmptyState, SearchInput};
use crate::core::request::RequestGuard;
use crate::features::places::fixtures::PLACES;
use crate::features::places::state::{
    PlaceSearchAction, PlaceSearchState, filter_places, no_places_message, reference_title,
};
use crate::services::platform;

#[function_component(PlacesView)]
pub(crate) fn places_view() -> Html {
    let config = use_presentation().config;
    let language = config.language();
    let strings = config.strings();
    let assistant = use_assistant();
    let search = use_state(String::new);
    let coordinates = use_state(|| None::<Coordinates>);
    let ai_search = use_reducer(PlaceSearchState::default);
    let locate_guard = use_memo(|_| RequestGuard::default(), ());
    let search_guard = use_memo(|_| RequestGuard::default(), ());

    {
        let coordinates = coordinates.clone();
        let locate_guard = locate_guard.clone();
        let search_guard = search_guard.clone();
        use_effect_with_deps(
            move |_| {
                let ticket = locate_guard.issue();
                let guard = locate_guard.clone();
                spawn_local(async move {
                    let position = platform::current_position().await;
                    if guard.is_current(ticket) {
                        coordinates.set(position);
                    }
                });
                move || {
                    locate_guard.invalidate();
                    search_guard.invalidate();
                }
            },
            (),
        );
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |value: String| search.set(value))
    };

    let on_ai_search = {
        let search = search.clone();
        let coordinates = coordinates.clone();
        let ai_search = ai_search.clone();
        let guard = search_guard.clone();
        Callback::from(move |_: MouseEvent| {
            let text = search.trim().to_string();
            if text.is_empty() || ai_search.is_loading() {
                return;
            }
            let query = PlaceQuery {
                text,
                coordinates: *coordinates,
                language,
            };
            let ticket = guard.issue();
            let guard = guard.clone();
            let ai_search = ai_search.clone();
            let assistant = assistant.clone();
            ai_search.dispatch(PlaceSearchAction::Begin);
            spawn_local(async move {
                let outcome = match assistant {
                    Some(service) => match service.search_places(&query).await {
                        Ok(result) => Some(result),
                        Err(err) => {
                            console::error!("place search failed", err.to_string());
                            None
                        }
                    },
                    None => None,
                };
                if guard.is_current(ticket) {
                    ai_search.dispatch(PlaceSearchAction::Finish(outcome));
                }
            });
        })
    };

    let visible = filter_places(&PLACES, &search);
    let can_search = !search.trim().is_empty() && !ai_search.is_loading();

    html! {
        <section class="flex flex-col gap-4">
            <SearchInput value={(*search).clone()} placeholder={strings.search_place} {on_search} />
            <div class="flex items-center gap-2 text-xs">
                <span class="rounded-full px-2 py-1 bg-emerald-100 text-emerald-800">{strings.offline_mode}</span>
                <span class="opacity-60">{strings.offline_note}</span>
            </div>
            <div class="h-40 rounded-2xl bg-emerald-50 dark:bg-slate-800 flex items-center justify-center text-5xl" aria-hidden="true">
                {"🗺️"}
            </div>
            {if visible.is_empty() {
                html! { <EmptyState title={no_places_message(strings, &search)} icon="📍" /> }
            } else {
                html! {
                    <ul class="flex flex-col gap-2">
                        {for visible.into_iter().map(|place| html! {
                            <li key={place.id} class="flex items-center gap-3 rounded-2xl p-3 shadow-sm bg-white dark:bg-slate-800">
                                <span class="text-2xl" aria-hidden="true">{place.kind.icon()}</span>
                                <div class="flex-1">
                                    <p class="font-bold">{place.title}</p>
                                    <p class="text-xs opacity-60">{place.address}</p>
                                </div>
                                <span class="text-sm">{format!("★ {:.1}", place.rating)}</span>
                            </li>
                        })}
                    </ul>
                }
            }}
            <button
                type="button"
                class="rounded-2xl py-3 font-bold text-white bg-amber-500 disabled:opacity-50"
                disabled={!can_search}
                onclick={on_ai_search}
            >
                {if ai_search.is_loading() { strings.ai_searching } else { strings.ai_search }}
            </button>
            {render_ai_result(&ai_search, strings)}
        </section>
    }
}

fn render_ai_result(state: &PlaceSearchState, strings: &'static TranslationSet) -> Html {
    if state.shows_no_results() {
        return html! { <EmptyState title={strings.no_results} /> };
    }
    let PlaceSearchState::Loaded(result) = state else {
        return html! {};
    };
    html! {
        <div class="rounded-2xl p-4 shadow-sm bg-white dark:bg-slate-800 flex flex-col gap-3">
            {result.summary.clone().map(|summary| html! {
                <p class="whitespace-pre-line">{summary}</p>
            }).unwrap_or_default()}
            <ol class="flex flex-col gap-1 text-sm">
                {for result.places.iter().map(|reference| {
                    let title = reference_title(strings, reference).to_string();
                    match reference.uri.clone() {
                        Some(uri) => html! {
                            <li><a class="underline" href={uri} target="_blank" rel="noopener noreferrer">{title}</a></li>
                        },
                        None => html! { <li>{title}</li> },
                    }
                })}
            </ol>
        </div>
    }
}
