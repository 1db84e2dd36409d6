//! Stores and walkers view.

use yew::prelude::*;

use crate::app::context::use_presentation;
use crate::components::atoms::EmptyState;
use crate::features::stores::fixtures::{STORES, WALKERS, Walker};
use crate::features::stores::state::{
    CategoryFilter, DirectoryState, booking_message, distance_label,
};
use crate::services::platform;

#[function_component(StoresView)]
pub(crate) fn stores_view() -> Html {
    let strings = use_presentation().config.strings();
    let directory = use_state(DirectoryState::default);

    let on_book = Callback::from(move |walker: Walker| {
        platform::notify(&booking_message(strings, &walker));
    });
    let on_toggle_sort = {
        let directory = directory.clone();
        Callback::from(move |_: MouseEvent| {
            directory.set(DirectoryState {
                sort_by_rating: !directory.sort_by_rating,
                ..*directory
            });
        })
    };

    let visible = directory.visible(&STORES);

    html! {
        <section class="flex flex-col gap-5">
            <div class="rounded-2xl p-4 text-white bg-gradient-to-r from-amber-500 to-rose-500">
                <span class="text-xs uppercase opacity-80">{strings.sponsored}</span>
                <h2 class="text-lg font-bold">{strings.promo_title}</h2>
                <p class="text-sm">{strings.promo_body}</p>
                <button type="button" class="mt-2 rounded-xl px-3 py-1 bg-white text-amber-600 font-bold">{strings.shop_now}</button>
            </div>

            <h2 class="text-lg font-bold">{strings.walkers_title}</h2>
            <div class="flex gap-3 overflow-x-auto">
                {for WALKERS.iter().map(|walker| {
                    let on_book = on_book.clone();
                    let walker = *walker;
                    html! {
                        <div key={walker.id} class="min-w-[14rem] rounded-2xl p-4 shadow-sm bg-white dark:bg-slate-800 flex flex-col gap-2">
                            <div class="flex items-center gap-3">
                                <img class="h-12 w-12 rounded-full object-cover" src={walker.image} alt={walker.name} />
                                <div>
                                    <p class="font-bold">{walker.name}</p>
                                    <p class="text-xs opacity-60">{walker.availability}</p>
                                </div>
                            </div>
                            <div class="flex flex-wrap gap-1">
                                {for walker.services.iter().map(|service| html! {
                                    <span class="rounded-full px-2 text-xs bg-slate-100 dark:bg-slate-700">{*service}</span>
                                })}
                            </div>
                            <div class="flex items-center justify-between text-sm">
                                <span>{format!("★ {:.1}", walker.rating)}</span>
                                <span>{strings.from_price}{" "}{walker.price}{strings.per_hour}</span>
                            </div>
                            <button
                                type="button"
                                class="rounded-xl py-2 font-bold text-white bg-amber-500"
                                onclick={Callback::from(move |_: MouseEvent| on_book.emit(walker))}
                            >
                                {strings.book_now}
                            </button>
                        </div>
                    }
                })}
            </div>

            <div class="flex items-center justify-between">
                <h2 class="text-lg font-bold">{strings.stores_title}</h2>
                <button
                    type="button"
                    class={classes!("text-sm", directory.sort_by_rating.then_some("text-amber-500 font-bold"))}
                    aria-pressed={directory.sort_by_rating.to_string()}
                    onclick={on_toggle_sort}
                >
                    {strings.sort_by_rating}
                </button>
            </div>
            <div class="flex gap-2 overflow-x-auto">
                {for CategoryFilter::all().into_iter().map(|filter| {
                    let directory = directory.clone();
                    let active = directory.filter == filter;
                    html! {
                        <button
                            key={filter.id()}
                            type="button"
                            class={classes!(
                                "rounded-full", "px-3", "py-1", "text-sm", "whitespace-nowrap",
                                if active { "bg-amber-500 text-white" } else { "bg-white dark:bg-slate-800" }
                            )}
                            onclick={Callback::from(move |_: MouseEvent| {
                                directory.set(DirectoryState { filter, ..*directory });
                            })}
                        >
                            {strings.text(filter.label_key())}
                        </button>
                    }
                })}
            </div>
            {if visible.is_empty() {
                html! { <EmptyState title={strings.no_stores} icon="🏪" /> }
            } else {
                html! {
                    <ul class="flex flex-col gap-3">
                        {for visible.into_iter().map(|store| html! {
                            <li key={store.id} class="flex gap-3 rounded-2xl p-3 shadow-sm bg-white dark:bg-slate-800">
                                <img class="h-16 w-16 rounded-xl object-cover" src={store.image} alt={store.name} />
                                <div class="flex-1">
                                    <p class="font-bold">{store.name}</p>
                                    <p class="text-xs opacity-60">{store.tagline}</p>
                                    <p class="text-xs">{distance_label(strings, store)}</p>
                                </div>
                                <div class="flex flex-col items-end justify-between">
                                    <span class="text-sm">{format!("★ {:.1}", store.rating)}</span>
                                    <button type="button" class="text-xs underline">{strings.details}</button>
                                </div>
                            </li>
                        })}
                    </ul>
                }
            }}

            <div class="rounded-2xl p-4 bg-emerald-100 text-emerald-900 dark:bg-emerald-900 dark:text-emerald-100">
                <h3 class="font-bold">{strings.deal_title}</h3>
                <p class="text-sm">{strings.deal_body}</p>
            </div>
        </section>
    }
}
