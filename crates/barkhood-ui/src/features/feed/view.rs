//! Feed view.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::context::use_presentation;
use crate::components::atoms::{EmptyState, SearchInput};
use crate::features::feed::fixtures::{POSTS, Post};
use crate::features::feed::state::{
    FeedState, byline, filter_posts, share_fallback_message, share_text,
};
use crate::services::platform;

#[function_component(FeedView)]
pub(crate) fn feed_view() -> Html {
    let strings = use_presentation().config.strings();
    let state = use_state(FeedState::default);

    let on_search = {
        let state = state.clone();
        Callback::from(move |search: String| {
            let mut next = (*state).clone();
            next.search = search;
            state.set(next);
        })
    };
    let on_like = {
        let state = state.clone();
        Callback::from(move |post_id: &'static str| {
            let mut next = (*state).clone();
            next.toggle_like(post_id);
            state.set(next);
        })
    };
    let on_share = Callback::from(move |post: Post| {
        let text = share_text(&post);
        let fallback = share_fallback_message(strings, &post);
        spawn_local(async move {
            platform::share(strings.app_title, &text, &fallback).await;
        });
    });

    let visible = filter_posts(&POSTS, &state.search);

    html! {
        <section class="flex flex-col gap-4">
            <SearchInput
                value={state.search.clone()}
                placeholder={strings.search_dog}
                {on_search}
            />
            <div class="rounded-2xl p-4 shadow-sm bg-white dark:bg-slate-800 opacity-70">
                {strings.post_placeholder}
            </div>
            {if visible.is_empty() {
                html! { <EmptyState title={strings.no_results} icon="🐕" /> }
            } else {
                html! {
                    <>{for visible.into_iter().map(|post| {
                        let liked = state.is_liked(post.id);
                        let likes = state.like_count(post);
                        let id = post.id;
                        let post = *post;
                        let on_like = on_like.clone();
                        let on_share = on_share.clone();
                        html! {
                            <article key={id} class="rounded-2xl overflow-hidden shadow-sm bg-white dark:bg-slate-800">
                                <header class="p-4">
                                    <p class="font-bold">{post.author}</p>
                                    <p class="text-xs opacity-60">{byline(strings, &post)}</p>
                                </header>
                                <p class="px-4 pb-3">{post.content}</p>
                                {post.image.map(|src| html! {
                                    <img class="w-full object-cover" src={src} alt={post.dog_name} loading="lazy" />
                                }).unwrap_or_default()}
                                <footer class="flex items-center gap-4 px-4 py-3 text-sm">
                                    <button
                                        type="button"
                                        class={classes!(liked.then_some("text-rose-500"))}
                                        aria-pressed={liked.to_string()}
                                        onclick={Callback::from(move |_: MouseEvent| on_like.emit(id))}
                                    >
                                        {if liked { "♥ " } else { "♡ " }}{likes}{" "}{strings.likes}
                                    </button>
                                    <span class="opacity-60">{"💬 "}{post.comments}{" "}{strings.comments}</span>
                                    <button
                                        type="button"
                                        class="ms-auto"
                                        onclick={Callback::from(move |_: MouseEvent| on_share.emit(post))}
                                    >
                                        {"↗ "}{strings.share}
                                    </button>
                                </footer>
                            </article>
                        }
                    })}</>
                }
            }}
        </section>
    }
}
