//! Assistant chat view.

use barkhood_ai::{ReplyContext, Sender};
use barkhood_i18n::Language;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::context::{use_assistant, use_presentation};
use crate::core::request::RequestGuard;
use crate::core::speech::SpeechRequest;
use crate::features::assistant::state::{ChatAction, ChatThread};
use crate::services::platform;

#[function_component(AssistantView)]
pub(crate) fn assistant_view() -> Html {
    let config = use_presentation().config;
    let language = config.language();
    let strings = config.strings();
    let assistant = use_assistant();
    let thread = use_reducer_eq(|| ChatThread::new(strings.assistant_greeting));
    let input = use_state(String::new);
    let guard = use_memo(|_| RequestGuard::default(), ());

    {
        let guard = guard.clone();
        use_effect_with_deps(move |_| move || guard.invalidate(), ());
    }
    {
        let thread = thread.clone();
        use_effect_with_deps(
            move |greeting| {
                thread.dispatch(ChatAction::Relocalize(*greeting));
                || ()
            },
            strings.assistant_greeting,
        );
    }

    let on_input = {
        let input = input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(field) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                input.set(field.value());
            }
        })
    };

    let on_submit = {
        let thread = thread.clone();
        let input = input.clone();
        let guard = guard.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(submission) = thread.submission(&input) else {
                return;
            };
            thread.dispatch(ChatAction::Submit(submission.message.clone()));
            input.set(String::new());

            let ticket = guard.issue();
            let guard = guard.clone();
            let thread = thread.clone();
            let assistant = assistant.clone();
            let context = ReplyContext::for_language(language);
            spawn_local(async move {
                let reply = match assistant {
                    Some(service) => {
                        service
                            .chat(&submission.history, &submission.message, &context)
                            .await
                    }
                    None => context.fallback,
                };
                if guard.is_current(ticket) {
                    thread.dispatch(ChatAction::Receive(reply));
                }
            });
        })
    };

    let can_send = thread.can_send(&input);

    html! {
        <section class="flex h-full flex-col gap-3">
            <header class="rounded-2xl p-4 text-white bg-gradient-to-r from-indigo-500 to-sky-500">
                <h2 class="text-lg font-bold">{"🤖 "}{strings.assistant_title}</h2>
                <p class="text-sm opacity-80">{strings.assistant_subtitle}</p>
            </header>
            <ol class="flex flex-1 flex-col gap-2" aria-live="polite">
                {for thread.turns().iter().map(|turn| {
                    let mine = turn.sender == Sender::User;
                    html! {
                        <li
                            key={turn.id.to_string()}
                            class={classes!(
                                "max-w-[85%]", "rounded-2xl", "px-4", "py-2", "whitespace-pre-line",
                                if mine {
                                    "self-end bg-amber-500 text-white"
                                } else {
                                    "self-start bg-white dark:bg-slate-800"
                                }
                            )}
                        >
                            <p>{turn.text.clone()}</p>
                            {if mine { html! {} } else { listen_button(&turn.text, language, strings.listen) }}
                        </li>
                    }
                })}
                {if thread.is_pending() {
                    html! { <li class="self-start text-sm opacity-60 animate-pulse">{strings.assistant_thinking}</li> }
                } else {
                    html! {}
                }}
            </ol>
            <form class="sticky bottom-20 flex gap-2" onsubmit={on_submit}>
                <input
                    class="flex-1 rounded-2xl px-4 py-3 bg-white dark:bg-slate-800 outline-none"
                    type="text"
                    placeholder={strings.ask_placeholder}
                    aria-label={strings.ask_placeholder}
                    value={(*input).clone()}
                    oninput={on_input}
                />
                <button
                    type="submit"
                    class="rounded-2xl px-4 font-bold text-white bg-amber-500 disabled:opacity-50"
                    disabled={!can_send}
                >
                    {strings.send}
                </button>
            </form>
        </section>
    }
}

fn listen_button(text: &str, language: Language, label: &'static str) -> Html {
    let Some(request) = SpeechRequest::new(text, language) else {
        return html! {};
    };
    html! {
        <button
            type="button"
            class="mt-1 text-xs opacity-70"
            aria-label={label}
            onclick={Callback::from(move |_: MouseEvent| platform::speak(&request))}
        >
            {"🔊 "}{label}
        </button>
    }
}
