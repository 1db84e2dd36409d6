//! Language picker.
//!
//! # Design
//! - Selection state belongs to the caller; the picker only emits.
//! - Options use the native endonym so every language is findable.

use barkhood_i18n::Language;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LocaleMenuProps {
    pub language: Language,
    pub label: AttrValue,
    pub on_select: Callback<Language>,
}

#[function_component(LocaleMenu)]
pub(crate) fn locale_menu(props: &LocaleMenuProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Some(next) = Language::from_lang_tag(&select.value()) {
                    on_select.emit(next);
                }
            }
        })
    };

    html! {
        <label class="flex flex-col gap-1">
            <span class="text-xs font-semibold opacity-70">{props.label.clone()}</span>
            <select
                class="rounded-xl px-3 py-2 bg-slate-100 dark:bg-slate-700"
                value={props.language.code()}
                {onchange}
            >
                {for Language::all().iter().map(|language| html! {
                    <option value={language.code()} selected={*language == props.language}>
                        {language.label()}
                    </option>
                })}
            </select>
        </label>
    }
}
