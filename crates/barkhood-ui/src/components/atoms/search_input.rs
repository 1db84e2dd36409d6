//! Search box for the local filters.
//!
//! # Design
//! - Controlled by the caller; every keystroke is emitted.
//! - Filtering is local and cheap, so there is no debounce.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchInputProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_search: Callback<String>,
}

#[function_component(SearchInput)]
pub(crate) fn search_input(props: &SearchInputProps) -> Html {
    let on_search = props.on_search.clone();
    html! {
        <label class={classes!(
            "flex", "items-center", "gap-2", "rounded-2xl", "px-4", "py-3",
            "bg-white", "dark:bg-slate-800", "shadow-sm", props.class.clone()
        )}>
            <span aria-hidden="true">{"🔍"}</span>
            <input
                class="w-full bg-transparent outline-none placeholder:text-sm"
                type="search"
                placeholder={props.placeholder.clone()}
                aria-label={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={Callback::from(move |event: InputEvent| {
                    if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                        on_search.emit(input.value());
                    }
                })}
            />
        </label>
    }
}
