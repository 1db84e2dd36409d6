//! App frame: header, content area and bottom navigation.
//!
//! # Design
//! - The shell renders whatever view the router selected; it owns only the
//!   settings panel's open state.
//! - Navigation labels come from the catalog on every render.

use yew::prelude::*;

use crate::app::context::use_presentation;
use crate::components::settings_menu::SettingsMenu;
use crate::core::views::ActiveView;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub active: ActiveView,
    pub on_navigate: Callback<ActiveView>,
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let strings = use_presentation().config.strings();
    let settings_open = use_state(|| false);
    let toggle_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_: MouseEvent| settings_open.set(!*settings_open))
    };
    let close_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |()| settings_open.set(false))
    };

    html! {
        <div class="relative mx-auto flex min-h-screen max-w-md flex-col bg-slate-50 text-slate-900 dark:bg-slate-900 dark:text-slate-100">
            <header class="sticky top-0 z-10 flex items-center justify-between px-4 py-3 shadow-sm bg-white dark:bg-slate-800">
                <h1 class="text-xl font-bold">{"🐾 "}{strings.app_title}</h1>
                <button type="button" aria-label={strings.settings} onclick={toggle_settings}>{"⚙️"}</button>
            </header>
            {if *settings_open {
                html! { <SettingsMenu on_close={close_settings} /> }
            } else {
                html! {}
            }}
            <main class="flex-1 overflow-y-auto px-4 pb-24 pt-4">
                {for props.children.iter()}
            </main>
            <nav class="fixed bottom-0 inset-x-0 mx-auto flex max-w-md justify-around border-t py-2 bg-white dark:bg-slate-800 dark:border-slate-700">
                {for ActiveView::all().into_iter().map(|view| nav_item(view, strings.text(view.label_key()), props))}
            </nav>
        </div>
    }
}

fn nav_item(view: ActiveView, label: &'static str, props: &ShellProps) -> Html {
    let active = props.active == view;
    let on_navigate = props.on_navigate.clone();
    html! {
        <button
            type="button"
            class={classes!(
                "flex", "flex-col", "items-center", "text-xs", "px-3",
                if active { "text-amber-500 font-bold" } else { "opacity-60" }
            )}
            aria-current={active.then_some("page")}
            onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(view))}
        >
            <span class="text-xl" aria-hidden="true">{nav_icon(view)}</span>
            <span>{label}</span>
        </button>
    }
}

const fn nav_icon(view: ActiveView) -> &'static str {
    match view {
        ActiveView::Feed => "🏠",
        ActiveView::Map => "🗺️",
        ActiveView::Stores => "🛍️",
        ActiveView::Assistant => "🤖",
    }
}
