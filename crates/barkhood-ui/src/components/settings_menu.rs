//! Settings panel for language, text size and theme.
//!
//! # Design
//! - Every control dispatches a single presentation action.
//! - The panel reads the configuration from context and owns no copy of it.

use barkhood_i18n::Language;
use yew::prelude::*;

use crate::app::context::use_presentation;
use crate::components::locale_menu::LocaleMenu;
use crate::core::presentation::PresentationAction;
use crate::core::theme::FontScale;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsMenuProps {
    pub on_close: Callback<()>,
}

#[function_component(SettingsMenu)]
pub(crate) fn settings_menu(props: &SettingsMenuProps) -> Html {
    let presentation = use_presentation();
    let config = presentation.config;
    let strings = config.strings();

    let on_language = {
        let dispatch = presentation.dispatch.clone();
        Callback::from(move |language: Language| {
            dispatch.emit(PresentationAction::SetLanguage(language));
        })
    };
    let on_toggle_theme = {
        let dispatch = presentation.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(PresentationAction::ToggleTheme))
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="absolute top-16 end-4 z-20 w-64 rounded-2xl p-4 shadow-xl bg-white dark:bg-slate-800 flex flex-col gap-4">
            <div class="flex items-center justify-between">
                <h2 class="font-bold">{strings.settings}</h2>
                <button type="button" aria-label={strings.settings} onclick={on_close}>{"✕"}</button>
            </div>
            <LocaleMenu
                language={config.language()}
                label={strings.language}
                on_select={on_language}
            />
            <div class="flex flex-col gap-1">
                <span class="text-xs font-semibold opacity-70">{strings.font_size}</span>
                <div class="flex gap-2">
                    {for FontScale::all().into_iter().map(|scale| {
                        let dispatch = presentation.dispatch.clone();
                        let active = scale == config.font_scale();
                        html! {
                            <button
                                type="button"
                                class={classes!(
                                    "flex-1", "rounded-xl", "py-1",
                                    if active { "bg-amber-500 text-white" } else { "bg-slate-100 dark:bg-slate-700" }
                                )}
                                aria-pressed={active.to_string()}
                                onclick={Callback::from(move |_: MouseEvent| {
                                    dispatch.emit(PresentationAction::SetFontScale(scale));
                                })}
                            >
                                {strings.text(scale.label_key())}
                            </button>
                        }
                    })}
                </div>
            </div>
            <div class="flex items-center justify-between">
                <span class="text-xs font-semibold opacity-70">{strings.theme}</span>
                <button
                    type="button"
                    class="rounded-xl px-3 py-1 bg-slate-100 dark:bg-slate-700"
                    onclick={on_toggle_theme}
                >
                    {strings.text(config.theme().toggled().label_key())}
                </button>
            </div>
        </div>
    }
}
