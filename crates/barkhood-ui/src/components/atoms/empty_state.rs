//! Empty-result panel.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class={classes!("py-10", "text-center", "opacity-60", props.class.clone())}>
            {props.icon.clone().map(|icon| html! {
                <div class="text-4xl mb-2" aria-hidden="true">{icon}</div>
            }).unwrap_or_default()}
            <p>{props.title.clone()}</p>
        </div>
    }
}
