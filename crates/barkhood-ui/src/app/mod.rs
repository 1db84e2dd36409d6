//! Root component and browser boot.

use yew::prelude::*;

use crate::components::shell::AppShell;
use crate::core::presentation::{PresentationAction, PresentationConfig};
use crate::core::views::{ActiveView, ViewRouter};
use crate::features::assistant::view::AssistantView;
use crate::features::feed::view::FeedView;
use crate::features::places::view::PlacesView;
use crate::features::stores::view::StoresView;
use crate::services::platform::apply_root_attributes;

pub(crate) mod context;

use context::{AssistantCtx, PresentationCtx};

#[function_component(BarkhoodApp)]
pub(crate) fn barkhood_app() -> Html {
    let presentation = use_reducer_eq(PresentationConfig::default);
    let router = use_reducer_eq(ViewRouter::default);
    let assistant = use_memo(|_| AssistantCtx::from_build_env(), ());

    let config = *presentation;
    let attributes = config.root_attributes();
    use_effect_with_deps(
        |attributes| {
            apply_root_attributes(attributes);
            || ()
        },
        attributes,
    );

    let presentation_ctx = PresentationCtx {
        config,
        dispatch: {
            let presentation = presentation.clone();
            Callback::from(move |action: PresentationAction| presentation.dispatch(action))
        },
    };
    let on_navigate = {
        let router = router.clone();
        Callback::from(move |view: ActiveView| router.dispatch(view))
    };

    let active = router.active();
    let content = match active {
        ActiveView::Feed => html! { <FeedView /> },
        ActiveView::Map => html! { <PlacesView /> },
        ActiveView::Stores => html! { <StoresView /> },
        ActiveView::Assistant => html! { <AssistantView /> },
    };

    html! {
        <ContextProvider<AssistantCtx> context={(*assistant).clone()}>
            <ContextProvider<PresentationCtx> context={presentation_ctx}>
                <div
                    id="barkhood-root"
                    dir={attributes.dir.as_str()}
                    lang={attributes.lang}
                    data-theme={attributes.theme}
                    class={attributes.class_list()}
                >
                    <AppShell {active} {on_navigate}>
                        {content}
                    </AppShell>
                </div>
            </ContextProvider<PresentationCtx>>
        </ContextProvider<AssistantCtx>>
    }
}

/// Mount the app on `#root`, or on `<body>` when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<BarkhoodApp>::with_root(root).render();
    } else {
        yew::Renderer::<BarkhoodApp>::new().render();
    }
}
