//! Contexts shared from the app root.
//!
//! # Design
//! - The presentation configuration lives in one reducer owned by the root;
//!   views read it and dispatch through [`PresentationCtx`].
//! - One assistant service per app boot, built from the compile-time
//!   environment.

use std::rc::Rc;

use barkhood_ai::{AiConfig, AssistantService, GeminiProvider};
use gloo::console;
use yew::prelude::*;

use crate::core::presentation::{PresentationAction, PresentationConfig};

/// Current presentation configuration plus its update entry point.
#[derive(Clone, PartialEq)]
pub(crate) struct PresentationCtx {
    /// Configuration for this render.
    pub config: PresentationConfig,
    /// Applies one [`PresentationAction`].
    pub dispatch: Callback<PresentationAction>,
}

impl Default for PresentationCtx {
    fn default() -> Self {
        Self {
            config: PresentationConfig::default(),
            dispatch: Callback::noop(),
        }
    }
}

/// Read the presentation context, falling back to defaults outside the root.
#[hook]
pub(crate) fn use_presentation() -> PresentationCtx {
    use_context::<PresentationCtx>().unwrap_or_default()
}

/// Shared assistant service.
#[derive(Clone)]
pub(crate) struct AssistantCtx {
    /// `None` when the HTTP client could not be built.
    pub service: Option<Rc<AssistantService<GeminiProvider>>>,
}

impl AssistantCtx {
    /// Build the service from the configuration baked in at compile time.
    pub(crate) fn from_build_env() -> Self {
        let config = AiConfig::from_build_env();
        if !config.has_api_key() {
            console::warn!("no API key set at build time; assistant replies will fall back");
        }
        let service = match AssistantService::gemini(config) {
            Ok(service) => Some(Rc::new(service)),
            Err(err) => {
                console::error!("assistant unavailable", err.to_string());
                None
            }
        };
        Self { service }
    }
}

impl PartialEq for AssistantCtx {
    fn eq(&self, other: &Self) -> bool {
        match (&self.service, &other.service) {
            (Some(left), Some(right)) => Rc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Read the assistant context.
#[hook]
pub(crate) fn use_assistant() -> Option<Rc<AssistantService<GeminiProvider>>> {
    use_context::<AssistantCtx>().and_then(|ctx| ctx.service)
}
