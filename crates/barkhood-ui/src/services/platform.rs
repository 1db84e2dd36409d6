//! Thin wrappers over browser APIs.
//!
//! # Design
//! - Every call is best effort: a missing API or a rejected call is logged to
//!   the console and otherwise ignored.
//! - Geolocation is read once and never watched.

use barkhood_ai::Coordinates;
use gloo::console;
use gloo::utils::{document, window};
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::SpeechSynthesisUtterance;

use crate::core::presentation::RootAttributes;
use crate::core::speech::SpeechRequest;

/// Mirror the root scope's attributes onto `<html>`.
pub(crate) fn apply_root_attributes(attributes: &RootAttributes) {
    let Some(root) = document().document_element() else {
        return;
    };
    for (name, value) in [
        ("dir", attributes.dir.as_str().to_string()),
        ("lang", attributes.lang.to_string()),
        ("data-theme", attributes.theme.to_string()),
        ("class", attributes.class_list()),
    ] {
        if let Err(err) = root.set_attribute(name, &value) {
            console::warn!("root attribute update failed", name, err);
        }
    }
}

/// Read a request aloud, replacing anything already being spoken.
pub(crate) fn speak(request: &SpeechRequest) {
    let synthesis = match window().speech_synthesis() {
        Ok(synthesis) => synthesis,
        Err(err) => {
            console::warn!("speech synthesis unavailable", err);
            return;
        }
    };
    let utterance = match SpeechSynthesisUtterance::new_with_text(&request.text) {
        Ok(utterance) => utterance,
        Err(err) => {
            console::warn!("utterance rejected", err);
            return;
        }
    };
    utterance.set_lang(request.locale.tag);
    synthesis.cancel();
    synthesis.speak(&utterance);
}

/// One-shot position read. `None` when denied, unsupported or failed.
pub(crate) async fn current_position() -> Option<Coordinates> {
    let geolocation = match window().navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(err) => {
            console::warn!("geolocation unavailable", err);
            return None;
        }
    };
    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        if let Err(err) =
            geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });
    match JsFuture::from(promise).await {
        Ok(position) => read_coordinates(&position),
        Err(err) => {
            console::warn!("geolocation denied or failed", err);
            None
        }
    }
}

fn read_coordinates(position: &JsValue) -> Option<Coordinates> {
    let coords = Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    let latitude = Reflect::get(&coords, &JsValue::from_str("latitude")).ok()?.as_f64()?;
    let longitude = Reflect::get(&coords, &JsValue::from_str("longitude")).ok()?.as_f64()?;
    Some(Coordinates {
        latitude,
        longitude,
    })
}

/// Open the native share sheet, or alert `fallback` when there is none.
pub(crate) async fn share(title: &str, text: &str, fallback: &str) {
    let navigator = window().navigator();
    let share = Reflect::get(&navigator, &JsValue::from_str("share"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());
    let Some(share) = share else {
        notify(fallback);
        return;
    };

    let data = Object::new();
    let _ = Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(title));
    let _ = Reflect::set(&data, &JsValue::from_str("text"), &JsValue::from_str(text));
    let outcome = match share.call1(&navigator, &data) {
        Ok(result) => match result.dyn_into::<Promise>() {
            Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
            Err(_) => Ok(()),
        },
        Err(err) => Err(err),
    };
    if let Err(err) = outcome {
        console::warn!("share cancelled or failed", err);
    }
}

/// Blocking notice to the user.
pub(crate) fn notify(message: &str) {
    gloo::dialogs::alert(message);
}
