//! Chat with the AI dog expert.
//!
//! # Design
//! - The thread is append-only and opens with a localized greeting.
//! - One request at a time; input is ignored while a reply is pending.
//! - Replies that arrive after the view unmounts are dropped.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
