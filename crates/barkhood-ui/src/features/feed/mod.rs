//! Community feed.
//!
//! # Design
//! - Posts are fixture data; only likes and the search box are interactive.
//! - Filtering is recomputed on every render from the search text.

pub mod fixtures;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
