//! Places explorer with offline fixtures and an AI nearby search.
//!
//! # Design
//! - Fixture places are always shown and filtered locally.
//! - The AI search reads the position once at mount; without it the query
//!   goes out without coordinates.
//! - Provider failures render the no-results state.

pub mod fixtures;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
