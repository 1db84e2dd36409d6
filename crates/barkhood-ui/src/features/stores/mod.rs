//! Store directory and dog walkers.
//!
//! # Design
//! - Category chips match on the category id, never on display text.
//! - Sorting by rating is stable, so equal ratings keep fixture order.

pub mod fixtures;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
