//! Content views, one slice per top-level view.
pub mod assistant;
pub mod feed;
pub mod places;
pub mod stores;
