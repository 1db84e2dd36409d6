//! DOM-free state and rules for the Web UI.
pub mod presentation;
pub mod request;
pub mod speech;
pub mod theme;
pub mod views;
