//! Browser platform calls.
pub(crate) mod platform;
