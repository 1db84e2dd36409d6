//! Small building blocks shared by the views.

pub(crate) mod empty_state;
pub(crate) mod search_input;

pub(crate) use empty_state::EmptyState;
pub(crate) use search_input::SearchInput;
