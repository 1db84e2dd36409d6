pub(crate) mod chat;
pub(crate) mod places;
pub(crate) mod strings;
