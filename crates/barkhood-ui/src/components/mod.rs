pub(crate) mod atoms;
pub(crate) mod locale_menu;
pub(crate) mod settings_menu;
pub(crate) mod shell;
