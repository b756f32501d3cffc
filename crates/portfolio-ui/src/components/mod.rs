pub(crate) mod about;
pub(crate) mod blog;
pub(crate) mod cv_dropdown;
pub(crate) mod experience;
pub(crate) mod footer;
pub(crate) mod hero;
pub(crate) mod hooks;
pub(crate) mod language_menu;
pub(crate) mod modal;
pub(crate) mod navigation;
pub(crate) mod portfolio;
pub(crate) mod social;
