//! Core, DOM-free state machines and content helpers for the portfolio UI.
pub mod content;
pub mod error;
pub mod markdown;
pub mod nav;
pub mod overlay;
pub mod preferences;
pub mod profile;
pub mod theme;
