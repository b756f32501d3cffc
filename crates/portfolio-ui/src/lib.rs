#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::redundant_pub_crate)]
//! Portfolio single-page site.
//!
//! `core` and `i18n` hold the DOM-free state machines, content catalog and
//! translation bundles; the Yew front end is compiled only for wasm32.

pub mod core;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::{PortfolioApp, run_app};

#[cfg(test)]
mod tests {
    use crate::core::content::{JOBS, PROJECTS, SKILLS};
    use crate::i18n::{Language, TranslationBundle};

    #[test]
    fn every_translated_record_list_matches_the_catalog_size() {
        for language in Language::all() {
            let bundle = TranslationBundle::for_language(language);
            let count = |path: &str| bundle.entries::<serde_json::Value>(path).map(|v| v.len());
            assert_eq!(count("portfolio.projects"), Ok(PROJECTS.len()));
            assert_eq!(count("experience.jobs"), Ok(JOBS.len()));
            assert_eq!(count("hero.skills"), Ok(SKILLS.len()));
        }
    }
}
