//! Persisted theme and language preferences.
//!
//! # Design
//! - `Preferences` is the single holder for both values; the app root owns it and
//!   hands the language down through a context.
//! - Storage is injected through [`PreferenceStore`] so the browser and tests share one code path.
//! - State changes always apply in memory. The first failed write marks the holder
//!   degraded and later writes are skipped for the rest of the session.

use crate::core::error::PreferenceError;
use crate::core::profile::{LANGUAGE_KEY, THEME_KEY};
use crate::core::theme::{Theme, ThemeMarker};
use crate::i18n::{DEFAULT_LANGUAGE, Language, TranslationBundle};
use std::collections::BTreeMap;

/// Key/value backend for preferences (browser local storage in production).
pub trait PreferenceStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    /// Returns [`PreferenceError::Unavailable`] when the backend cannot be read.
    fn read(&self, key: &'static str) -> Result<Option<String>, PreferenceError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    /// Returns [`PreferenceError::Unavailable`] when the backend rejects the write.
    fn write(&mut self, key: &'static str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory store with optional failure injection, for exercising [`Preferences`] off the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<&'static str, String>,
    unavailable: bool,
}

impl MemoryStore {
    /// Empty, working store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that fails every read and write.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            entries: BTreeMap::new(),
            unavailable: true,
        }
    }

    /// Seed a value.
    #[must_use]
    pub fn with(mut self, key: &'static str, value: &str) -> Self {
        self.entries.insert(key, value.to_string());
        self
    }

    /// Current raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn check(&self, key: &'static str) -> Result<(), PreferenceError> {
        if self.unavailable {
            return Err(PreferenceError::Unavailable {
                key,
                detail: "storage disabled".to_string(),
            });
        }
        Ok(())
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &'static str) -> Result<Option<String>, PreferenceError> {
        self.check(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &'static str, value: &str) -> Result<(), PreferenceError> {
        self.check(key)?;
        self.entries.insert(key, value.to_string());
        Ok(())
    }
}

/// Theme and language state backed by a [`PreferenceStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences<S> {
    store: S,
    theme: Theme,
    language: Language,
    degraded: Option<PreferenceError>,
}

impl<S: PreferenceStore> Preferences<S> {
    /// Read both preferences, falling back to `dark` / `en` for missing or unknown values.
    #[must_use]
    pub fn load(store: S) -> Self {
        let mut degraded = None;
        let mut read = |key| {
            store.read(key).unwrap_or_else(|err| {
                degraded.get_or_insert(err);
                None
            })
        };
        let theme = read(THEME_KEY)
            .as_deref()
            .and_then(Theme::from_stored)
            .unwrap_or_default();
        let language = read(LANGUAGE_KEY)
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or(DEFAULT_LANGUAGE);
        Self {
            store,
            theme,
            language,
            degraded,
        }
    }

    /// Active language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Bundle for the active language.
    #[must_use]
    pub fn bundle(&self) -> &'static TranslationBundle {
        TranslationBundle::for_language(self.language)
    }

    /// Active theme.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Error that switched the holder to memory-only mode, if any.
    #[must_use]
    pub const fn degraded(&self) -> Option<&PreferenceError> {
        self.degraded.as_ref()
    }

    /// Backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Switch language and persist it.
    ///
    /// # Errors
    /// Returns [`PreferenceError::Unavailable`] when this write fails; the new
    /// language is still active in memory.
    pub fn set_language(&mut self, language: Language) -> Result<(), PreferenceError> {
        self.language = language;
        self.persist(LANGUAGE_KEY, language.code())
    }

    /// Validate a raw language code and switch to it.
    ///
    /// # Errors
    /// Returns [`PreferenceError::UnsupportedLanguage`] without changing state when
    /// `code` is not supported, or the storage error from [`Self::set_language`].
    pub fn set_language_code(&mut self, code: &str) -> Result<Language, PreferenceError> {
        let language = Language::from_code(code)
            .ok_or_else(|| PreferenceError::UnsupportedLanguage(code.to_string()))?;
        self.set_language(language)?;
        Ok(language)
    }

    /// Reflect the current theme onto `marker` without changing it.
    pub fn apply_theme(&self, marker: &mut impl ThemeMarker) {
        marker.mark(self.theme);
    }

    /// Flip the theme, mark the document, and persist the new value.
    ///
    /// # Errors
    /// Returns [`PreferenceError::Unavailable`] when this write fails; the theme
    /// and the marker are updated regardless.
    pub fn toggle_theme(&mut self, marker: &mut impl ThemeMarker) -> Result<Theme, PreferenceError> {
        self.theme = self.theme.toggled();
        marker.mark(self.theme);
        self.persist(THEME_KEY, self.theme.as_str())?;
        Ok(self.theme)
    }

    fn persist(&mut self, key: &'static str, value: &str) -> Result<(), PreferenceError> {
        if self.degraded.is_some() {
            return Ok(());
        }
        self.store.write(key, value).inspect_err(|err| {
            self.degraded = Some(err.clone());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingMarker(Vec<Theme>);

    impl ThemeMarker for RecordingMarker {
        fn mark(&mut self, theme: Theme) {
            self.0.push(theme);
        }
    }

    #[test]
    fn defaults_apply_when_storage_is_empty() {
        let prefs = Preferences::load(MemoryStore::new());
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(prefs.language(), Language::En);
        assert!(prefs.degraded().is_none());
    }

    #[test]
    fn stored_values_are_restored() {
        let store = MemoryStore::new()
            .with(THEME_KEY, "light")
            .with(LANGUAGE_KEY, "es");
        let prefs = Preferences::load(store);
        assert_eq!(prefs.theme(), Theme::Light);
        assert_eq!(prefs.language(), Language::Es);
        assert_eq!(prefs.bundle(), TranslationBundle::for_language(Language::Es));
    }

    #[test]
    fn unknown_legacy_values_fall_back_to_defaults() {
        let store = MemoryStore::new()
            .with(THEME_KEY, "\"light\"")
            .with(LANGUAGE_KEY, "klingon");
        let prefs = Preferences::load(store);
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(prefs.language(), Language::En);
    }

    #[test]
    fn last_language_set_wins_in_state_and_storage() {
        let mut prefs = Preferences::load(MemoryStore::new());
        let sequence = [
            Language::Es,
            Language::En,
            Language::Es,
            Language::Es,
            Language::En,
            Language::Es,
        ];
        for language in sequence {
            prefs.set_language(language).unwrap();
        }
        assert_eq!(prefs.language(), Language::Es);
        assert_eq!(prefs.bundle(), TranslationBundle::for_language(Language::Es));
        assert_eq!(prefs.store().get(LANGUAGE_KEY), Some("es"));
    }

    #[test]
    fn unsupported_code_keeps_prior_selection() {
        let mut prefs = Preferences::load(MemoryStore::new().with(LANGUAGE_KEY, "es"));
        let err = prefs.set_language_code("de").unwrap_err();
        assert_eq!(err, PreferenceError::UnsupportedLanguage("de".to_string()));
        assert_eq!(prefs.language(), Language::Es);
        assert_eq!(prefs.set_language_code("en-US"), Ok(Language::En));
        assert_eq!(prefs.store().get(LANGUAGE_KEY), Some("en"));
    }

    #[test]
    fn toggling_theme_twice_restores_it_and_keeps_marker_in_sync() {
        let mut prefs = Preferences::load(MemoryStore::new());
        let mut marker = RecordingMarker::default();
        let original = prefs.theme();

        let first = prefs.toggle_theme(&mut marker).unwrap();
        assert_eq!(marker.0.last(), Some(&prefs.theme()));
        assert_eq!(prefs.store().get(THEME_KEY), Some(first.as_str()));

        prefs.toggle_theme(&mut marker).unwrap();
        assert_eq!(prefs.theme(), original);
        assert_eq!(marker.0, vec![Theme::Light, Theme::Dark]);
        assert_eq!(prefs.store().get(THEME_KEY), Some("dark"));
    }

    #[test]
    fn unavailable_storage_degrades_to_memory() {
        let mut prefs = Preferences::load(MemoryStore::unavailable());
        assert!(matches!(
            prefs.degraded(),
            Some(PreferenceError::Unavailable { key: THEME_KEY, .. })
        ));
        assert_eq!(prefs.set_language(Language::Es), Ok(()));
        assert_eq!(prefs.language(), Language::Es);

        let mut marker = RecordingMarker::default();
        assert_eq!(prefs.toggle_theme(&mut marker), Ok(Theme::Light));
        assert_eq!(marker.0, vec![Theme::Light]);
    }

    #[test]
    fn first_failed_write_is_reported_once() {
        let mut prefs = Preferences::load(MemoryStore::new());
        prefs.store = MemoryStore::unavailable();
        assert!(prefs.set_language(Language::Es).is_err());
        assert_eq!(prefs.language(), Language::Es);
        assert!(prefs.degraded().is_some());
        assert!(prefs.set_language(Language::En).is_ok());
        assert_eq!(prefs.language(), Language::En);
    }

    #[test]
    fn apply_theme_marks_without_toggling() {
        let prefs = Preferences::load(MemoryStore::new().with(THEME_KEY, "light"));
        let mut marker = RecordingMarker::default();
        prefs.apply_theme(&mut marker);
        assert_eq!(marker.0, vec![Theme::Light]);
        assert_eq!(prefs.theme(), Theme::Light);
    }
}
