//! Error types for the DOM-free core.
//!
//! # Design
//! - Core helpers never log; they return these errors and the wasm layer reports them.
//! - Variants carry the key, path or record id so console output is actionable.

use thiserror::Error;

/// Failures reading or writing persisted preferences.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// Browser storage is missing, disabled or rejected the operation.
    #[error("preference storage unavailable for `{key}`: {detail}")]
    Unavailable {
        /// Storage key involved.
        key: &'static str,
        /// Host-provided failure detail.
        detail: String,
    },
    /// A language code outside the supported set was requested.
    #[error("unsupported language code `{0}`")]
    UnsupportedLanguage(String),
}

/// Failures resolving entries in a translation bundle.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum I18nError {
    /// No value exists at the dotted path.
    #[error("missing translation key `{0}`")]
    MissingKey(String),
    /// A value exists but has the wrong shape for the caller.
    #[error("malformed translation value at `{path}`: {detail}")]
    Malformed {
        /// Dotted path of the value.
        path: String,
        /// Deserializer message.
        detail: String,
    },
}

/// Failures pairing catalog records with translated entries.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContentError {
    /// A catalog record has no translated entry.
    #[error("{kind} `{id}` has no translated entry")]
    MissingTranslation {
        /// Record family (`project`, `job`, `skill`).
        kind: &'static str,
        /// Stable record identifier.
        id: String,
    },
    /// A translated entry has no catalog record.
    #[error("translated {kind} `{id}` is not in the catalog")]
    UnknownEntry {
        /// Record family (`project`, `job`, `skill`).
        kind: &'static str,
        /// Identifier found in the bundle.
        id: String,
    },
    /// The bundle section could not be read.
    #[error(transparent)]
    Bundle(#[from] I18nError),
}
