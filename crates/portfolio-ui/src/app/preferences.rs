//! Browser-backed preference storage and the document theme marker.

use crate::core::error::PreferenceError;
use crate::core::preferences::PreferenceStore;
use crate::core::theme::{Theme, ThemeMarker};
use gloo::console;
use gloo::utils::{document, window};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `window.localStorage` with raw string values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BrowserStore;

impl BrowserStore {
    fn storage(key: &'static str) -> Result<Storage, PreferenceError> {
        match window().local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(PreferenceError::Unavailable {
                key,
                detail: "localStorage is not available".to_string(),
            }),
            Err(err) => Err(unavailable(key, &err)),
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn read(&self, key: &'static str) -> Result<Option<String>, PreferenceError> {
        Self::storage(key)?
            .get_item(key)
            .map_err(|err| unavailable(key, &err))
    }

    fn write(&mut self, key: &'static str, value: &str) -> Result<(), PreferenceError> {
        Self::storage(key)?
            .set_item(key, value)
            .map_err(|err| unavailable(key, &err))
    }
}

fn unavailable(key: &'static str, err: &JsValue) -> PreferenceError {
    PreferenceError::Unavailable {
        key,
        detail: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}

/// Writes `data-theme` on the root element.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct DocumentThemeMarker;

impl ThemeMarker for DocumentThemeMarker {
    fn mark(&mut self, theme: Theme) {
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

pub(crate) fn log_preference_error(operation: &'static str, err: &PreferenceError) {
    match err {
        PreferenceError::Unavailable { key, detail } => {
            console::error!("preference storage failed", operation, *key, detail.as_str());
        }
        PreferenceError::UnsupportedLanguage(code) => {
            console::warn!("preference rejected", operation, code.as_str());
        }
    }
}
