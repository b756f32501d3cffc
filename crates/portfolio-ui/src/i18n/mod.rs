//! Compiled-in JSON translation bundles, one per supported language.
//!
//! # Design
//! - Bundles are parsed once per process and handed out as `&'static` references.
//! - Lookups fall back to English; a key missing everywhere panics in debug builds
//!   and renders as an empty string in release builds.
//! - Every bundle must share the English bundle's shape; `shape_mismatches` reports drift.

use crate::core::error::I18nError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::LazyLock;

/// Supported display languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// English.
    En,
    /// Spanish.
    Es,
}

impl Language {
    /// All supported languages in menu order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Es]
    }

    /// Two-letter code persisted in storage.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Native name for the language menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
        }
    }

    /// Map a stored code or browser tag (`es-ES`) to a supported language.
    #[must_use]
    pub fn from_code(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|language| language.code() == base)
    }
}

/// Language used when nothing valid is stored.
pub const DEFAULT_LANGUAGE: Language = Language::En;

/// Parsed translation tree for one language.
#[derive(Debug)]
pub struct TranslationBundle {
    language: Language,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
    }
}

static EN_BUNDLE: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::parse(Language::En));
static ES_BUNDLE: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::parse(Language::Es));

impl TranslationBundle {
    /// Shared bundle for `language`.
    #[must_use]
    pub fn for_language(language: Language) -> &'static Self {
        match language {
            Language::En => &EN_BUNDLE,
            Language::Es => &ES_BUNDLE,
        }
    }

    fn parse(language: Language) -> Self {
        let tree = parse_tree(raw_bundle(language)).unwrap_or_else(|err| {
            missing(&err);
            Value::Null
        });
        Self { language, tree }
    }

    /// Language backing this bundle.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Resolve a dotted path (`hero.tagline`) to display text.
    #[must_use]
    pub fn text(&self, path: &str) -> String {
        self.try_text(path).unwrap_or_else(|err| missing(&err))
    }

    /// Resolve a dotted path, surfacing lookup failures.
    ///
    /// # Errors
    /// Returns [`I18nError::MissingKey`] when neither this bundle nor the English
    /// bundle has the path, or [`I18nError::Malformed`] when the value is not a string.
    pub fn try_text(&self, path: &str) -> Result<String, I18nError> {
        let node = self.lookup(path)?;
        node.as_str()
            .map(ToString::to_string)
            .ok_or_else(|| I18nError::Malformed {
                path: path.to_string(),
                detail: "expected a string".to_string(),
            })
    }

    /// Resolve an ordered list of strings (`about.paragraphs`).
    #[must_use]
    pub fn list(&self, path: &str) -> Vec<String> {
        self.entries(path).unwrap_or_else(|err| {
            missing(&err);
            Vec::new()
        })
    }

    /// Deserialize an ordered list of records at `path`.
    ///
    /// # Errors
    /// Returns [`I18nError::MissingKey`] when the path is absent, or
    /// [`I18nError::Malformed`] when an element does not match `T`.
    pub fn entries<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, I18nError> {
        let node = self.lookup(path)?;
        serde_json::from_value(node.clone()).map_err(|err| I18nError::Malformed {
            path: path.to_string(),
            detail: err.to_string(),
        })
    }

    fn lookup(&self, path: &str) -> Result<&Value, I18nError> {
        resolve(&self.tree, path)
            .or_else(|| {
                (self.language != Language::En)
                    .then(|| resolve(&EN_BUNDLE.tree, path))
                    .flatten()
            })
            .ok_or_else(|| I18nError::MissingKey(path.to_string()))
    }

    /// Paths where this bundle's shape differs from `other`.
    ///
    /// Objects must have the same keys, arrays of records the same length, and
    /// every leaf the same JSON kind.
    #[must_use]
    pub fn shape_mismatches(&self, other: &Self) -> Vec<String> {
        let mut out = Vec::new();
        diff_shape(&self.tree, &other.tree, "", &mut out);
        out
    }
}

fn parse_tree(raw: &str) -> Result<Value, I18nError> {
    match serde_json::from_str(raw) {
        Ok(tree @ Value::Object(_)) => Ok(tree),
        Ok(_) => Err(I18nError::Malformed {
            path: "<root>".to_string(),
            detail: "bundle root must be an object".to_string(),
        }),
        Err(err) => Err(I18nError::Malformed {
            path: "<root>".to_string(),
            detail: err.to_string(),
        }),
    }
}

#[cfg(debug_assertions)]
fn missing(err: &I18nError) -> String {
    panic!("{err}")
}

#[cfg(not(debug_assertions))]
fn missing(_err: &I18nError) -> String {
    String::new()
}

fn resolve<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    Some(node)
}

fn diff_shape(left: &Value, right: &Value, path: &str, out: &mut Vec<String>) {
    let here = if path.is_empty() { "<root>" } else { path };
    match (left, right) {
        (Value::Object(a), Value::Object(b)) => {
            for (key, value) in a {
                let child = join(path, key);
                let Some(other) = b.get(key) else {
                    out.push(format!("{child}: missing on right"));
                    continue;
                };
                diff_shape(value, other, &child, out);
            }
            for key in b.keys().filter(|key| !a.contains_key(*key)) {
                out.push(format!("{}: missing on left", join(path, key)));
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            let records = a.iter().chain(b).any(Value::is_object);
            if records && a.len() != b.len() {
                out.push(format!("{here}: {} entries vs {}", a.len(), b.len()));
            }
            for (index, (x, y)) in a.iter().zip(b).enumerate() {
                diff_shape(x, y, &join(path, &index.to_string()), out);
            }
        }
        (a, b) if kind(a) != kind(b) => {
            out.push(format!("{here}: {} vs {}", kind(a), kind(b)));
        }
        _ => {}
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

const fn raw_bundle(language: Language) -> &'static str {
    match language {
        Language::En => include_str!("../../i18n/en.json"),
        Language::Es => include_str!("../../i18n/es.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bundles_share_one_shape() {
        let reference = TranslationBundle::for_language(DEFAULT_LANGUAGE);
        for language in Language::all() {
            let bundle = TranslationBundle::for_language(language);
            assert_eq!(bundle.language(), language);
            assert!(
                reference.shape_mismatches(bundle).is_empty(),
                "{language:?}: {:?}",
                reference.shape_mismatches(bundle)
            );
        }
    }

    #[test]
    fn every_raw_bundle_parses_to_an_object() {
        for language in Language::all() {
            let tree = parse_tree(raw_bundle(language));
            assert!(tree.is_ok(), "{language:?}: {tree:?}");
        }
    }

    #[test]
    fn malformed_or_non_object_bundles_are_rejected() {
        assert!(matches!(
            parse_tree("{ \"nav\": "),
            Err(I18nError::Malformed { .. })
        ));
        assert!(matches!(parse_tree("[]"), Err(I18nError::Malformed { .. })));
        assert!(matches!(parse_tree("null"), Err(I18nError::Malformed { .. })));
    }

    #[test]
    fn shape_diff_reports_missing_keys_and_kind_changes() {
        let mut out = Vec::new();
        diff_shape(
            &json!({ "a": { "b": "x", "c": ["p"] }, "jobs": [{ "id": "1" }] }),
            &json!({ "a": { "c": "p", "d": "y" }, "jobs": [] }),
            "",
            &mut out,
        );
        assert!(out.contains(&"a.b: missing on right".to_string()));
        assert!(out.contains(&"a.d: missing on left".to_string()));
        assert!(out.contains(&"a.c: array vs string".to_string()));
        assert!(out.contains(&"jobs: 1 entries vs 0".to_string()));
    }

    #[test]
    fn spanish_bundle_resolves_spanish_text() {
        let es = TranslationBundle::for_language(Language::Es);
        assert_eq!(es.text("nav.about"), "Sobre mí");
        assert_eq!(es.text("blog.coming_soon"), "¡Próximamente!");
    }

    #[test]
    fn lists_keep_authored_order() {
        let paragraphs = TranslationBundle::for_language(Language::En).list("about.paragraphs");
        assert_eq!(paragraphs.len(), 4);
        assert!(paragraphs[0].starts_with("Automation QA Engineer"));
    }

    #[test]
    fn missing_key_is_reported_by_try_text() {
        let bundle = TranslationBundle::for_language(Language::Es);
        assert_eq!(
            bundle.try_text("nav.missing"),
            Err(I18nError::MissingKey("nav.missing".to_string()))
        );
        assert!(matches!(
            bundle.try_text("about.paragraphs"),
            Err(I18nError::Malformed { .. })
        ));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "missing translation key `hero.nope`")]
    fn missing_key_panics_in_debug_builds() {
        let _ = TranslationBundle::for_language(Language::En).text("hero.nope");
    }

    #[test]
    fn language_codes_parse_with_fallback_to_none() {
        assert_eq!(Language::from_code("es"), Some(Language::Es));
        assert_eq!(Language::from_code("ES-mx"), Some(Language::Es));
        assert_eq!(Language::from_code("en_GB"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }
}
