//! Translation store abstraction.

use std::collections::BTreeMap;
use std::convert::Infallible;

use serde_json::Value;

/// Per-record store of translated attribute values.
///
/// Implementations own persistence. Errors are returned to the caller as-is.
pub trait Translator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the stored value, or `None` when the attribute has no
    /// translation for `locale`.
    fn get(&self, attribute: &str, locale: &str) -> Result<Option<Value>, Self::Error>;

    fn get_or(&self, attribute: &str, locale: &str, default: Value) -> Result<Value, Self::Error> {
        Ok(self.get(attribute, locale)?.unwrap_or(default))
    }

    fn set(&mut self, attribute: &str, value: Value, locale: &str) -> Result<(), Self::Error>;
}

/// Returns true for `null`, `""`, `false`, `[]` and `{}`.
///
/// Numbers and numeric strings such as `0` or `"0"` are values, not blanks,
/// so a field set to `"0"` counts as touched.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Number(_) => false,
    }
}

/// Translator backed by an ordered in-memory map (attribute → locale → value).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryTranslator {
    translations: BTreeMap<String, BTreeMap<String, Value>>,
}

impl InMemoryTranslator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation, builder style.
    #[must_use]
    pub fn with(mut self, attribute: &str, locale: &str, value: impl Into<Value>) -> Self {
        self.insert(attribute, locale, value.into());
        self
    }

    fn insert(&mut self, attribute: &str, locale: &str, value: Value) {
        self.translations
            .entry(attribute.to_string())
            .or_default()
            .insert(locale.to_string(), value);
    }

    /// All translations of `attribute`, keyed by locale.
    #[must_use]
    pub fn translations(&self, attribute: &str) -> Option<&BTreeMap<String, Value>> {
        self.translations.get(attribute)
    }
}

impl Translator for InMemoryTranslator {
    type Error = Infallible;

    fn get(&self, attribute: &str, locale: &str) -> Result<Option<Value>, Self::Error> {
        Ok(self.translations.get(attribute).and_then(|by_locale| by_locale.get(locale)).cloned())
    }

    fn set(&mut self, attribute: &str, value: Value, locale: &str) -> Result<(), Self::Error> {
        self.insert(attribute, locale, value);
        Ok(())
    }
}
