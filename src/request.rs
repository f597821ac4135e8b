//! Incoming form payload.

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::{
    Map,
    Value,
};

/// Submitted form input keyed by (localized) field attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Request {
    input: Map<String, Value>,
}

impl Request {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an input value, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.input.insert(key.into(), value.into());
        self
    }

    /// Returns true if the payload contains `key`, even with a `null` value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.input.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.input.get(key)
    }

    /// The input value for `key`, `null` when absent.
    #[must_use]
    pub fn value(&self, key: &str) -> Value {
        self.input.get(key).cloned().unwrap_or(Value::Null)
    }
}

impl From<Map<String, Value>> for Request {
    fn from(input: Map<String, Value>) -> Self {
        Self { input }
    }
}

impl FromIterator<(String, Value)> for Request {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self { input: iter.into_iter().collect() }
    }
}
