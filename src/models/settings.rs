//! Theme settings snapshot.
//!
//! The theme stores its options as one flat, untyped key/value document
//! (`heading-base-color`, `font-family-h1`, `headings-font-extras`, ...).
//! [`SourceSettings`] wraps that document and answers lookups with a
//! [`SettingValue`] so callers can tell "absent" from "present but empty".

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of looking up a single key in [`SourceSettings`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingValue<'a> {
    /// Key is missing or holds `null`
    Absent,
    /// Key holds an empty string, empty list or empty object
    Empty,
    /// Key holds a usable value
    Present(&'a Value),
}

impl<'a> SettingValue<'a> {
    /// Classifies a raw value.
    #[must_use]
    pub fn classify(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::String(s)) if s.is_empty() => Self::Empty,
            Some(Value::Array(items)) if items.is_empty() => Self::Empty,
            Some(Value::Object(map)) if map.is_empty() => Self::Empty,
            Some(value) => Self::Present(value),
        }
    }

    /// Returns true if the value can be used by a fallback chain.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns the usable value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&'a Value> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Empty => None,
        }
    }
}

/// Read-only snapshot of the theme's settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceSettings {
    values: Map<String, Value>,
}

impl SourceSettings {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a parsed JSON document.
    ///
    /// Returns `None` when the document is not an object, which is how a
    /// missing or corrupted settings store shows up.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(values) => Some(Self { values }),
            _ => None,
        }
    }

    /// Looks up a key.
    #[must_use]
    pub fn get(&self, key: &str) -> SettingValue<'_> {
        SettingValue::classify(self.values.get(key))
    }

    /// Returns the raw stored value without any emptiness check.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Inserts or replaces a key. Mostly useful for building test snapshots.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
