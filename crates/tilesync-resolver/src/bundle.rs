//! Provider response bundles

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Single bundle value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BundleValue {
    /// Integer entry (resource ids)
    Int(i64),
    /// Text entry
    Text(String),
}

/// Key/value response returned by a content provider call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bundle {
    entries: IndexMap<String, BundleValue>,
}

impl Bundle {
    /// Empty bundle
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With integer entry
    #[must_use]
    pub fn with_int(mut self, key: impl Into<String>, value: i64) -> Self {
        self.entries.insert(key.into(), BundleValue::Int(value));
        self
    }

    /// With text entry
    #[must_use]
    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .insert(key.into(), BundleValue::Text(value.into()));
        self
    }

    /// Raw entry
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&BundleValue> {
        self.entries.get(key)
    }

    /// Integer entry; text entries do not coerce
    #[must_use]
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.entries.get(key)? {
            BundleValue::Int(value) => Some(*value),
            BundleValue::Text(_) => None,
        }
    }

    /// Text entry; integer entries do not coerce
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key)? {
            BundleValue::Text(value) => Some(value),
            BundleValue::Int(_) => None,
        }
    }

    /// Whether the bundle is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
