//! Descriptor - declarative tile records
//!
//! A [`Descriptor`] is what a third-party tile publishes about itself: the key
//! of the host row it decorates, the intent that launches it, and a metadata
//! bag that may point at remote icon/summary content.

use crate::error::DescriptorError;
use crate::keys::{META_DATA_PREFERENCE_ICON_URI, META_DATA_PREFERENCE_SUMMARY_URI};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Immutable tile descriptor
///
/// # Structure
/// - `key`: matches a display target's key; keyless tiles are never matched
/// - `intent`: launch target; a tile without one is inert
/// - `metadata`: optional bag of well-known entries (see [`crate::keys`])
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Key of the display target this tile decorates
    #[serde(default)]
    pub key: Option<String>,

    /// Launch intent
    #[serde(default)]
    pub intent: Option<Intent>,

    /// Metadata bag
    #[serde(default, rename = "metaData")]
    pub metadata: Option<Metadata>,
}

impl Descriptor {
    /// Create descriptor with a key and nothing else
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            intent: None,
            metadata: None,
        }
    }

    /// Create descriptor with no key (never matched)
    #[inline]
    #[must_use]
    pub fn keyless() -> Self {
        Self::default()
    }

    /// With launch intent
    #[inline]
    #[must_use]
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    /// With metadata bag
    #[inline]
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Descriptor key, if any
    #[inline]
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// A tile is live when it has somewhere to launch
    #[inline]
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.intent.is_some()
    }

    /// Icon URI from the metadata bag
    #[must_use]
    pub fn icon_uri(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(Metadata::icon_uri)
    }

    /// Summary URI from the metadata bag
    #[must_use]
    pub fn summary_uri(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(Metadata::summary_uri)
    }

    /// Whether the metadata names anything to resolve
    #[must_use]
    pub fn has_remote_metadata(&self) -> bool {
        self.icon_uri().is_some() || self.summary_uri().is_some()
    }
}

/// Launch intent of a tile
///
/// The target application is named either directly by `package` or through
/// the package half of `component`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Action string (informational)
    #[serde(default)]
    pub action: Option<String>,

    /// Explicit target package
    #[serde(default)]
    pub package: Option<String>,

    /// Explicit target component
    #[serde(default)]
    pub component: Option<ComponentName>,
}

impl Intent {
    /// Empty intent (live, but with no resolvable package)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intent targeting a package
    #[inline]
    #[must_use]
    pub fn for_package(package: impl Into<String>) -> Self {
        Self::new().with_package(package)
    }

    /// With explicit package
    #[inline]
    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// With explicit component
    #[inline]
    #[must_use]
    pub fn with_component(mut self, component: ComponentName) -> Self {
        self.component = Some(component);
        self
    }

    /// With action
    #[inline]
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Package whose resources back this tile
    ///
    /// An explicit non-empty package wins over the component's package.
    #[must_use]
    pub fn package_name(&self) -> Option<&str> {
        match self.package.as_deref() {
            Some(package) if !package.is_empty() => Some(package),
            _ => self
                .component
                .as_ref()
                .map(ComponentName::package)
                .filter(|package| !package.is_empty()),
        }
    }
}

/// `package/class` component identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentName {
    package: String,
    class: String,
}

impl ComponentName {
    /// Create component name
    #[inline]
    #[must_use]
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }

    /// Owning package
    #[inline]
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Fully qualified class
    #[inline]
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }
}

impl Display for ComponentName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.class)
    }
}

impl FromStr for ComponentName {
    type Err = DescriptorError;

    /// Parses `package/class`; a class starting with `.` is relative to the package.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (package, class) = s
            .split_once('/')
            .ok_or_else(|| DescriptorError::InvalidComponent(s.to_string()))?;
        if package.is_empty() || class.is_empty() {
            return Err(DescriptorError::InvalidComponent(s.to_string()));
        }
        let class = if class.starts_with('.') {
            format!("{package}{class}")
        } else {
            class.to_string()
        };
        Ok(Self::new(package, class))
    }
}

impl TryFrom<String> for ComponentName {
    type Error = DescriptorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ComponentName> for String {
    fn from(value: ComponentName) -> Self {
        value.to_string()
    }
}

/// String metadata bag, in publication order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    entries: IndexMap<String, String>,
}

impl Metadata {
    /// Empty bag
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With an entry (builder)
    #[inline]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Lookup an entry; empty strings count as absent
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Icon URI entry
    #[inline]
    #[must_use]
    pub fn icon_uri(&self) -> Option<&str> {
        self.get(META_DATA_PREFERENCE_ICON_URI)
    }

    /// Summary URI entry
    #[inline]
    #[must_use]
    pub fn summary_uri(&self) -> Option<&str> {
        self.get(META_DATA_PREFERENCE_SUMMARY_URI)
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn descriptor_without_intent_is_inert() {
        let tile = Descriptor::new("key");
        assert!(!tile.is_live());
        assert!(!tile.has_remote_metadata());
    }

    #[test]
    fn descriptor_reads_well_known_uris() {
        let tile = Descriptor::new("key").with_metadata(
            Metadata::new()
                .with(META_DATA_PREFERENCE_ICON_URI, "content://package/icon/my_icon")
                .with(META_DATA_PREFERENCE_SUMMARY_URI, "content://package/text/summary"),
        );
        assert_eq!(tile.icon_uri(), Some("content://package/icon/my_icon"));
        assert_eq!(tile.summary_uri(), Some("content://package/text/summary"));
        assert!(tile.has_remote_metadata());
    }

    #[test]
    fn metadata_empty_value_counts_as_absent() {
        let metadata = Metadata::new().with(META_DATA_PREFERENCE_ICON_URI, "");
        assert_eq!(metadata.icon_uri(), None);
        assert_eq!(metadata.len(), 1);
    }

    #[test]
    fn intent_prefers_explicit_package() {
        let intent = Intent::for_package("explicit")
            .with_component(ComponentName::new("component", "component.Activity"));
        assert_eq!(intent.package_name(), Some("explicit"));
    }

    #[test]
    fn intent_falls_back_to_component_package() {
        let intent = Intent::new()
            .with_package("")
            .with_component(ComponentName::new("component", "component.Activity"));
        assert_eq!(intent.package_name(), Some("component"));
        assert_eq!(Intent::new().package_name(), None);
    }

    #[test]
    fn component_parses_relative_class() {
        let component: ComponentName = "com.example/.Settings".parse().unwrap();
        assert_eq!(component.package(), "com.example");
        assert_eq!(component.class(), "com.example.Settings");
        assert!("no-slash".parse::<ComponentName>().is_err());
        assert!("/cls".parse::<ComponentName>().is_err());
    }

    #[test]
    fn descriptor_deserializes_from_json() {
        let json = r#"{
            "key": "key",
            "intent": { "component": "package/.Tile" },
            "metaData": { "com.android.settings.summary_uri": "content://package/text/summary" }
        }"#;
        let tile: Descriptor = serde_json::from_str(json).unwrap();
        assert_eq!(tile.key(), Some("key"));
        assert_eq!(
            tile.intent.as_ref().and_then(Intent::package_name),
            Some("package")
        );
        assert_eq!(tile.summary_uri(), Some("content://package/text/summary"));
        assert_eq!(tile.icon_uri(), None);
    }
}
