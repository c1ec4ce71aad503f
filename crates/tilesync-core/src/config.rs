//! Reconciliation configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tilesync_descriptor::keys::META_DATA_PREFERENCE_SUMMARY;

/// Engine configuration
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReconcileConfig {
    /// Resolve icon URIs
    pub resolve_icons: bool,
    /// Resolve summary URIs
    pub resolve_summaries: bool,
    /// Bundle entry holding summary text in provider responses
    pub summary_bundle_key: String,
    /// Stop after visiting this many targets
    pub max_targets: Option<usize>,
}

impl ReconcileConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With icon resolution on or off
    #[inline]
    #[must_use]
    pub fn with_icons(mut self, enabled: bool) -> Self {
        self.resolve_icons = enabled;
        self
    }

    /// With summary resolution on or off
    #[inline]
    #[must_use]
    pub fn with_summaries(mut self, enabled: bool) -> Self {
        self.resolve_summaries = enabled;
        self
    }

    /// With summary bundle key
    #[inline]
    #[must_use]
    pub fn with_summary_bundle_key(mut self, key: impl Into<String>) -> Self {
        self.summary_bundle_key = key.into();
        self
    }

    /// With cap on visited targets
    #[inline]
    #[must_use]
    pub fn with_max_targets(mut self, max: usize) -> Self {
        self.max_targets = Some(max);
        self
    }

    /// Parse and validate TOML
    ///
    /// # Errors
    /// Returns error on malformed TOML or invalid values.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), ?config, "loaded reconcile config");
        Ok(config)
    }

    /// Check values
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for an empty summary key or a zero target cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.summary_bundle_key.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "summary_bundle_key must not be empty".to_string(),
            ));
        }
        if self.max_targets == Some(0) {
            return Err(ConfigError::Invalid(
                "max_targets must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            resolve_icons: true,
            resolve_summaries: true,
            summary_bundle_key: META_DATA_PREFERENCE_SUMMARY.to_string(),
            max_targets: None,
        }
    }
}
