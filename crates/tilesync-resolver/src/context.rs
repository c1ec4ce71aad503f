//! Host execution context
//!
//! Opaque to the engine; handed unchanged to every resolver call.

use serde::{Deserialize, Serialize};

/// Context of the host application running a reconciliation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostContext {
    /// Package name of the host itself
    #[serde(default)]
    pub package_name: String,

    /// Theme used when loading drawables
    #[serde(default)]
    pub theme: Option<String>,
}

impl HostContext {
    /// Create context for a host package
    #[inline]
    #[must_use]
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            theme: None,
        }
    }

    /// With theme
    #[inline]
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Theme, if any
    #[inline]
    #[must_use]
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }
}
