//! Display targets
//!
//! The engine reads and writes targets only through [`DisplayTarget`], so a
//! host can reconcile its own widget type directly. [`Preference`] is the
//! plain implementation.

use tilesync_resolver::IconHandle;

/// Mutable UI element that can show an icon and a summary
pub trait DisplayTarget {
    /// Stable key matched against tile keys
    fn key(&self) -> Option<&str>;

    /// Current icon
    fn icon(&self) -> Option<&IconHandle>;

    /// Replace the icon
    fn set_icon(&mut self, icon: IconHandle);

    /// Current summary
    fn summary(&self) -> Option<&str>;

    /// Replace the summary
    fn set_summary(&mut self, summary: String);

    /// Icon present and showing something
    fn has_icon(&self) -> bool {
        self.icon().is_some_and(|icon| !icon.is_empty())
    }

    /// Summary present and non-empty
    fn has_summary(&self) -> bool {
        self.summary().is_some_and(|summary| !summary.is_empty())
    }
}

/// Plain preference row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preference {
    /// Row key
    pub key: Option<String>,
    /// Row title
    pub title: Option<String>,
    /// Row icon
    pub icon: Option<IconHandle>,
    /// Row summary
    pub summary: Option<String>,
}

impl Preference {
    /// Create keyed row with nothing set
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    /// With title
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// With icon
    #[inline]
    #[must_use]
    pub fn with_icon(mut self, icon: IconHandle) -> Self {
        self.icon = Some(icon);
        self
    }

    /// With summary
    #[inline]
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

impl DisplayTarget for Preference {
    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn icon(&self) -> Option<&IconHandle> {
        self.icon.as_ref()
    }

    fn set_icon(&mut self, icon: IconHandle) {
        self.icon = Some(icon);
    }

    fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    fn set_summary(&mut self, summary: String) {
        self.summary = Some(summary);
    }
}
