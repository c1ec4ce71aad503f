//! Testing utilities for tilesync workspace
//!
//! Shared fixtures and a recording stub resolver.

#![allow(missing_docs)]

use parking_lot::Mutex;
use tilesync_core::{DisplayTarget, Preference, PreferenceScreen};
use tilesync_descriptor::keys::{META_DATA_PREFERENCE_ICON_URI, META_DATA_PREFERENCE_SUMMARY_URI};
use tilesync_descriptor::{Descriptor, Intent, Metadata, TileCategory};
use tilesync_resolver::{HostContext, IconHandle, ProviderConnections, ReferenceResolver, ResolveError};

pub const MOCK_KEY: &str = "key";
pub const MOCK_SUMMARY: &str = "summary";
pub const MOCK_PACKAGE: &str = "package";
pub const MOCK_ICON_ID: u32 = 161_803;
pub const URI_GET_SUMMARY: &str = "content://package/text/summary";
pub const URI_GET_ICON: &str = "content://package/icon/my_icon";

pub fn mock_icon() -> IconHandle {
    IconHandle::new(MOCK_PACKAGE, MOCK_ICON_ID, vec![0x00, 0x00, 0xFF, 0xFF])
}

pub fn host_context() -> HostContext {
    HostContext::new("com.example.host")
}

/// Screen holding one empty preference keyed [`MOCK_KEY`]
pub fn preference_screen() -> PreferenceScreen<Preference> {
    let mut screen = PreferenceScreen::new();
    screen.add_preference(Preference::new(MOCK_KEY));
    screen
}

/// Category holding one bare tile keyed [`MOCK_KEY`]
pub fn dashboard_category() -> TileCategory {
    let mut category = TileCategory::new();
    category.add_tile(Descriptor::new(MOCK_KEY));
    category
}

/// Metadata naming both the icon and the summary URI
pub fn remote_metadata() -> Metadata {
    Metadata::new()
        .with(META_DATA_PREFERENCE_ICON_URI, URI_GET_ICON)
        .with(META_DATA_PREFERENCE_SUMMARY_URI, URI_GET_SUMMARY)
}

/// Category holding one live tile keyed [`MOCK_KEY`] with remote metadata
pub fn live_category() -> TileCategory {
    let mut category = dashboard_category();
    if let Some(tile) = category.tile_mut(0) {
        tile.intent = Some(Intent::for_package(MOCK_PACKAGE));
        tile.metadata = Some(remote_metadata());
    }
    category
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolverCall {
    Icon { package: String, uri: String },
    Text { uri: String, key: String },
}

/// Resolver answering with fixed values and recording every call
#[derive(Debug)]
pub struct StubResolver {
    icon: Result<Option<IconHandle>, ResolveError>,
    text: Result<Option<String>, ResolveError>,
    calls: Mutex<Vec<ResolverCall>>,
}

impl Default for StubResolver {
    fn default() -> Self {
        Self {
            icon: Ok(Some(mock_icon())),
            text: Ok(Some(MOCK_SUMMARY.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl StubResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_icon(mut self, icon: Result<Option<IconHandle>, ResolveError>) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_text(mut self, text: Result<Option<String>, ResolveError>) -> Self {
        self.text = text;
        self
    }

    pub fn calls(&self) -> Vec<ResolverCall> {
        self.calls.lock().clone()
    }

    pub fn icon_calls(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, ResolverCall::Icon { .. }))
            .count()
    }

    pub fn text_calls(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, ResolverCall::Text { .. }))
            .count()
    }
}

impl ReferenceResolver for StubResolver {
    fn resolve_icon(
        &self,
        _context: &HostContext,
        package: &str,
        uri: &str,
        _providers: &mut ProviderConnections,
    ) -> Result<Option<IconHandle>, ResolveError> {
        self.calls.lock().push(ResolverCall::Icon {
            package: package.to_string(),
            uri: uri.to_string(),
        });
        self.icon.clone()
    }

    fn resolve_text(
        &self,
        _context: &HostContext,
        uri: &str,
        _providers: &mut ProviderConnections,
        key: &str,
    ) -> Result<Option<String>, ResolveError> {
        self.calls.lock().push(ResolverCall::Text {
            uri: uri.to_string(),
            key: key.to_string(),
        });
        self.text.clone()
    }
}

/// Preference that counts setter calls
#[derive(Debug, Clone, Default)]
pub struct SpyPreference {
    pub inner: Preference,
    pub icon_writes: usize,
    pub summary_writes: usize,
}

impl SpyPreference {
    pub fn new(inner: Preference) -> Self {
        Self {
            inner,
            icon_writes: 0,
            summary_writes: 0,
        }
    }
}

impl DisplayTarget for SpyPreference {
    fn key(&self) -> Option<&str> {
        self.inner.key()
    }

    fn icon(&self) -> Option<&IconHandle> {
        self.inner.icon()
    }

    fn set_icon(&mut self, icon: IconHandle) {
        self.icon_writes += 1;
        self.inner.set_icon(icon);
    }

    fn summary(&self) -> Option<&str> {
        self.inner.summary()
    }

    fn set_summary(&mut self, summary: String) {
        self.summary_writes += 1;
        self.inner.set_summary(summary);
    }
}
