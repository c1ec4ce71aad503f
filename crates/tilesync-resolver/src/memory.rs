//! In-memory collaborators
//!
//! Fixed providers and package resources for hosts that serve tile metadata
//! from fixtures, and for tests.

use crate::bundle::Bundle;
use crate::error::ResolveError;
use crate::icon::IconHandle;
use crate::package::PackageManager;
use crate::provider::{ContentProvider, ProviderRegistry};
use parking_lot::Mutex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tilesync_descriptor::ContentUri;

/// Provider answering each method with a fixed bundle
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StaticProvider {
    methods: HashMap<String, Bundle>,
}

impl StaticProvider {
    /// Provider with no methods
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With method response
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>, response: Bundle) -> Self {
        self.methods.insert(method.into(), response);
        self
    }
}

impl ContentProvider for StaticProvider {
    fn call(&self, method: &str, uri: &ContentUri) -> Result<Bundle, ResolveError> {
        self.methods
            .get(method)
            .cloned()
            .ok_or_else(|| ResolveError::provider_call(uri.authority(), method, "unknown method"))
    }
}

/// Registry of [`StaticProvider`]s keyed by authority
///
/// Counts acquisitions so callers can check connection reuse.
#[derive(Debug, Default)]
pub struct StaticRegistry {
    providers: HashMap<String, Arc<StaticProvider>>,
    acquisitions: Mutex<HashMap<String, usize>>,
}

impl StaticRegistry {
    /// Empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With provider published under `authority`
    #[must_use]
    pub fn with_provider(mut self, authority: impl Into<String>, provider: StaticProvider) -> Self {
        self.providers.insert(authority.into(), Arc::new(provider));
        self
    }

    /// Times `authority` has been acquired
    #[must_use]
    pub fn acquisitions(&self, authority: &str) -> usize {
        self.acquisitions.lock().get(authority).copied().unwrap_or(0)
    }
}

impl FromIterator<(String, StaticProvider)> for StaticRegistry {
    fn from_iter<I: IntoIterator<Item = (String, StaticProvider)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |registry, (authority, provider)| {
                registry.with_provider(authority, provider)
            })
    }
}

impl ProviderRegistry for StaticRegistry {
    fn acquire(&self, authority: &str) -> Result<Arc<dyn ContentProvider>, ResolveError> {
        *self
            .acquisitions
            .lock()
            .entry(authority.to_string())
            .or_default() += 1;
        self.providers
            .get(authority)
            .map(|provider| Arc::clone(provider) as Arc<dyn ContentProvider>)
            .ok_or_else(|| ResolveError::ProviderUnavailable {
                authority: authority.to_string(),
            })
    }
}

/// Package resources held in memory
///
/// Themes are ignored.
#[derive(Debug, Default)]
pub struct InMemoryPackageManager {
    packages: HashMap<String, HashMap<u32, Vec<u8>>>,
    loads: Mutex<usize>,
}

impl InMemoryPackageManager {
    /// No packages installed
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `resource_id` with image `data` into `package`
    #[must_use]
    pub fn with_drawable(
        mut self,
        package: impl Into<String>,
        resource_id: u32,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        self.packages
            .entry(package.into())
            .or_default()
            .insert(resource_id, data.into());
        self
    }

    /// Number of drawable loads served or refused
    #[must_use]
    pub fn loads(&self) -> usize {
        *self.loads.lock()
    }
}

impl PackageManager for InMemoryPackageManager {
    fn drawable<'a>(
        &self,
        package: &str,
        resource_id: u32,
        _theme: Option<&'a str>,
    ) -> Result<IconHandle, ResolveError> {
        *self.loads.lock() += 1;
        let resources = self
            .packages
            .get(package)
            .ok_or_else(|| ResolveError::PackageNotFound {
                package: package.to_string(),
            })?;
        let data = resources
            .get(&resource_id)
            .ok_or_else(|| ResolveError::ResourceNotFound {
                package: package.to_string(),
                resource_id,
            })?;
        if data.is_empty() {
            return Err(ResolveError::Decode(format!(
                "resource {resource_id:#x} in {package} is empty"
            )));
        }
        Ok(IconHandle::new(package, resource_id, data.clone()))
    }
}
