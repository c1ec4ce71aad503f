//! Content providers and per-pass provider connections

use crate::bundle::Bundle;
use crate::error::ResolveError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tilesync_descriptor::ContentUri;

/// Remote data source addressed by a URI authority
///
/// Calls may block on I/O.
#[cfg_attr(test, mockall::automock)]
pub trait ContentProvider: Send + Sync {
    /// Invoke `method` for `uri` and return the provider's response
    ///
    /// # Errors
    /// Returns error if the provider cannot answer.
    fn call(&self, method: &str, uri: &ContentUri) -> Result<Bundle, ResolveError>;
}

/// Connects to providers by authority
#[cfg_attr(test, mockall::automock)]
pub trait ProviderRegistry: Send + Sync {
    /// Acquire a connection to the provider published under `authority`
    ///
    /// # Errors
    /// Returns [`ResolveError::ProviderUnavailable`] if nothing is published there.
    fn acquire(&self, authority: &str) -> Result<Arc<dyn ContentProvider>, ResolveError>;
}

impl<R: ProviderRegistry + ?Sized> ProviderRegistry for Arc<R> {
    fn acquire(&self, authority: &str) -> Result<Arc<dyn ContentProvider>, ResolveError> {
        (**self).acquire(authority)
    }
}

/// Provider connections opened during one reconciliation pass
///
/// The engine creates an empty map per pass and threads it through every
/// resolver call, so each authority is acquired at most once per pass.
#[derive(Default)]
pub struct ProviderConnections {
    by_authority: HashMap<String, Arc<dyn ContentProvider>>,
}

impl ProviderConnections {
    /// Empty connection map
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connection for `authority`, acquiring it through `registry` on first use
    ///
    /// Failed acquisitions are not cached.
    ///
    /// # Errors
    /// Propagates the registry's acquisition error.
    pub fn get_or_acquire<R>(
        &mut self,
        authority: &str,
        registry: &R,
    ) -> Result<Arc<dyn ContentProvider>, ResolveError>
    where
        R: ProviderRegistry + ?Sized,
    {
        if let Some(provider) = self.by_authority.get(authority) {
            return Ok(Arc::clone(provider));
        }
        let provider = registry.acquire(authority)?;
        tracing::debug!(authority, "acquired content provider");
        self.by_authority
            .insert(authority.to_string(), Arc::clone(&provider));
        Ok(provider)
    }

    /// Whether `authority` is already connected
    #[inline]
    #[must_use]
    pub fn is_connected(&self, authority: &str) -> bool {
        self.by_authority.contains_key(authority)
    }

    /// Number of open connections
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_authority.len()
    }

    /// Whether no connection has been opened
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_authority.is_empty()
    }
}

impl fmt::Debug for ProviderConnections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConnections")
            .field("authorities", &self.by_authority.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connections_acquire_once_per_authority() {
        let mut registry = MockProviderRegistry::new();
        registry
            .expect_acquire()
            .withf(|authority| authority == "package")
            .times(1)
            .returning(|_| Ok(Arc::new(MockContentProvider::new()) as Arc<dyn ContentProvider>));

        let mut connections = ProviderConnections::new();
        connections.get_or_acquire("package", &registry).unwrap();
        connections.get_or_acquire("package", &registry).unwrap();

        assert!(connections.is_connected("package"));
        assert_eq!(connections.len(), 1);
    }

    #[test]
    fn connections_do_not_cache_failures() {
        let mut registry = MockProviderRegistry::new();
        registry.expect_acquire().times(2).returning(|authority| {
            Err(ResolveError::ProviderUnavailable {
                authority: authority.to_string(),
            })
        });

        let mut connections = ProviderConnections::new();
        assert!(connections.get_or_acquire("gone", &registry).is_err());
        assert!(connections.get_or_acquire("gone", &registry).is_err());
        assert!(connections.is_empty());
    }
}
