//! Provider-backed reference resolution
//!
//! Icon resolution is two-step: the provider names a resource id (and
//! optionally the package owning it), then the [`PackageManager`] loads that
//! drawable. Text resolution reads one entry of the provider's response.

use crate::bundle::Bundle;
use crate::context::HostContext;
use crate::error::ResolveError;
use crate::icon::IconHandle;
use crate::package::PackageManager;
use crate::provider::{ProviderConnections, ProviderRegistry};
use crate::resolver::ReferenceResolver;
use tilesync_descriptor::keys::{META_DATA_PREFERENCE_ICON, META_DATA_PREFERENCE_ICON_PACKAGE};
use tilesync_descriptor::ContentUri;

/// [`ReferenceResolver`] over a provider registry and a package manager
#[derive(Debug)]
pub struct ProviderResolver<R, P> {
    registry: R,
    packages: P,
}

impl<R, P> ProviderResolver<R, P>
where
    R: ProviderRegistry,
    P: PackageManager,
{
    /// Create resolver
    #[inline]
    #[must_use]
    pub fn new(registry: R, packages: P) -> Self {
        Self { registry, packages }
    }

    /// Provider registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Package manager
    #[inline]
    #[must_use]
    pub fn packages(&self) -> &P {
        &self.packages
    }

    fn query(
        &self,
        raw_uri: &str,
        providers: &mut ProviderConnections,
    ) -> Result<Bundle, ResolveError> {
        let uri = ContentUri::parse(raw_uri)?;
        let provider = providers.get_or_acquire(uri.authority(), &self.registry)?;
        provider.call(uri.method(), &uri)
    }
}

impl<R, P> ReferenceResolver for ProviderResolver<R, P>
where
    R: ProviderRegistry,
    P: PackageManager,
{
    fn resolve_icon(
        &self,
        context: &HostContext,
        package: &str,
        uri: &str,
        providers: &mut ProviderConnections,
    ) -> Result<Option<IconHandle>, ResolveError> {
        let bundle = self.query(uri, providers)?;

        let resource_id = match bundle.get_int(META_DATA_PREFERENCE_ICON) {
            Some(id) if id != 0 => u32::try_from(id)
                .map_err(|_| ResolveError::Decode(format!("icon resource id {id} out of range")))?,
            _ => return Ok(None),
        };

        // Only the tile's own package or the host may supply the drawable
        let owner = bundle
            .get_text(META_DATA_PREFERENCE_ICON_PACKAGE)
            .filter(|owner| !owner.is_empty())
            .unwrap_or(package);
        if owner != package && owner != context.package_name {
            tracing::warn!(uri, owner, package, "icon owned by a foreign package; ignoring");
            return Ok(None);
        }

        let icon = self.packages.drawable(owner, resource_id, context.theme())?;
        Ok(Some(icon))
    }

    fn resolve_text(
        &self,
        _context: &HostContext,
        uri: &str,
        providers: &mut ProviderConnections,
        key: &str,
    ) -> Result<Option<String>, ResolveError> {
        let bundle = self.query(uri, providers)?;
        Ok(bundle.get_text(key).map(str::to_string))
    }
}
