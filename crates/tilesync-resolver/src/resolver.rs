//! The resolver seam
//!
//! [`ReferenceResolver`] is the only collaborator the reconciliation engine
//! calls. Tests substitute stubs; production wires a
//! [`ProviderResolver`](crate::ProviderResolver).

use crate::context::HostContext;
use crate::error::ResolveError;
use crate::icon::IconHandle;
use crate::provider::ProviderConnections;
use std::sync::Arc;

/// Resolves remote references into icons and text
///
/// `Ok(None)` means the provider answered but had nothing to show. Either
/// that or an error leaves the target field untouched.
#[cfg_attr(test, mockall::automock)]
pub trait ReferenceResolver: Send + Sync {
    /// Resolve the icon behind `uri` for a tile launching into `package`
    ///
    /// # Errors
    /// Returns error on malformed URI, unreachable provider, or load failure.
    fn resolve_icon(
        &self,
        context: &HostContext,
        package: &str,
        uri: &str,
        providers: &mut ProviderConnections,
    ) -> Result<Option<IconHandle>, ResolveError>;

    /// Resolve the text stored under `key` in the response for `uri`
    ///
    /// # Errors
    /// Returns error on malformed URI or unreachable provider.
    fn resolve_text(
        &self,
        context: &HostContext,
        uri: &str,
        providers: &mut ProviderConnections,
        key: &str,
    ) -> Result<Option<String>, ResolveError>;
}

impl<R: ReferenceResolver + ?Sized> ReferenceResolver for Arc<R> {
    fn resolve_icon(
        &self,
        context: &HostContext,
        package: &str,
        uri: &str,
        providers: &mut ProviderConnections,
    ) -> Result<Option<IconHandle>, ResolveError> {
        (**self).resolve_icon(context, package, uri, providers)
    }

    fn resolve_text(
        &self,
        context: &HostContext,
        uri: &str,
        providers: &mut ProviderConnections,
        key: &str,
    ) -> Result<Option<String>, ResolveError> {
        (**self).resolve_text(context, uri, providers, key)
    }
}
