//! Package resource access

use crate::error::ResolveError;
use crate::icon::IconHandle;
use std::sync::Arc;

/// Loads drawables from installed packages' resources
///
/// This is the expensive layer of icon resolution; a reconciliation pass
/// that has nothing live to resolve never touches it.
#[cfg_attr(test, mockall::automock)]
pub trait PackageManager: Send + Sync {
    /// Load drawable `resource_id` from `package`, themed with `theme`
    ///
    /// # Errors
    /// Returns error if the package or resource is missing or cannot be decoded.
    fn drawable<'a>(
        &self,
        package: &str,
        resource_id: u32,
        theme: Option<&'a str>,
    ) -> Result<IconHandle, ResolveError>;
}

impl<P: PackageManager + ?Sized> PackageManager for Arc<P> {
    fn drawable<'a>(
        &self,
        package: &str,
        resource_id: u32,
        theme: Option<&'a str>,
    ) -> Result<IconHandle, ResolveError> {
        (**self).drawable(package, resource_id, theme)
    }
}
