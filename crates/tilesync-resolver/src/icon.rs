//! Decoded icon handles

use std::fmt;

/// Drawable loaded from a package's resources
///
/// Equality covers the owning package, the resource id and the bytes, so a
/// handle re-resolved from the same resource compares equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IconHandle {
    package: String,
    resource_id: u32,
    data: Vec<u8>,
}

impl IconHandle {
    /// Create icon handle
    #[inline]
    #[must_use]
    pub fn new(package: impl Into<String>, resource_id: u32, data: impl Into<Vec<u8>>) -> Self {
        Self {
            package: package.into(),
            resource_id,
            data: data.into(),
        }
    }

    /// Owning package
    #[inline]
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Resource id within the package
    #[inline]
    #[must_use]
    pub fn resource_id(&self) -> u32 {
        self.resource_id
    }

    /// Encoded image bytes
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// An icon with no image data shows nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for IconHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconHandle")
            .field("package", &self.package)
            .field("resource_id", &self.resource_id)
            .field("len", &self.data.len())
            .finish()
    }
}
