//! Error types for reference resolution
//!
//! None of these reach the caller of a reconciliation pass; the engine logs
//! them and leaves the affected field unchanged.

use tilesync_descriptor::DescriptorError;

/// Resolution failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Reference could not be parsed
    #[error("invalid reference: {0}")]
    InvalidReference(#[from] DescriptorError),

    /// No provider is published under the authority
    #[error("no provider for authority {authority:?}")]
    ProviderUnavailable {
        /// Requested authority
        authority: String,
    },

    /// Provider call failed
    #[error("provider {authority:?} failed on {method:?}: {reason}")]
    ProviderCall {
        /// Provider authority
        authority: String,
        /// Called method
        method: String,
        /// Failure description
        reason: String,
    },

    /// Package is not installed
    #[error("package not found: {package}")]
    PackageNotFound {
        /// Package name
        package: String,
    },

    /// Package has no such resource
    #[error("resource {resource_id:#x} not found in {package}")]
    ResourceNotFound {
        /// Package name
        package: String,
        /// Resource id
        resource_id: u32,
    },

    /// Resource bytes could not be decoded
    #[error("decode failed: {0}")]
    Decode(String),
}

impl ResolveError {
    /// Check if a later pass could plausibly succeed
    #[inline]
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ProviderUnavailable { .. } | Self::ProviderCall { .. }
        )
    }

    /// Provider call failure
    #[inline]
    pub fn provider_call(
        authority: impl Into<String>,
        method: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ProviderCall {
            authority: authority.into(),
            method: method.into(),
            reason: reason.into(),
        }
    }
}
