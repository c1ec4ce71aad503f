//! tilesync Resolver
//!
//! Turns a tile's remote references into concrete values.
//!
//! The reconciliation engine only ever talks to the [`ReferenceResolver`]
//! trait. [`ProviderResolver`] is the production implementation: it connects
//! to the content provider named by a URI's authority, calls the method named
//! by its first path segment, and for icons loads the returned resource id
//! through a [`PackageManager`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use tilesync_resolver::memory::{InMemoryPackageManager, StaticProvider, StaticRegistry};
//! use tilesync_resolver::{Bundle, HostContext, ProviderConnections, ProviderResolver, ReferenceResolver};
//!
//! let registry = StaticRegistry::new().with_provider(
//!     "battery",
//!     StaticProvider::new().with_method("text", Bundle::new().with_text("summary", "82%")),
//! );
//! let resolver = ProviderResolver::new(registry, InMemoryPackageManager::new());
//!
//! let mut providers = ProviderConnections::new();
//! let text = resolver
//!     .resolve_text(&HostContext::default(), "content://battery/text/level", &mut providers, "summary")
//!     .unwrap();
//! assert_eq!(text.as_deref(), Some("82%"));
//! ```

#![warn(missing_docs)]

pub mod bundle;
pub mod context;
pub mod error;
pub mod icon;
pub mod memory;
pub mod package;
pub mod provider;
pub mod provider_resolver;
pub mod resolver;

// Re-exports
pub use bundle::{Bundle, BundleValue};
pub use context::HostContext;
pub use error::ResolveError;
pub use icon::IconHandle;
pub use package::PackageManager;
pub use provider::{ContentProvider, ProviderConnections, ProviderRegistry};
pub use provider_resolver::ProviderResolver;
pub use resolver::ReferenceResolver;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for implementing or calling resolvers
    pub use crate::{
        Bundle, BundleValue, ContentProvider, HostContext, IconHandle, PackageManager,
        ProviderConnections, ProviderRegistry, ProviderResolver, ReferenceResolver, ResolveError,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
