//! tilesync Core - tile metadata reconciliation
//!
//! The engine that:
//! - Indexes a category's tiles by key once per pass
//! - Walks the host's display targets in order
//! - Skips targets with no live tile or nothing remote to resolve
//! - Resolves each distinct icon/summary reference at most once per pass
//! - Writes only fields that are still empty, and only when the value changes
//!
//! Resolution failures are logged and counted in the pass report; they never
//! abort a pass or reach the caller.
//!
//! # Example
//!
//! ```rust
//! use tilesync_core::{Preference, PreferenceScreen, ReconciliationEngine};
//! use tilesync_descriptor::{Descriptor, TileCategory};
//! use tilesync_resolver::memory::{InMemoryPackageManager, StaticRegistry};
//! use tilesync_resolver::{HostContext, ProviderResolver};
//!
//! let engine = ReconciliationEngine::new(ProviderResolver::new(
//!     StaticRegistry::new(),
//!     InMemoryPackageManager::new(),
//! ));
//!
//! let mut screen = PreferenceScreen::new();
//! screen.add_preference(Preference::new("key"));
//! let mut category = TileCategory::new();
//! category.add_tile(Descriptor::new("key"));
//!
//! let report = engine.update_preferences(&HostContext::default(), Some(&mut screen), Some(&category));
//! assert_eq!(report.resolver_calls, 0);
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

pub mod config;
pub mod detached;
pub mod engine;
pub mod error;
mod memo;
pub mod report;
pub mod screen;
pub mod target;

// Re-exports for convenience
pub use config::ReconcileConfig;
pub use detached::reconcile_detached;
pub use engine::ReconciliationEngine;
pub use error::{ConfigError, ReconcileError};
pub use report::{ReconcileReport, SkipCounts, SkipReason};
pub use screen::PreferenceScreen;
pub use target::{DisplayTarget, Preference};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running reconciliation passes
    pub use crate::{
        DisplayTarget, Preference, PreferenceScreen, ReconcileConfig, ReconcileReport,
        ReconciliationEngine,
    };
    pub use tilesync_descriptor::{Descriptor, Intent, Metadata, TileCategory};
    pub use tilesync_resolver::{HostContext, IconHandle, ReferenceResolver};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
