//! tilesync Descriptors
//!
//! Declarative tile records published by third-party dashboard entries.
//!
//! # Overview
//!
//! The descriptor layer provides:
//! - **Descriptor**: a tile's key, launch intent and metadata bag
//! - **TileCategory**: the ordered collection a dashboard hands over
//! - **DescriptorIndex**: key lookup built once per reconciliation pass
//! - **ContentUri**: parsed `content://authority/method/...` references
//!
//! # Example
//!
//! ```rust
//! use tilesync_descriptor::{Descriptor, DescriptorIndex, Intent, Metadata, TileCategory};
//! use tilesync_descriptor::keys::META_DATA_PREFERENCE_SUMMARY_URI;
//!
//! let mut category = TileCategory::new();
//! category.add_tile(
//!     Descriptor::new("battery")
//!         .with_intent(Intent::for_package("com.example.battery"))
//!         .with_metadata(
//!             Metadata::new().with(META_DATA_PREFERENCE_SUMMARY_URI, "content://battery/text/level"),
//!         ),
//! );
//!
//! let index = DescriptorIndex::build(Some(&category));
//! assert!(index.get("battery").is_some());
//! ```

#![warn(missing_docs)]

pub mod category;
pub mod descriptor;
pub mod error;
pub mod index;
pub mod keys;
pub mod uri;

// Re-exports
pub use category::TileCategory;
pub use descriptor::{ComponentName, Descriptor, Intent, Metadata};
pub use error::DescriptorError;
pub use index::DescriptorIndex;
pub use uri::ContentUri;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for descriptor handling
    pub use crate::{
        ComponentName, ContentUri, Descriptor, DescriptorError, DescriptorIndex, Intent, Metadata,
        TileCategory,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
