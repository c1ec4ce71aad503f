//! Well-known metadata bag keys
//!
//! These strings are the contract between tile producers and the
//! reconciliation engine. They must never change.

/// Metadata entry holding the content URI that serves a tile's icon
pub const META_DATA_PREFERENCE_ICON_URI: &str = "com.android.settings.icon_uri";

/// Metadata entry holding the content URI that serves a tile's summary
pub const META_DATA_PREFERENCE_SUMMARY_URI: &str = "com.android.settings.summary_uri";

/// Bundle entry carrying the summary text returned by a provider
pub const META_DATA_PREFERENCE_SUMMARY: &str = "com.android.settings.summary";

/// Bundle entry carrying the icon resource id returned by a provider
pub const META_DATA_PREFERENCE_ICON: &str = "com.android.settings.icon";

/// Bundle entry naming the package that owns the returned icon resource
pub const META_DATA_PREFERENCE_ICON_PACKAGE: &str = "com.android.settings.icon_package";
