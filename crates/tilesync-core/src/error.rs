//! Error types for tilesync Core
//!
//! Per-field resolution failures are not errors at this level; they are
//! absorbed by the engine. What remains is configuration loading and the
//! hand-off to a background pass.

use std::path::PathBuf;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config is not valid TOML for [`ReconcileConfig`](crate::ReconcileConfig)
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but holds unusable values
    #[error("configuration error: {0}")]
    Invalid(String),
}

/// Reconciliation errors surfaced to the caller
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// Background pass panicked or was aborted
    #[error("background reconciliation failed: {0}")]
    Detached(#[from] tokio::task::JoinError),
}
