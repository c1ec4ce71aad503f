//! Background passes
//!
//! Resolver calls may block on provider I/O. Hosts running on tokio hand the
//! whole pass to the blocking pool as one unit of work and get the target
//! tree back when it finishes. The pass itself stays sequential.

use crate::engine::ReconciliationEngine;
use crate::error::ReconcileError;
use crate::report::ReconcileReport;
use crate::screen::PreferenceScreen;
use crate::target::DisplayTarget;
use std::sync::Arc;
use tilesync_descriptor::TileCategory;
use tilesync_resolver::{HostContext, ReferenceResolver};

/// Run one pass on tokio's blocking pool
///
/// Ownership of the screen moves into the pass, so no other pass can touch
/// the same targets until it is handed back.
///
/// # Errors
/// Returns [`ReconcileError::Detached`] if the pass panicked or the runtime
/// is shutting down.
pub async fn reconcile_detached<R, T>(
    engine: Arc<ReconciliationEngine<R>>,
    context: HostContext,
    mut screen: PreferenceScreen<T>,
    category: TileCategory,
) -> Result<(PreferenceScreen<T>, ReconcileReport), ReconcileError>
where
    R: ReferenceResolver + 'static,
    T: DisplayTarget + Send + 'static,
{
    let handle = tokio::task::spawn_blocking(move || {
        let report = engine.update_preferences(&context, Some(&mut screen), Some(&category));
        (screen, report)
    });
    Ok(handle.await?)
}
