//! Pass reports

use serde::Serialize;

/// Why a target was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Target has no key
    Unkeyed,
    /// No tile carries the target's key
    NoDescriptor,
    /// Matching tile has no intent
    Inert,
    /// Matching tile names no icon or summary URI
    NoMetadata,
}

/// Skipped targets by reason
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    /// Targets without a key
    pub unkeyed: usize,
    /// Targets without a matching tile
    pub no_descriptor: usize,
    /// Targets matched by an inert tile
    pub inert: usize,
    /// Targets matched by a tile with nothing to resolve
    pub no_metadata: usize,
}

impl SkipCounts {
    /// Total skipped targets
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.unkeyed + self.no_descriptor + self.inert + self.no_metadata
    }
}

/// Outcome of one reconciliation pass
///
/// Informational only: a pass never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Targets visited
    pub visited: usize,
    /// Targets matched by a live tile with remote metadata
    pub matched: usize,
    /// Targets skipped, by reason
    pub skipped: SkipCounts,
    /// Fields left alone because they already held a value
    pub already_set: usize,
    /// Icons written
    pub icons_updated: usize,
    /// Summaries written
    pub summaries_updated: usize,
    /// Calls made into the resolver
    pub resolver_calls: usize,
    /// Field resolutions served from an earlier call in the same pass
    pub memo_hits: usize,
    /// Resolver calls that failed
    pub failures: usize,
    /// Pass stopped at the configured target cap
    pub truncated: bool,
}

impl ReconcileReport {
    /// Count a skipped target
    pub fn skip(&mut self, reason: SkipReason) {
        let slot = match reason {
            SkipReason::Unkeyed => &mut self.skipped.unkeyed,
            SkipReason::NoDescriptor => &mut self.skipped.no_descriptor,
            SkipReason::Inert => &mut self.skipped.inert,
            SkipReason::NoMetadata => &mut self.skipped.no_metadata,
        };
        *slot += 1;
    }

    /// Fields written in this pass
    #[inline]
    #[must_use]
    pub fn writes(&self) -> usize {
        self.icons_updated + self.summaries_updated
    }

    /// Whether the pass touched nothing at all
    #[inline]
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.resolver_calls == 0 && self.writes() == 0
    }
}
