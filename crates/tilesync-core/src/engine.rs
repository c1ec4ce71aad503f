//! Reconciliation engine
//!
//! One call to [`ReconciliationEngine::update_preferences`] is one pass:
//!
//! 1. Bail out with zero collaborator calls if either side is absent or empty
//! 2. Index the category's tiles by key
//! 3. For each target, in order: find its tile, require an intent and some
//!    remote metadata, then reconcile the icon and the summary independently
//! 4. A field that already shows something is never resolved or rewritten
//!
//! Provider connections and resolved values are shared across targets for
//! the duration of the pass only.

use crate::config::ReconcileConfig;
use crate::memo::ResolutionMemo;
use crate::report::{ReconcileReport, SkipReason};
use crate::screen::PreferenceScreen;
use crate::target::DisplayTarget;
use tilesync_descriptor::{Descriptor, DescriptorIndex, Intent, TileCategory};
use tilesync_resolver::{HostContext, IconHandle, ProviderConnections, ReferenceResolver};

/// Merges resolved tile metadata into display targets
#[derive(Debug)]
pub struct ReconciliationEngine<R> {
    resolver: R,
    config: ReconcileConfig,
}

/// State living for exactly one pass
#[derive(Default)]
struct Pass<'p> {
    providers: ProviderConnections,
    memo: ResolutionMemo<'p>,
    report: ReconcileReport,
}

impl<R: ReferenceResolver> ReconciliationEngine<R> {
    /// Create engine with default configuration
    #[inline]
    #[must_use]
    pub fn new(resolver: R) -> Self {
        Self::with_config(resolver, ReconcileConfig::default())
    }

    /// Create engine with explicit configuration
    #[inline]
    #[must_use]
    pub fn with_config(resolver: R, config: ReconcileConfig) -> Self {
        Self { resolver, config }
    }

    /// Injected resolver
    #[inline]
    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Run one pass over a target tree
    ///
    /// Absent or empty inputs are a silent no-op. The returned report is
    /// informational; per-field failures are absorbed.
    pub fn update_preferences<T: DisplayTarget>(
        &self,
        context: &HostContext,
        screen: Option<&mut PreferenceScreen<T>>,
        category: Option<&TileCategory>,
    ) -> ReconcileReport {
        let Some(screen) = screen.filter(|screen| !screen.is_empty()) else {
            tracing::debug!("no display targets; nothing to reconcile");
            return ReconcileReport::default();
        };
        let Some(category) = category.filter(|category| !category.is_empty()) else {
            tracing::debug!("no tiles; nothing to reconcile");
            return ReconcileReport::default();
        };
        self.update_targets(context, screen.iter_mut(), category)
    }

    /// Run one pass over any ordered sequence of targets
    pub fn update_targets<'t, T, I>(
        &self,
        context: &HostContext,
        targets: I,
        category: &TileCategory,
    ) -> ReconcileReport
    where
        T: DisplayTarget + 't,
        I: IntoIterator<Item = &'t mut T>,
    {
        let span = tracing::info_span!("reconcile", host = %context.package_name);
        let _enter = span.enter();

        let index = DescriptorIndex::build(Some(category));
        if index.is_empty() {
            tracing::debug!(
                keyless = index.keyless_count(),
                "no keyed tiles; nothing to reconcile"
            );
            return ReconcileReport::default();
        }

        let mut pass = Pass::default();
        for target in targets {
            if self
                .config
                .max_targets
                .is_some_and(|max| pass.report.visited >= max)
            {
                pass.report.truncated = true;
                tracing::warn!(visited = pass.report.visited, "target cap reached; pass truncated");
                break;
            }
            pass.report.visited += 1;
            self.reconcile_target(context, target, &index, &mut pass);
        }

        let report = pass.report;
        tracing::info!(
            visited = report.visited,
            matched = report.matched,
            icons = report.icons_updated,
            summaries = report.summaries_updated,
            calls = report.resolver_calls,
            failures = report.failures,
            "reconciliation pass complete"
        );
        report
    }

    fn reconcile_target<'p, T: DisplayTarget>(
        &'p self,
        context: &HostContext,
        target: &mut T,
        index: &DescriptorIndex<'p>,
        pass: &mut Pass<'p>,
    ) {
        let Some(key) = target.key() else {
            pass.report.skip(SkipReason::Unkeyed);
            return;
        };
        let Some(tile) = index.get(key) else {
            pass.report.skip(SkipReason::NoDescriptor);
            return;
        };
        let Some(intent) = tile.intent.as_ref() else {
            tracing::debug!(key = tile.key(), "tile has no intent; not live");
            pass.report.skip(SkipReason::Inert);
            return;
        };
        if !tile.has_remote_metadata() {
            pass.report.skip(SkipReason::NoMetadata);
            return;
        }
        pass.report.matched += 1;

        if self.config.resolve_icons {
            self.reconcile_icon(context, target, tile, intent, pass);
        }
        if self.config.resolve_summaries {
            self.reconcile_summary(context, target, tile, pass);
        }
    }

    fn reconcile_icon<'p, T: DisplayTarget>(
        &self,
        context: &HostContext,
        target: &mut T,
        tile: &'p Descriptor,
        intent: &'p Intent,
        pass: &mut Pass<'p>,
    ) {
        let Some(uri) = tile.icon_uri() else {
            return;
        };
        if target.has_icon() {
            pass.report.already_set += 1;
            return;
        }
        let Some(package) = intent.package_name() else {
            tracing::debug!(key = tile.key(), uri, "intent names no package; icon unresolvable");
            return;
        };

        let icon = if let Some(hit) = pass.memo.icon(package, uri) {
            pass.report.memo_hits += 1;
            hit.clone()
        } else {
            let icon = self.fetch_icon(context, tile, package, uri, pass);
            pass.memo.remember_icon(package, uri, icon.clone());
            icon
        };

        if let Some(icon) = icon {
            if target.icon() != Some(&icon) {
                target.set_icon(icon);
                pass.report.icons_updated += 1;
            }
        }
    }

    fn fetch_icon(
        &self,
        context: &HostContext,
        tile: &Descriptor,
        package: &str,
        uri: &str,
        pass: &mut Pass<'_>,
    ) -> Option<IconHandle> {
        pass.report.resolver_calls += 1;
        match self
            .resolver
            .resolve_icon(context, package, uri, &mut pass.providers)
        {
            Ok(Some(icon)) if !icon.is_empty() => Some(icon),
            Ok(_) => {
                tracing::debug!(key = tile.key(), uri, "provider returned no icon");
                None
            }
            Err(error) => {
                pass.report.failures += 1;
                tracing::warn!(
                    key = tile.key(),
                    uri,
                    %error,
                    transient = error.is_transient(),
                    "icon resolution failed"
                );
                None
            }
        }
    }

    fn reconcile_summary<'p, T: DisplayTarget>(
        &'p self,
        context: &HostContext,
        target: &mut T,
        tile: &'p Descriptor,
        pass: &mut Pass<'p>,
    ) {
        let Some(uri) = tile.summary_uri() else {
            return;
        };
        if target.has_summary() {
            pass.report.already_set += 1;
            return;
        }
        let bundle_key = self.config.summary_bundle_key.as_str();

        let summary = if let Some(hit) = pass.memo.text(uri, bundle_key) {
            pass.report.memo_hits += 1;
            hit.clone()
        } else {
            let summary = self.fetch_summary(context, tile, uri, bundle_key, pass);
            pass.memo.remember_text(uri, bundle_key, summary.clone());
            summary
        };

        if let Some(summary) = summary {
            if target.summary() != Some(summary.as_str()) {
                target.set_summary(summary);
                pass.report.summaries_updated += 1;
            }
        }
    }

    fn fetch_summary(
        &self,
        context: &HostContext,
        tile: &Descriptor,
        uri: &str,
        bundle_key: &str,
        pass: &mut Pass<'_>,
    ) -> Option<String> {
        pass.report.resolver_calls += 1;
        match self
            .resolver
            .resolve_text(context, uri, &mut pass.providers, bundle_key)
        {
            Ok(Some(text)) if !text.is_empty() => Some(text),
            Ok(_) => {
                tracing::debug!(key = tile.key(), uri, "provider returned no summary");
                None
            }
            Err(error) => {
                pass.report.failures += 1;
                tracing::warn!(
                    key = tile.key(),
                    uri,
                    %error,
                    transient = error.is_transient(),
                    "summary resolution failed"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Preference;
    use mockall::mock;
    use tilesync_descriptor::keys::{META_DATA_PREFERENCE_ICON_URI, META_DATA_PREFERENCE_SUMMARY_URI};
    use tilesync_descriptor::Metadata;
    use tilesync_resolver::ResolveError;

    mock! {
        Resolver {}
        impl ReferenceResolver for Resolver {
            fn resolve_icon(
                &self,
                context: &HostContext,
                package: &str,
                uri: &str,
                providers: &mut ProviderConnections,
            ) -> Result<Option<IconHandle>, ResolveError>;

            fn resolve_text(
                &self,
                context: &HostContext,
                uri: &str,
                providers: &mut ProviderConnections,
                key: &str,
            ) -> Result<Option<String>, ResolveError>;
        }
    }

    fn live_tile(key: &str, package: &str) -> Descriptor {
        Descriptor::new(key)
            .with_intent(Intent::for_package(package))
            .with_metadata(
                Metadata::new()
                    .with(META_DATA_PREFERENCE_ICON_URI, format!("content://{package}/icon/i"))
                    .with(META_DATA_PREFERENCE_SUMMARY_URI, format!("content://{package}/text/s")),
            )
    }

    #[test]
    fn icon_failure_does_not_block_summary() {
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve_icon()
            .times(1)
            .returning(|_, _, _, _| Err(ResolveError::Decode("corrupt".to_string())));
        resolver
            .expect_resolve_text()
            .times(1)
            .returning(|_, _, _, _| Ok(Some("text".to_string())));

        let engine = ReconciliationEngine::new(resolver);
        let mut screen: PreferenceScreen<Preference> = [Preference::new("key")].into_iter().collect();
        let category: TileCategory = [live_tile("key", "p")].into_iter().collect();

        let report = engine.update_preferences(&HostContext::default(), Some(&mut screen), Some(&category));

        let pref = screen.find_preference("key").unwrap();
        assert!(pref.icon.is_none());
        assert_eq!(pref.summary.as_deref(), Some("text"));
        assert_eq!(report.failures, 1);
        assert_eq!(report.summaries_updated, 1);
    }

    #[test]
    fn shared_reference_resolved_once_per_pass() {
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve_icon()
            .times(1)
            .returning(|_, package, _, _| Ok(Some(IconHandle::new(package, 1, vec![1]))));
        resolver
            .expect_resolve_text()
            .times(1)
            .returning(|_, _, _, _| Ok(None));

        let engine = ReconciliationEngine::new(resolver);
        let mut screen: PreferenceScreen<Preference> =
            [Preference::new("a"), Preference::new("b")].into_iter().collect();
        // Two tiles, same package, same URIs
        let category: TileCategory = [live_tile("a", "p"), live_tile("b", "p")].into_iter().collect();

        let report = engine.update_preferences(&HostContext::default(), Some(&mut screen), Some(&category));

        assert_eq!(report.resolver_calls, 2);
        assert_eq!(report.memo_hits, 2);
        assert_eq!(report.icons_updated, 2);
        assert_eq!(report.summaries_updated, 0);
    }

    #[test]
    fn disabled_fields_are_not_resolved() {
        let mut resolver = MockResolver::new();
        resolver.expect_resolve_icon().never();
        resolver
            .expect_resolve_text()
            .times(1)
            .returning(|_, _, _, _| Ok(Some("text".to_string())));

        let engine = ReconciliationEngine::with_config(resolver, ReconcileConfig::new().with_icons(false));
        let mut screen: PreferenceScreen<Preference> = [Preference::new("key")].into_iter().collect();
        let category: TileCategory = [live_tile("key", "p")].into_iter().collect();

        let report = engine.update_preferences(&HostContext::default(), Some(&mut screen), Some(&category));
        assert_eq!(report.resolver_calls, 1);
    }

    #[test]
    fn target_cap_truncates_pass() {
        let mut resolver = MockResolver::new();
        resolver.expect_resolve_icon().never();
        resolver.expect_resolve_text().never();

        let engine = ReconciliationEngine::with_config(resolver, ReconcileConfig::new().with_max_targets(1));
        let mut screen: PreferenceScreen<Preference> =
            [Preference::new("unmatched"), Preference::new("key")].into_iter().collect();
        let category: TileCategory = [live_tile("key", "p")].into_iter().collect();

        let report = engine.update_preferences(&HostContext::default(), Some(&mut screen), Some(&category));
        assert!(report.truncated);
        assert_eq!(report.visited, 1);
        assert_eq!(report.skipped.no_descriptor, 1);
    }

    #[test]
    fn intent_without_package_still_resolves_summary() {
        let mut resolver = MockResolver::new();
        resolver.expect_resolve_icon().never();
        resolver
            .expect_resolve_text()
            .times(1)
            .returning(|_, _, _, _| Ok(Some("text".to_string())));

        let mut tile = live_tile("key", "p");
        tile.intent = Some(Intent::new().with_action("VIEW"));

        let engine = ReconciliationEngine::new(resolver);
        let mut screen: PreferenceScreen<Preference> = [Preference::new("key")].into_iter().collect();
        let category: TileCategory = [tile].into_iter().collect();

        let report = engine.update_preferences(&HostContext::default(), Some(&mut screen), Some(&category));
        assert_eq!(report.summaries_updated, 1);
        assert_eq!(report.icons_updated, 0);
    }
}
