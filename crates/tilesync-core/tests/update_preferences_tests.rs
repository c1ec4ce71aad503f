use mockall::mock;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tilesync_core::prelude::*;
use tilesync_core::SkipReason;
use tilesync_descriptor::keys::{META_DATA_PREFERENCE_ICON, META_DATA_PREFERENCE_SUMMARY};
use tilesync_resolver::memory::{StaticProvider, StaticRegistry};
use tilesync_resolver::{Bundle, PackageManager, ProviderResolver, ResolveError};
use tilesync_test_utils::*;

mock! {
    Packages {}
    impl PackageManager for Packages {
        fn drawable<'a>(
            &self,
            package: &str,
            resource_id: u32,
            theme: Option<&'a str>,
        ) -> Result<IconHandle, ResolveError>;
    }
}

/// Provider-backed resolver whose package manager panics on any call
fn untouchable_resolver() -> ProviderResolver<StaticRegistry, MockPackages> {
    ProviderResolver::new(StaticRegistry::new(), MockPackages::new())
}

fn registry_for_package() -> StaticRegistry {
    StaticRegistry::new().with_provider(
        MOCK_PACKAGE,
        StaticProvider::new()
            .with_method(
                "icon",
                Bundle::new().with_int(META_DATA_PREFERENCE_ICON, i64::from(MOCK_ICON_ID)),
            )
            .with_method(
                "text",
                Bundle::new().with_text(META_DATA_PREFERENCE_SUMMARY, MOCK_SUMMARY),
            ),
    )
}

#[test]
fn update_tiles_data_should_not_process_empty_screen_or_tiles() {
    let engine = ReconciliationEngine::new(untouchable_resolver());
    let context = host_context();

    let report = engine.update_preferences::<Preference>(&context, None, None);
    assert!(report.is_noop());

    let mut empty_screen = PreferenceScreen::<Preference>::new();
    let report = engine.update_preferences(&context, Some(&mut empty_screen), None);
    assert!(report.is_noop());

    let report = engine.update_preferences(&context, Some(&mut empty_screen), Some(&live_category()));
    assert!(report.is_noop());

    let mut screen = preference_screen();
    let report = engine.update_preferences(&context, Some(&mut screen), Some(&TileCategory::new()));
    assert!(report.is_noop());
    assert_eq!(report.visited, 0);
}

#[test]
fn update_tiles_data_should_not_process_non_matching_preference() {
    let engine = ReconciliationEngine::new(untouchable_resolver());
    let mut category = TileCategory::new();
    category.add_tile(Descriptor::keyless());

    let mut screen = preference_screen();
    let report = engine.update_preferences(&host_context(), Some(&mut screen), Some(&category));

    assert!(report.is_noop());
    assert_eq!(engine.resolver().registry().acquisitions(MOCK_PACKAGE), 0);
}

#[test]
fn update_tiles_data_should_not_process_matching_preference_with_no_data() {
    let engine = ReconciliationEngine::new(untouchable_resolver());
    let mut screen = preference_screen();

    let report = engine.update_preferences(&host_context(), Some(&mut screen), Some(&dashboard_category()));

    assert!(report.is_noop());
    assert_eq!(report.skipped.inert, 1);
}

#[test]
fn inert_descriptor_with_metadata_is_never_resolved() {
    let resolver = Arc::new(StubResolver::new());
    let engine = ReconciliationEngine::new(Arc::clone(&resolver));

    let mut category = live_category();
    category.tile_mut(0).unwrap().intent = None;
    let mut screen = preference_screen();

    let report = engine.update_preferences(&host_context(), Some(&mut screen), Some(&category));

    assert!(resolver.calls().is_empty());
    assert_eq!(report.skipped.inert, 1);
    assert!(screen.find_preference(MOCK_KEY).unwrap().summary.is_none());
}

#[test]
fn live_descriptor_without_remote_metadata_is_skipped() {
    let resolver = Arc::new(StubResolver::new());
    let engine = ReconciliationEngine::new(Arc::clone(&resolver));

    let mut category = live_category();
    category.tile_mut(0).unwrap().metadata = Some(Metadata::new().with("unrelated", "value"));
    let mut screen = preference_screen();

    let report = engine.update_preferences(&host_context(), Some(&mut screen), Some(&category));

    assert!(resolver.calls().is_empty());
    assert_eq!(report.skipped.no_metadata, 1);
}

#[test]
fn target_without_matching_tile_stays_unset() {
    let resolver = Arc::new(StubResolver::new());
    let engine = ReconciliationEngine::new(Arc::clone(&resolver));

    let mut category = live_category();
    category.tile_mut(0).unwrap().key = Some("other".to_string());
    let mut screen = preference_screen();

    let report = engine.update_preferences(&host_context(), Some(&mut screen), Some(&category));

    let pref = screen.find_preference(MOCK_KEY).unwrap();
    assert!(pref.icon.is_none());
    assert!(pref.summary.is_none());
    assert!(resolver.calls().is_empty());
    assert_eq!(report.skipped.no_descriptor, 1);
}

#[test]
fn update_tiles_data_should_update_matching_preference() {
    let resolver = Arc::new(StubResolver::new());
    let engine = ReconciliationEngine::new(Arc::clone(&resolver));
    let mut screen = preference_screen();

    let report = engine.update_preferences(&host_context(), Some(&mut screen), Some(&live_category()));

    let pref = screen.find_preference(MOCK_KEY).unwrap();
    assert_eq!(pref.icon, Some(mock_icon()));
    assert_eq!(pref.summary.as_deref(), Some(MOCK_SUMMARY));
    assert_eq!(resolver.icon_calls(), 1);
    assert_eq!(resolver.text_calls(), 1);
    assert_eq!(
        resolver.calls(),
        vec![
            ResolverCall::Icon {
                package: MOCK_PACKAGE.to_string(),
                uri: URI_GET_ICON.to_string(),
            },
            ResolverCall::Text {
                uri: URI_GET_SUMMARY.to_string(),
                key: META_DATA_PREFERENCE_SUMMARY.to_string(),
            },
        ]
    );
    assert_eq!(report.matched, 1);
    assert_eq!(report.writes(), 2);
}

#[test]
fn update_tiles_data_should_not_update_already_updated_preference() {
    let resolver = Arc::new(StubResolver::new());
    let engine = ReconciliationEngine::new(Arc::clone(&resolver));

    let mut screen = PreferenceScreen::new();
    screen.add_preference(SpyPreference::new(
        Preference::new(MOCK_KEY)
            .with_icon(mock_icon())
            .with_summary(MOCK_SUMMARY),
    ));

    let report = engine.update_preferences(&host_context(), Some(&mut screen), Some(&live_category()));

    let spy = screen.find_preference(MOCK_KEY).unwrap();
    assert_eq!(spy.icon_writes, 0);
    assert_eq!(spy.summary_writes, 0);
    assert_eq!(spy.inner.icon, Some(mock_icon()));
    assert_eq!(spy.inner.summary.as_deref(), Some(MOCK_SUMMARY));
    assert!(resolver.calls().is_empty());
    assert_eq!(report.already_set, 2);
}

#[test]
fn second_pass_makes_no_further_calls() {
    let resolver = Arc::new(StubResolver::new());
    let engine = ReconciliationEngine::new(Arc::clone(&resolver));
    let category = live_category();
    let mut screen = preference_screen();

    let first = engine.update_preferences(&host_context(), Some(&mut screen), Some(&category));
    let after_first = screen.find_preference(MOCK_KEY).cloned();
    let second = engine.update_preferences(&host_context(), Some(&mut screen), Some(&category));

    assert_eq!(first.resolver_calls, 2);
    assert_eq!(second.resolver_calls, 0);
    assert_eq!(second.writes(), 0);
    assert_eq!(screen.find_preference(MOCK_KEY).cloned(), after_first);
    assert_eq!(resolver.calls().len(), 2);
}

#[test]
fn icon_failure_leaves_icon_unset_and_summary_resolved() {
    let resolver = Arc::new(StubResolver::new().with_icon(Err(ResolveError::ProviderUnavailable {
        authority: MOCK_PACKAGE.to_string(),
    })));
    let engine = ReconciliationEngine::new(Arc::clone(&resolver));
    let mut screen = preference_screen();

    let report = engine.update_preferences(&host_context(), Some(&mut screen), Some(&live_category()));

    let pref = screen.find_preference(MOCK_KEY).unwrap();
    assert!(pref.icon.is_none());
    assert_eq!(pref.summary.as_deref(), Some(MOCK_SUMMARY));
    assert_eq!(report.failures, 1);
}

#[test]
fn summary_failure_leaves_summary_unset_and_icon_resolved() {
    let resolver = Arc::new(StubResolver::new().with_text(Err(ResolveError::provider_call(
        MOCK_PACKAGE,
        "text",
        "unknown method",
    ))));
    let engine = ReconciliationEngine::new(Arc::clone(&resolver));
    let mut screen = preference_screen();

    engine.update_preferences(&host_context(), Some(&mut screen), Some(&live_category()));

    let pref = screen.find_preference(MOCK_KEY).unwrap();
    assert_eq!(pref.icon, Some(mock_icon()));
    assert!(pref.summary.is_none());
}

#[test]
fn empty_resolved_values_are_not_written() {
    let resolver = Arc::new(
        StubResolver::new()
            .with_icon(Ok(Some(IconHandle::new(MOCK_PACKAGE, MOCK_ICON_ID, Vec::new()))))
            .with_text(Ok(Some(String::new()))),
    );
    let engine = ReconciliationEngine::new(Arc::clone(&resolver));
    let mut screen = preference_screen();

    let report = engine.update_preferences(&host_context(), Some(&mut screen), Some(&live_category()));

    assert_eq!(report.resolver_calls, 2);
    assert_eq!(report.writes(), 0);
    assert_eq!(screen.find_preference(MOCK_KEY).cloned(), Some(Preference::new(MOCK_KEY)));
}

#[test]
fn failures_do_not_stop_remaining_targets() {
    let resolver = Arc::new(StubResolver::new().with_icon(Err(ResolveError::Decode("bad".to_string()))));
    let engine = ReconciliationEngine::new(Arc::clone(&resolver));

    let mut screen: PreferenceScreen<Preference> = [Preference::new(MOCK_KEY), Preference::new("second")]
        .into_iter()
        .collect();
    let mut category = live_category();
    category.add_tile(
        Descriptor::new("second")
            .with_intent(Intent::for_package("other"))
            .with_metadata(remote_metadata()),
    );

    let report = engine.update_preferences(&host_context(), Some(&mut screen), Some(&category));

    // Distinct packages: two icon calls; shared summary uri: one text call
    assert_eq!(resolver.icon_calls(), 2);
    assert_eq!(resolver.text_calls(), 1);
    assert_eq!(report.failures, 2);
    assert_eq!(report.summaries_updated, 2);
    assert!(screen.find_preference("second").unwrap().summary.is_some());
}

#[test]
fn provider_resolver_end_to_end_loads_icon_once() {
    let mut packages = MockPackages::new();
    packages
        .expect_drawable()
        .withf(|package, id, _| package == MOCK_PACKAGE && *id == MOCK_ICON_ID)
        .times(1)
        .returning(|_, _, _| Ok(mock_icon()));
    let registry = Arc::new(registry_for_package());
    let engine = ReconciliationEngine::new(ProviderResolver::new(Arc::clone(&registry), packages));

    let mut screen = preference_screen();
    let report = engine.update_preferences(&host_context(), Some(&mut screen), Some(&live_category()));

    let pref = screen.find_preference(MOCK_KEY).unwrap();
    assert_eq!(pref.icon, Some(mock_icon()));
    assert_eq!(pref.summary.as_deref(), Some(MOCK_SUMMARY));
    assert_eq!(report.failures, 0);
    // Icon and summary share an authority: one connection per pass
    assert_eq!(registry.acquisitions(MOCK_PACKAGE), 1);

    // Already populated: second pass touches neither provider nor packages
    let second = engine.update_preferences(&host_context(), Some(&mut screen), Some(&live_category()));
    assert!(second.is_noop());
    assert_eq!(registry.acquisitions(MOCK_PACKAGE), 1);
}

#[test]
fn unreachable_provider_is_absorbed() {
    let engine = ReconciliationEngine::new(untouchable_resolver());
    let mut screen = preference_screen();

    let report = engine.update_preferences(&host_context(), Some(&mut screen), Some(&live_category()));

    assert_eq!(report.failures, 2);
    assert_eq!(report.writes(), 0);
    let pref = screen.find_preference(MOCK_KEY).unwrap();
    assert!(pref.icon.is_none() && pref.summary.is_none());
}

#[test]
fn skip_reasons_are_reported_per_target() {
    let engine = ReconciliationEngine::new(StubResolver::new());
    let mut screen: PreferenceScreen<Preference> = [
        Preference::default(),
        Preference::new("missing"),
        Preference::new("inert"),
    ]
    .into_iter()
    .collect();
    let mut category = TileCategory::new();
    category.add_tile(Descriptor::new("inert"));

    let report = engine.update_preferences(&host_context(), Some(&mut screen), Some(&category));

    assert_eq!(report.visited, 3);
    assert_eq!(report.skipped.total(), 3);
    let mut expected = tilesync_core::ReconcileReport {
        visited: 3,
        ..Default::default()
    };
    expected.skip(SkipReason::Unkeyed);
    expected.skip(SkipReason::NoDescriptor);
    expected.skip(SkipReason::Inert);
    assert_eq!(report, expected);
}
