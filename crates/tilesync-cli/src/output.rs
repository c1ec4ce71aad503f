//! JSON rendering of a finished pass

use serde::Serialize;
use tilesync_core::{Preference, PreferenceScreen, ReconcileReport};
use tilesync_resolver::IconHandle;

#[derive(Debug, Serialize)]
struct IconView<'a> {
    package: &'a str,
    resource_id: u32,
    bytes: usize,
}

impl<'a> From<&'a IconHandle> for IconView<'a> {
    fn from(icon: &'a IconHandle) -> Self {
        Self {
            package: icon.package(),
            resource_id: icon.resource_id(),
            bytes: icon.data().len(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TargetView<'a> {
    key: Option<&'a str>,
    title: Option<&'a str>,
    summary: Option<&'a str>,
    icon: Option<IconView<'a>>,
}

#[derive(Debug, Serialize)]
struct PassView<'a> {
    targets: Vec<TargetView<'a>>,
    report: &'a ReconcileReport,
}

/// Render the updated tree and the report
pub(crate) fn render(
    screen: &PreferenceScreen<Preference>,
    report: &ReconcileReport,
) -> serde_json::Result<String> {
    let view = PassView {
        targets: screen
            .iter()
            .map(|pref| TargetView {
                key: pref.key.as_deref(),
                title: pref.title.as_deref(),
                summary: pref.summary.as_deref(),
                icon: pref.icon.as_ref().map(IconView::from),
            })
            .collect(),
        report,
    };
    serde_json::to_string_pretty(&view)
}
