//! JSON fixtures
//!
//! - screen: array of `{ "key", "title", "summary" }` rows
//! - tiles: a category object `{ "key", "tiles": [...] }` or a bare tile array
//! - providers: `{ "host", "providers": { authority: { method: bundle } },
//!   "packages": { package: { resource_id: icon_file } } }`
//!
//! Icon files are read as raw bytes; relative paths resolve against the
//! providers fixture's directory.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tilesync_core::{Preference, PreferenceScreen};
use tilesync_descriptor::{Descriptor, TileCategory};
use tilesync_resolver::memory::{InMemoryPackageManager, StaticProvider, StaticRegistry};
use tilesync_resolver::HostContext;

/// One row of the screen fixture
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TargetFixture {
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    summary: Option<String>,
}

impl From<TargetFixture> for Preference {
    fn from(row: TargetFixture) -> Self {
        Self {
            key: row.key,
            title: row.title,
            icon: None,
            summary: row.summary,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TilesFixture {
    Category(TileCategory),
    Tiles(Vec<Descriptor>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ProvidersFixture {
    host: Option<HostContext>,
    providers: HashMap<String, StaticProvider>,
    packages: HashMap<String, HashMap<u32, PathBuf>>,
}

/// Collaborators built from a providers fixture
#[derive(Debug)]
pub(crate) struct Environment {
    pub(crate) host: Option<HostContext>,
    pub(crate) registry: StaticRegistry,
    pub(crate) packages: InMemoryPackageManager,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("malformed fixture {}", path.display()))
}

/// Load the target tree
pub(crate) fn load_screen(path: &Path) -> Result<PreferenceScreen<Preference>> {
    let rows: Vec<TargetFixture> = read_json(path)?;
    Ok(rows.into_iter().map(Preference::from).collect())
}

/// Load the tile category
pub(crate) fn load_tiles(path: &Path) -> Result<TileCategory> {
    Ok(match read_json(path)? {
        TilesFixture::Category(category) => category,
        TilesFixture::Tiles(tiles) => tiles.into_iter().collect(),
    })
}

/// Load providers and installed package resources
pub(crate) fn load_environment(path: &Path) -> Result<Environment> {
    let fixture: ProvidersFixture = read_json(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));

    let mut packages = InMemoryPackageManager::new();
    for (package, resources) in fixture.packages {
        for (resource_id, file) in resources {
            let file = base.join(file);
            let data = std::fs::read(&file).with_context(|| {
                format!(
                    "cannot read icon {resource_id:#x} of {package} from {}",
                    file.display()
                )
            })?;
            packages = packages.with_drawable(package.as_str(), resource_id, data);
        }
    }

    tracing::debug!(
        providers = fixture.providers.len(),
        path = %path.display(),
        "loaded provider fixture"
    );
    Ok(Environment {
        host: fixture.host,
        registry: fixture.providers.into_iter().collect(),
        packages,
    })
}
