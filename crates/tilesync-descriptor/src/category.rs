//! Ordered tile collections

use crate::descriptor::Descriptor;
use serde::{Deserialize, Serialize};

/// Ordered collection of tiles contributed to one dashboard category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCategory {
    /// Category key (informational)
    #[serde(default)]
    pub key: Option<String>,

    /// Tiles in publication order
    #[serde(default)]
    pub tiles: Vec<Descriptor>,
}

impl TileCategory {
    /// Create empty category
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create category with a key
    #[inline]
    #[must_use]
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            tiles: Vec::new(),
        }
    }

    /// Append a tile
    pub fn add_tile(&mut self, tile: Descriptor) {
        self.tiles.push(tile);
    }

    /// Tile at position
    #[inline]
    #[must_use]
    pub fn tile(&self, position: usize) -> Option<&Descriptor> {
        self.tiles.get(position)
    }

    /// Mutable tile at position
    #[inline]
    pub fn tile_mut(&mut self, position: usize) -> Option<&mut Descriptor> {
        self.tiles.get_mut(position)
    }

    /// Number of tiles
    #[inline]
    #[must_use]
    pub fn tiles_count(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the category holds no tiles
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate tiles in order
    pub fn iter(&self) -> std::slice::Iter<'_, Descriptor> {
        self.tiles.iter()
    }
}

impl FromIterator<Descriptor> for TileCategory {
    fn from_iter<I: IntoIterator<Item = Descriptor>>(iter: I) -> Self {
        Self {
            key: None,
            tiles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TileCategory {
    type Item = &'a Descriptor;
    type IntoIter = std::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
