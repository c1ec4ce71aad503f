//! Descriptor index
//!
//! Provides [`DescriptorIndex`], the key lookup a reconciliation pass builds
//! once from its tile collection before walking display targets.

use crate::category::TileCategory;
use crate::descriptor::Descriptor;
use indexmap::IndexMap;

/// Borrowed key → descriptor lookup for one pass
///
/// Keyless descriptors are not indexed. When two descriptors share a key the
/// later one replaces the earlier one; the slot keeps its first position.
#[derive(Debug, Clone, Default)]
pub struct DescriptorIndex<'a> {
    by_key: IndexMap<&'a str, &'a Descriptor>,
    keyless: usize,
    duplicates: usize,
}

impl<'a> DescriptorIndex<'a> {
    /// Build index from an optional category
    ///
    /// An absent category yields an empty index.
    #[must_use]
    pub fn build(category: Option<&'a TileCategory>) -> Self {
        category.map_or_else(Self::default, |category| Self::from_descriptors(category))
    }

    /// Build index from any sequence of descriptors
    #[must_use]
    pub fn from_descriptors<I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = &'a Descriptor>,
    {
        let mut index = Self::default();
        for descriptor in descriptors {
            let Some(key) = descriptor.key() else {
                index.keyless += 1;
                continue;
            };
            if index.by_key.insert(key, descriptor).is_some() {
                index.duplicates += 1;
                tracing::warn!(key, "duplicate tile key; later descriptor replaces earlier");
            }
        }
        index
    }

    /// Lookup descriptor by key
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Descriptor> {
        self.by_key.get(key).copied()
    }

    /// Check if key is indexed
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Number of indexed keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Check if index is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Descriptors skipped for having no key
    #[inline]
    #[must_use]
    pub fn keyless_count(&self) -> usize {
        self.keyless
    }

    /// Descriptors that replaced an earlier one with the same key
    #[inline]
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }

    /// Indexed keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.by_key.keys().copied()
    }

    /// Live descriptors (with an intent) in first-seen order
    pub fn live(&self) -> impl Iterator<Item = &'a Descriptor> + '_ {
        self.by_key.values().copied().filter(|d| d.is_live())
    }
}
