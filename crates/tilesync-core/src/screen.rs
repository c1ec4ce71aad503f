//! Target tree
//!
//! [`PreferenceScreen`] is an ordered arena of display targets with key
//! lookup. Targets keep their insertion order; reconciliation walks them in
//! that order.

use crate::target::DisplayTarget;
use std::collections::HashMap;

/// Ordered display targets with key lookup
///
/// When keys repeat, lookup finds the first target with that key.
#[derive(Debug, Clone)]
pub struct PreferenceScreen<T> {
    targets: Vec<T>,
    by_key: HashMap<String, usize>,
}

impl<T> Default for PreferenceScreen<T> {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            by_key: HashMap::new(),
        }
    }
}

impl<T: DisplayTarget> PreferenceScreen<T> {
    /// Create empty screen
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a target; returns its position
    pub fn add_preference(&mut self, target: T) -> usize {
        let position = self.targets.len();
        if let Some(key) = target.key() {
            self.by_key.entry(key.to_string()).or_insert(position);
        }
        self.targets.push(target);
        position
    }

    /// Target with `key`
    #[must_use]
    pub fn find_preference(&self, key: &str) -> Option<&T> {
        let position = *self.by_key.get(key)?;
        self.targets.get(position)
    }

    /// Mutable target with `key`
    ///
    /// Setters must not change the target's key.
    pub fn find_preference_mut(&mut self, key: &str) -> Option<&mut T> {
        let position = *self.by_key.get(key)?;
        self.targets.get_mut(position)
    }

    /// Target at position
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.targets.get(position)
    }

    /// Number of targets
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the screen holds no targets
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterate targets in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.targets.iter()
    }

    /// Iterate targets mutably in order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.targets.iter_mut()
    }

    /// Consume screen into its targets
    #[must_use]
    pub fn into_targets(self) -> Vec<T> {
        self.targets
    }
}

impl<T: DisplayTarget> FromIterator<T> for PreferenceScreen<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut screen = Self::new();
        for target in iter {
            screen.add_preference(target);
        }
        screen
    }
}
