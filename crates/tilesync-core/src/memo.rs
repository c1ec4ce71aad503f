//! Per-pass resolution memo
//!
//! Remembers what each distinct reference resolved to during one pass,
//! including "nothing", so no reference is resolved twice. Dropped with the
//! pass; there is no cross-pass caching. Keys borrow from the pass's tiles
//! and configuration.

use std::collections::HashMap;
use tilesync_resolver::IconHandle;

#[derive(Debug, Default)]
pub(crate) struct ResolutionMemo<'p> {
    icons: HashMap<(&'p str, &'p str), Option<IconHandle>>,
    texts: HashMap<(&'p str, &'p str), Option<String>>,
}

impl<'p> ResolutionMemo<'p> {
    /// Icon previously resolved for `(package, uri)`
    pub(crate) fn icon(&self, package: &'p str, uri: &'p str) -> Option<&Option<IconHandle>> {
        self.icons.get(&(package, uri))
    }

    pub(crate) fn remember_icon(
        &mut self,
        package: &'p str,
        uri: &'p str,
        icon: Option<IconHandle>,
    ) {
        self.icons.insert((package, uri), icon);
    }

    /// Text previously resolved for `(uri, key)`
    pub(crate) fn text(&self, uri: &'p str, key: &'p str) -> Option<&Option<String>> {
        self.texts.get(&(uri, key))
    }

    pub(crate) fn remember_text(&mut self, uri: &'p str, key: &'p str, text: Option<String>) {
        self.texts.insert((uri, key), text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memo_remembers_misses() {
        let mut memo = ResolutionMemo::default();
        assert!(memo.text("content://a/text", "k").is_none());

        memo.remember_text("content://a/text", "k", None);
        assert_eq!(memo.text("content://a/text", "k"), Some(&None));
        assert!(memo.text("content://a/text", "other").is_none());
    }

    #[test]
    fn memo_keys_icons_by_package() {
        let mut memo = ResolutionMemo::default();
        let icon = IconHandle::new("p", 1, vec![1]);
        memo.remember_icon("p", "content://a/icon", Some(icon.clone()));

        assert_eq!(memo.icon("p", "content://a/icon"), Some(&Some(icon)));
        assert!(memo.icon("q", "content://a/icon").is_none());
    }

    #[test]
    fn memo_matches_equal_keys_from_distinct_buffers() {
        let first = String::from("content://a/text");
        let second = first.clone();
        let mut memo = ResolutionMemo::default();

        memo.remember_text(&first, "k", Some("v".to_string()));
        assert_eq!(memo.text(&second, "k"), Some(&Some("v".to_string())));
    }
}
