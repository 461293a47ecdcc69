use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Literal class name to generated identifier, as emitted by CSS-module tooling.
///
/// Deserializes from a flat JSON object. Cloning is cheap: clones share one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    inner: Arc<FxHashMap<String, String>>,
}

impl StyleMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[must_use]
    pub fn get(&self, class: &str) -> Option<&str> {
        self.inner.get(class).map(String::as_str)
    }

    /// The identifier for `token`, or `token` itself when it is unmapped or mapped to `""`.
    #[must_use]
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.get(token).filter(|mapped| !mapped.is_empty()).unwrap_or(token)
    }

    /// Rewrites every token of `class`. Whitespace runs, including leading and trailing ones,
    /// collapse to single separating spaces.
    #[must_use]
    pub fn rebind(&self, class: &str) -> String {
        let mut out = String::with_capacity(class.len());
        for token in class.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(self.resolve(token));
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for StyleMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { inner: Arc::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect()) }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for StyleMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<FxHashMap<String, String>> for StyleMap {
    fn from(map: FxHashMap<String, String>) -> Self {
        Self { inner: Arc::new(map) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_and_empty_entries_pass_through() {
        let styles = StyleMap::from([("btn", "_btn_1"), ("ghost", "")]);
        assert_eq!(styles.resolve("btn"), "_btn_1");
        assert_eq!(styles.resolve("ghost"), "ghost");
        assert_eq!(styles.resolve("other"), "other");
    }

    #[test]
    fn whitespace_is_normalized() {
        let styles = StyleMap::new();
        assert_eq!(styles.rebind("  a\t\tb\n c  "), "a b c");
        assert_eq!(styles.rebind(" \n\t "), "");
    }

    #[test]
    fn clones_share_the_table() {
        let styles = StyleMap::from([("a", "_a")]);
        let copy = styles.clone();
        assert!(Arc::ptr_eq(&styles.inner, &copy.inner));
    }
}
