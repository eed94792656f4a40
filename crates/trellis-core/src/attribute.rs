//! Attribute storage for graphs, nodes, edges and subgraphs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An attribute value
///
/// Plain values are escaped and quoted when serialized. Literal values are
/// emitted verbatim between `<` and `>`, which is how DOT carries HTML-like
/// labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrValue {
    pub value: String,

    #[serde(default)]
    pub literal: bool,
}

impl AttrValue {
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            literal: false,
        }
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            literal: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::plain(s)
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::plain(s)
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        Self::plain(s.clone())
    }
}

/// Key/value attributes of one element
///
/// Keys iterate in sorted order so serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    entries: BTreeMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an attribute. Last write wins.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Value for `key`, or the empty string when absent
    pub fn get(&self, key: &str) -> &str {
        self.entries.get(key).map(AttrValue::as_str).unwrap_or("")
    }

    /// Full value (including the literal flag) for `key`
    pub fn value(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.entries.remove(key)
    }

    /// Overwrite this store's attributes with every attribute of `other`.
    /// Keys only present here are kept.
    pub fn copy_from(&mut self, other: &Attributes) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (key, value) in iter {
            attrs.set(key, value);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut attrs = Attributes::new();
        attrs.set("color", "red");
        attrs.set("color", "blue");

        assert_eq!(attrs.get("color"), "blue");
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_missing_key_is_empty() {
        let attrs = Attributes::new();
        assert_eq!(attrs.get("missing-key"), "");
        assert!(attrs.value("missing-key").is_none());
    }

    #[test]
    fn test_literal_flag() {
        let mut attrs = Attributes::new();
        attrs.set("label", AttrValue::literal("<b>bold</b>"));
        attrs.set("tooltip", "plain");

        assert!(attrs.value("label").is_some_and(|v| v.literal));
        assert!(attrs.value("tooltip").is_some_and(|v| !v.literal));
        assert_eq!(attrs.get("label"), "<b>bold</b>");
    }

    #[test]
    fn test_remove() {
        let mut attrs: Attributes = [("shape", "box"), ("color", "red")].into_iter().collect();

        assert!(attrs.contains("shape"));
        assert_eq!(attrs.remove("shape"), Some(AttrValue::plain("box")));
        assert!(!attrs.contains("shape"));
        assert_eq!(attrs.get("shape"), "");
        assert_eq!(attrs.remove("shape"), None);
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_copy_from_overwrites_and_keeps() {
        let mut target: Attributes = [("shape", "box"), ("color", "red")].into_iter().collect();
        let source: Attributes = [("color", "green"), ("style", "dashed")].into_iter().collect();

        target.copy_from(&source);

        assert_eq!(target.get("shape"), "box");
        assert_eq!(target.get("color"), "green");
        assert_eq!(target.get("style"), "dashed");
        assert_eq!(source.len(), 2);
    }
}
