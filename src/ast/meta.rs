//! Document metadata values.

use indexmap::IndexMap;

use super::block::Block;
use super::inline::Inline;

/// Ordered metadata map, as stored under `unMeta`.
pub type MetaMap = IndexMap<String, MetaValue>;

/// A metadata value.
///
/// Strings are stored unwrapped: the wire may spell one bare or as
/// `{"t": "MetaString", "c": ...}`, and both decode to [`MetaValue::String`],
/// which always re-encodes bare. Inline and block snippets keep their own
/// `MetaInlines` / `MetaBlocks` tags on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    String(String),
    Bool(bool),
    /// `{"t": "MetaList", "c": [...]}` on the wire.
    List(Vec<MetaValue>),
    /// `{"t": "MetaMap", "c": {...}}` on the wire.
    Map(MetaMap),
    /// A snippet of inline content.
    Inlines(Vec<Inline>),
    /// A snippet of block content.
    Blocks(Vec<Block>),
}

impl MetaValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetaValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[MetaValue]> {
        match self {
            MetaValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&MetaMap> {
        match self {
            MetaValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::String(s.to_owned())
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        MetaValue::String(s)
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        MetaValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(MetaValue::from("x").as_str(), Some("x"));
        assert_eq!(MetaValue::from("x").as_bool(), None);
        assert_eq!(MetaValue::from(true).as_bool(), Some(true));
        let list = MetaValue::List(vec![MetaValue::from(false)]);
        assert_eq!(list.as_list().map(<[MetaValue]>::len), Some(1));
        assert!(list.as_map().is_none());
    }

    #[test]
    fn test_map_preserves_insertion_order() {
        let mut map = MetaMap::new();
        map.insert("zebra".into(), MetaValue::from("z"));
        map.insert("apple".into(), MetaValue::from("a"));
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zebra", "apple"]);
    }
}
