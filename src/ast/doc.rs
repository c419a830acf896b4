//! The document root.

use super::block::Block;
use super::meta::{MetaMap, MetaValue};

/// A complete document: metadata plus a sequence of blocks.
///
/// `format` names the output format the consuming pipeline is producing
/// ("html", "latex", ...). It arrives out of band, not on the wire, so the
/// codec leaves it alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Doc {
    /// Document metadata, in insertion order.
    pub meta: MetaMap,
    /// Top-level block sequence.
    pub blocks: Vec<Block>,
    /// Target output format.
    pub format: String,
}

impl Doc {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            meta: MetaMap::new(),
            blocks,
            format: String::from("html"),
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Look up nested metadata by a dot-separated path.
    ///
    /// Descends maps one key per path segment and returns `None` as soon as
    /// a segment is missing or the value at hand is not a map, so callers
    /// can chain a default.
    ///
    /// # Examples
    ///
    /// ```
    /// use panpipe::{Doc, MetaValue};
    ///
    /// let doc = Doc::default();
    /// let show_frame = doc
    ///     .get_metadata("format.show-frame")
    ///     .and_then(MetaValue::as_bool)
    ///     .unwrap_or(false);
    /// assert!(!show_frame);
    /// ```
    pub fn get_metadata(&self, path: &str) -> Option<&MetaValue> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut value = self.meta.get(first)?;
        for segment in segments {
            value = value.as_map()?.get(segment)?;
        }
        Some(value)
    }
}
