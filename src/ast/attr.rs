//! Identifier / classes / key-value attribute bundle.

use indexmap::IndexMap;

/// The attribute bundle carried by `Code`, `CodeBlock`, `Div`, `Span`,
/// `Header`, `Link`, and `Image`.
///
/// On the wire this is the triple `[identifier, [classes], [[key, value]]]`.
/// Key-value pairs keep insertion order; inserting an existing key replaces
/// its value without moving it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attr {
    /// Element identifier (the HTML `id`).
    pub identifier: String,
    /// Class names, in order.
    pub classes: Vec<String>,
    /// Remaining key-value attributes, in order.
    pub attributes: IndexMap<String, String>,
}

impl Attr {
    /// Create an empty attribute bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bundle with just an identifier.
    pub fn from_identifier(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up a key-value attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Whether the element carries this class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// True when identifier, classes, and attributes are all empty.
    pub fn is_empty(&self) -> bool {
        self.identifier.is_empty() && self.classes.is_empty() && self.attributes.is_empty()
    }
}
