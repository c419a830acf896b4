//! Block-level elements.

use super::attr::Attr;
use super::inline::Inline;
use super::table::Table;
use super::tags::{ListNumberDelim, ListNumberStyle, RawFormat};
use crate::error::{Error, Result};

/// An item of a bullet or ordered list: a sequence of blocks.
pub type ListItem = Vec<Block>;

/// A heading level, restricted to 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeaderLevel(u8);

impl HeaderLevel {
    /// Validate a heading level.
    ///
    /// Fails with [`Error::InvalidEnumValue`] outside 1..=6.
    pub fn new(level: i64) -> Result<Self> {
        if (1..=6).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(Error::InvalidEnumValue {
                field: "header level",
                value: level.to_string(),
            })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for HeaderLevel {
    fn default() -> Self {
        Self(1)
    }
}

/// Numbering descriptor of an ordered list: starting number, numbering
/// style, and the punctuation after the marker.
///
/// On the wire this is the triple `[start, {"t": style, "c": []},
/// {"t": delim, "c": []}]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListAttributes {
    /// First item number. Non-negative by construction.
    pub start: u64,
    pub style: ListNumberStyle,
    pub delim: ListNumberDelim,
}

impl Default for ListAttributes {
    fn default() -> Self {
        Self {
            start: 1,
            style: ListNumberStyle::Decimal,
            delim: ListNumberDelim::Period,
        }
    }
}

impl ListAttributes {
    pub fn new(start: u64, style: ListNumberStyle, delim: ListNumberDelim) -> Self {
        Self { start, style, delim }
    }
}

/// One entry of a definition list: a term plus one or more definitions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DefinitionItem {
    /// The term being defined (inline content).
    pub term: Vec<Inline>,
    /// Definitions of the term, each a sequence of blocks.
    pub definitions: Vec<Vec<Block>>,
}

impl DefinitionItem {
    pub fn new(term: Vec<Inline>, definitions: Vec<Vec<Block>>) -> Self {
        Self { term, definitions }
    }
}

/// A block-level element: a structural unit of the document.
///
/// Blocks contain either inline content (`Para`, `Plain`, `Header`), other
/// blocks (`BlockQuote`, `Div`, list items, table cells), or verbatim text
/// (`CodeBlock`, `RawBlock`). The enum is closed: code that builds blocks
/// directly cannot put an inline where a block belongs, so the capability
/// check only survives at the decode boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Inline content without paragraph spacing (list items, table cells).
    Plain(Vec<Inline>),
    /// An ordinary paragraph.
    Para(Vec<Inline>),
    /// Verbatim text with an attribute bundle (language classes etc.).
    CodeBlock(Attr, String),
    /// Raw content for one target format, passed through unrendered.
    RawBlock(RawFormat, String),
    /// A quoted group of blocks.
    BlockQuote(Vec<Block>),
    /// A numbered list with an explicit numbering descriptor.
    OrderedList(ListAttributes, Vec<ListItem>),
    /// An unnumbered list.
    BulletList(Vec<ListItem>),
    /// Term/definition pairs.
    DefinitionList(Vec<DefinitionItem>),
    /// A section heading.
    Header(HeaderLevel, Attr, Vec<Inline>),
    /// A thematic break.
    HorizontalRule,
    /// A table with validated geometry.
    Table(Table),
    /// A generic block container with attributes.
    Div(Attr, Vec<Block>),
    /// An empty block that renders as nothing.
    Null,
}

impl Block {
    /// Wire tag of this block.
    pub fn tag(&self) -> &'static str {
        match self {
            Block::Plain(_) => "Plain",
            Block::Para(_) => "Para",
            Block::CodeBlock(_, _) => "CodeBlock",
            Block::RawBlock(_, _) => "RawBlock",
            Block::BlockQuote(_) => "BlockQuote",
            Block::OrderedList(_, _) => "OrderedList",
            Block::BulletList(_) => "BulletList",
            Block::DefinitionList(_) => "DefinitionList",
            Block::Header(_, _, _) => "Header",
            Block::HorizontalRule => "HorizontalRule",
            Block::Table(_) => "Table",
            Block::Div(_, _) => "Div",
            Block::Null => "Null",
        }
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_level_range() {
        for level in 1..=6 {
            assert_eq!(HeaderLevel::new(level).unwrap().get(), level as u8);
        }
        for level in [0, 7, -1, 100] {
            let err = HeaderLevel::new(level).unwrap_err();
            assert!(matches!(err, Error::InvalidEnumValue { field: "header level", .. }));
        }
    }

    #[test]
    fn test_list_attributes_default() {
        let attrs = ListAttributes::default();
        assert_eq!(attrs.start, 1);
        assert_eq!(attrs.style, ListNumberStyle::Decimal);
        assert_eq!(attrs.delim, ListNumberDelim::Period);
    }

    #[test]
    fn test_block_tags() {
        assert_eq!(Block::HorizontalRule.tag(), "HorizontalRule");
        assert_eq!(Block::Para(Vec::new()).tag(), "Para");
        assert_eq!(
            Block::Header(HeaderLevel::default(), Attr::new(), Vec::new()).tag(),
            "Header"
        );
    }
}
