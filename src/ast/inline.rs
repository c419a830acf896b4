//! Inline elements.

use super::attr::Attr;
use super::block::Block;
use super::citation::Citation;
use super::tags::{MathType, QuoteType, RawFormat};

/// A link or image destination: URL plus advisory title.
///
/// On the wire this is the pair `[url, title]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Target {
    pub url: String,
    /// Tooltip text, often empty.
    pub title: String,
}

impl Target {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// An inline element: a span of running text.
///
/// Inlines contain text (`Str`, `Code`, `Math`), other inlines (the
/// formatting wrappers), or, for `Note` alone, a sequence of blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// A run of literal text.
    Str(String),
    /// Emphasized (usually italic) text.
    Emph(Vec<Inline>),
    /// Strongly emphasized (usually bold) text.
    Strong(Vec<Inline>),
    /// Struck-out text.
    Strikeout(Vec<Inline>),
    Superscript(Vec<Inline>),
    Subscript(Vec<Inline>),
    SmallCaps(Vec<Inline>),
    /// Text between quotation marks.
    Quoted(QuoteType, Vec<Inline>),
    /// Citations plus the inlines that render them.
    Cite(Vec<Citation>, Vec<Inline>),
    /// Inline verbatim text with an attribute bundle.
    Code(Attr, String),
    /// An inter-word space.
    Space,
    /// A line break the writer may collapse to a space.
    SoftBreak,
    /// A hard line break.
    LineBreak,
    /// TeX math, display or inline.
    Math(MathType, String),
    /// Raw content for one target format, passed through unrendered.
    RawInline(RawFormat, String),
    /// A hyperlink: attributes, link text, destination.
    Link(Attr, Vec<Inline>, Target),
    /// An image: attributes, alt text, source.
    Image(Attr, Vec<Inline>, Target),
    /// A footnote or endnote holding block content.
    Note(Vec<Block>),
    /// A generic inline container with attributes.
    Span(Attr, Vec<Inline>),
}

impl Inline {
    /// Wire tag of this inline.
    pub fn tag(&self) -> &'static str {
        match self {
            Inline::Str(_) => "Str",
            Inline::Emph(_) => "Emph",
            Inline::Strong(_) => "Strong",
            Inline::Strikeout(_) => "Strikeout",
            Inline::Superscript(_) => "Superscript",
            Inline::Subscript(_) => "Subscript",
            Inline::SmallCaps(_) => "SmallCaps",
            Inline::Quoted(_, _) => "Quoted",
            Inline::Cite(_, _) => "Cite",
            Inline::Code(_, _) => "Code",
            Inline::Space => "Space",
            Inline::SoftBreak => "SoftBreak",
            Inline::LineBreak => "LineBreak",
            Inline::Math(_, _) => "Math",
            Inline::RawInline(_, _) => "RawInline",
            Inline::Link(_, _, _) => "Link",
            Inline::Image(_, _, _) => "Image",
            Inline::Note(_) => "Note",
            Inline::Span(_, _) => "Span",
        }
    }
}

impl From<&str> for Inline {
    fn from(s: &str) -> Self {
        Inline::Str(s.to_owned())
    }
}

impl From<String> for Inline {
    fn from(s: String) -> Self {
        Inline::Str(s)
    }
}
