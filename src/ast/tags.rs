//! Closed vocabularies shared across the element tree.
//!
//! Each enum here is a fixed set of wire tags. On the wire they travel as
//! content-free tagged values (`{"t": "Decimal", "c": []}`), except for
//! [`RawFormat`], which pandoc spells as a bare lowercase string.

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    AlignLeft,
    AlignRight,
    AlignCenter,
    /// Let the writer pick (pandoc's column default).
    #[default]
    AlignDefault,
}

impl Alignment {
    /// Wire tag for this alignment.
    pub fn tag(self) -> &'static str {
        match self {
            Alignment::AlignLeft => "AlignLeft",
            Alignment::AlignRight => "AlignRight",
            Alignment::AlignCenter => "AlignCenter",
            Alignment::AlignDefault => "AlignDefault",
        }
    }

    /// Parse a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "AlignLeft" => Some(Alignment::AlignLeft),
            "AlignRight" => Some(Alignment::AlignRight),
            "AlignCenter" => Some(Alignment::AlignCenter),
            "AlignDefault" => Some(Alignment::AlignDefault),
            _ => None,
        }
    }
}

/// Numbering style of an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListNumberStyle {
    DefaultStyle,
    /// Pandoc's `@`-style example numbering (shared counter across lists).
    Example,
    #[default]
    Decimal,
    LowerRoman,
    UpperRoman,
    LowerAlpha,
    UpperAlpha,
}

impl ListNumberStyle {
    /// Wire tag for this numbering style.
    pub fn tag(self) -> &'static str {
        match self {
            ListNumberStyle::DefaultStyle => "DefaultStyle",
            ListNumberStyle::Example => "Example",
            ListNumberStyle::Decimal => "Decimal",
            ListNumberStyle::LowerRoman => "LowerRoman",
            ListNumberStyle::UpperRoman => "UpperRoman",
            ListNumberStyle::LowerAlpha => "LowerAlpha",
            ListNumberStyle::UpperAlpha => "UpperAlpha",
        }
    }

    /// Parse a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "DefaultStyle" => Some(ListNumberStyle::DefaultStyle),
            "Example" => Some(ListNumberStyle::Example),
            "Decimal" => Some(ListNumberStyle::Decimal),
            "LowerRoman" => Some(ListNumberStyle::LowerRoman),
            "UpperRoman" => Some(ListNumberStyle::UpperRoman),
            "LowerAlpha" => Some(ListNumberStyle::LowerAlpha),
            "UpperAlpha" => Some(ListNumberStyle::UpperAlpha),
            _ => None,
        }
    }
}

/// Punctuation after an ordered-list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListNumberDelim {
    DefaultDelim,
    /// `1.`
    #[default]
    Period,
    /// `1)`
    OneParen,
    /// `(1)`
    TwoParens,
}

impl ListNumberDelim {
    /// Wire tag for this delimiter.
    pub fn tag(self) -> &'static str {
        match self {
            ListNumberDelim::DefaultDelim => "DefaultDelim",
            ListNumberDelim::Period => "Period",
            ListNumberDelim::OneParen => "OneParen",
            ListNumberDelim::TwoParens => "TwoParens",
        }
    }

    /// Parse a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "DefaultDelim" => Some(ListNumberDelim::DefaultDelim),
            "Period" => Some(ListNumberDelim::Period),
            "OneParen" => Some(ListNumberDelim::OneParen),
            "TwoParens" => Some(ListNumberDelim::TwoParens),
            _ => None,
        }
    }
}

/// Quotation mark style of a `Quoted` inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuoteType {
    SingleQuote,
    #[default]
    DoubleQuote,
}

impl QuoteType {
    /// Wire tag for this quote style.
    pub fn tag(self) -> &'static str {
        match self {
            QuoteType::SingleQuote => "SingleQuote",
            QuoteType::DoubleQuote => "DoubleQuote",
        }
    }

    /// Parse a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "SingleQuote" => Some(QuoteType::SingleQuote),
            "DoubleQuote" => Some(QuoteType::DoubleQuote),
            _ => None,
        }
    }
}

/// How a citation is rendered in running text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CitationMode {
    /// Author name in the sentence, year in parentheses.
    AuthorInText,
    /// Year only; the author is already named by the prose.
    SuppressAuthor,
    /// Author and year in parentheses.
    #[default]
    NormalCitation,
}

impl CitationMode {
    /// Wire tag for this citation mode.
    pub fn tag(self) -> &'static str {
        match self {
            CitationMode::AuthorInText => "AuthorInText",
            CitationMode::SuppressAuthor => "SuppressAuthor",
            CitationMode::NormalCitation => "NormalCitation",
        }
    }

    /// Parse a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "AuthorInText" => Some(CitationMode::AuthorInText),
            "SuppressAuthor" => Some(CitationMode::SuppressAuthor),
            "NormalCitation" => Some(CitationMode::NormalCitation),
            _ => None,
        }
    }
}

/// Display mode of a `Math` inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MathType {
    #[default]
    DisplayMath,
    InlineMath,
}

impl MathType {
    /// Wire tag for this math mode.
    pub fn tag(self) -> &'static str {
        match self {
            MathType::DisplayMath => "DisplayMath",
            MathType::InlineMath => "InlineMath",
        }
    }

    /// Parse a wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "DisplayMath" => Some(MathType::DisplayMath),
            "InlineMath" => Some(MathType::InlineMath),
            _ => None,
        }
    }
}

/// Target language of raw (verbatim) content.
///
/// Unlike the other vocabularies, raw formats travel as bare lowercase
/// strings on the wire (`"html"`), not as tagged values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RawFormat {
    #[default]
    Html,
    Tex,
    Latex,
}

impl RawFormat {
    /// Wire spelling of this format.
    pub fn name(self) -> &'static str {
        match self {
            RawFormat::Html => "html",
            RawFormat::Tex => "tex",
            RawFormat::Latex => "latex",
        }
    }

    /// Parse a wire spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "html" => Some(RawFormat::Html),
            "tex" => Some(RawFormat::Tex),
            "latex" => Some(RawFormat::Latex),
            _ => None,
        }
    }
}

/// Wire tags that name block elements.
pub(crate) const BLOCK_TAGS: &[&str] = &[
    "BlockQuote",
    "BulletList",
    "CodeBlock",
    "DefinitionList",
    "Div",
    "Header",
    "HorizontalRule",
    "Null",
    "OrderedList",
    "Para",
    "Plain",
    "RawBlock",
    "Table",
];

/// Wire tags that name inline elements.
pub(crate) const INLINE_TAGS: &[&str] = &[
    "Cite",
    "Code",
    "Emph",
    "Image",
    "LineBreak",
    "Link",
    "Math",
    "Note",
    "Quoted",
    "RawInline",
    "SmallCaps",
    "SoftBreak",
    "Space",
    "Span",
    "Str",
    "Strikeout",
    "Strong",
    "Subscript",
    "Superscript",
];

/// Wire tags that name metadata containers.
pub(crate) const META_TAGS: &[&str] = &[
    "MetaBlocks",
    "MetaBool",
    "MetaInlines",
    "MetaList",
    "MetaMap",
    "MetaString",
];

/// Whether `tag` belongs to one of the content-free vocabularies above.
pub(crate) fn is_vocabulary_tag(tag: &str) -> bool {
    Alignment::from_tag(tag).is_some()
        || ListNumberStyle::from_tag(tag).is_some()
        || ListNumberDelim::from_tag(tag).is_some()
        || QuoteType::from_tag(tag).is_some()
        || CitationMode::from_tag(tag).is_some()
        || MathType::from_tag(tag).is_some()
}

/// Whether `tag` is known to the codec at all.
///
/// Distinguishes a known tag in the wrong position (a capability error)
/// from a tag nothing can interpret (an unknown-tag error).
pub(crate) fn is_known_tag(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
        || INLINE_TAGS.contains(&tag)
        || META_TAGS.contains(&tag)
        || is_vocabulary_tag(tag)
}
