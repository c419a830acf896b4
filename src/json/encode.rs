//! Tree to wire encoding.
//!
//! Encoding is pure and total: any tree that construction allowed encodes
//! without error. Object key order is meaningful on this wire (`"t"` before
//! `"c"`, metadata keys in insertion order), which is why the crate runs
//! serde_json with `preserve_order`.

use serde_json::{Map, Value};

use crate::ast::{
    Attr, Block, Citation, CitationScalar, ColWidth, Doc, Inline, ListAttributes, MetaMap,
    MetaValue, RawFormat, Table, Target,
};

/// Encode a whole document as `[{"unMeta": meta}, blocks]`.
///
/// The document's `format` field is out-of-band and does not appear.
pub fn encode_doc(doc: &Doc) -> Value {
    let mut meta = Map::new();
    meta.insert("unMeta".to_owned(), encode_meta_map(&doc.meta));
    Value::Array(vec![Value::Object(meta), encode_blocks(&doc.blocks)])
}

/// Encode one block as a tagged value.
pub fn encode_block(block: &Block) -> Value {
    let content = match block {
        Block::Plain(inlines) | Block::Para(inlines) => encode_inlines(inlines),
        Block::CodeBlock(attr, text) => {
            Value::Array(vec![encode_attr(attr), Value::String(text.clone())])
        }
        Block::RawBlock(format, text) => encode_raw(*format, text),
        Block::BlockQuote(blocks) => encode_blocks(blocks),
        Block::OrderedList(attrs, items) => Value::Array(vec![
            encode_list_attributes(attrs),
            Value::Array(items.iter().map(|item| encode_blocks(item)).collect()),
        ]),
        Block::BulletList(items) => {
            Value::Array(items.iter().map(|item| encode_blocks(item)).collect())
        }
        Block::DefinitionList(items) => Value::Array(
            items
                .iter()
                .map(|item| {
                    Value::Array(vec![
                        encode_inlines(&item.term),
                        Value::Array(
                            item.definitions
                                .iter()
                                .map(|definition| encode_blocks(definition))
                                .collect(),
                        ),
                    ])
                })
                .collect(),
        ),
        Block::Header(level, attr, inlines) => Value::Array(vec![
            Value::from(level.get()),
            encode_attr(attr),
            encode_inlines(inlines),
        ]),
        Block::Table(table) => encode_table(table),
        Block::Div(attr, blocks) => Value::Array(vec![encode_attr(attr), encode_blocks(blocks)]),
        Block::HorizontalRule | Block::Null => Value::Array(Vec::new()),
    };
    tagged(block.tag(), content)
}

/// Encode one inline as a tagged value.
pub fn encode_inline(inline: &Inline) -> Value {
    let content = match inline {
        Inline::Str(text) => Value::String(text.clone()),
        Inline::Emph(inlines)
        | Inline::Strong(inlines)
        | Inline::Strikeout(inlines)
        | Inline::Superscript(inlines)
        | Inline::Subscript(inlines)
        | Inline::SmallCaps(inlines) => encode_inlines(inlines),
        Inline::Quoted(quote_type, inlines) => {
            Value::Array(vec![tagged_empty(quote_type.tag()), encode_inlines(inlines)])
        }
        Inline::Cite(citations, inlines) => Value::Array(vec![
            Value::Array(citations.iter().map(encode_citation).collect()),
            encode_inlines(inlines),
        ]),
        Inline::Code(attr, text) => {
            Value::Array(vec![encode_attr(attr), Value::String(text.clone())])
        }
        Inline::Math(math_type, text) => Value::Array(vec![
            tagged_empty(math_type.tag()),
            Value::String(text.clone()),
        ]),
        Inline::RawInline(format, text) => encode_raw(*format, text),
        Inline::Link(attr, inlines, target) | Inline::Image(attr, inlines, target) => {
            Value::Array(vec![
                encode_attr(attr),
                encode_inlines(inlines),
                encode_target(target),
            ])
        }
        Inline::Note(blocks) => encode_blocks(blocks),
        Inline::Span(attr, inlines) => {
            Value::Array(vec![encode_attr(attr), encode_inlines(inlines)])
        }
        Inline::Space | Inline::SoftBreak | Inline::LineBreak => Value::Array(Vec::new()),
    };
    tagged(inline.tag(), content)
}

/// Encode one metadata value.
///
/// Strings pass through bare; everything else wraps in its `Meta*` tag.
pub fn encode_meta(value: &MetaValue) -> Value {
    match value {
        MetaValue::String(s) => Value::String(s.clone()),
        MetaValue::Bool(b) => tagged("MetaBool", Value::Bool(*b)),
        MetaValue::List(items) => tagged(
            "MetaList",
            Value::Array(items.iter().map(encode_meta).collect()),
        ),
        MetaValue::Map(map) => tagged("MetaMap", encode_meta_map(map)),
        MetaValue::Inlines(inlines) => tagged("MetaInlines", encode_inlines(inlines)),
        MetaValue::Blocks(blocks) => tagged("MetaBlocks", encode_blocks(blocks)),
    }
}

/// `{"t": tag, "c": content}` with the keys in exactly that order.
fn tagged(tag: &str, content: Value) -> Value {
    let mut obj = Map::new();
    obj.insert("t".to_owned(), Value::String(tag.to_owned()));
    obj.insert("c".to_owned(), content);
    Value::Object(obj)
}

/// A content-free tagged value, as vocabulary members encode.
fn tagged_empty(tag: &str) -> Value {
    tagged(tag, Value::Array(Vec::new()))
}

fn encode_blocks(blocks: &[Block]) -> Value {
    Value::Array(blocks.iter().map(encode_block).collect())
}

fn encode_inlines(inlines: &[Inline]) -> Value {
    Value::Array(inlines.iter().map(encode_inline).collect())
}

/// Raw content: `[format, text]` with the format as a bare string.
fn encode_raw(format: RawFormat, text: &str) -> Value {
    Value::Array(vec![
        Value::String(format.name().to_owned()),
        Value::String(text.to_owned()),
    ])
}

/// The attribute triple `[identifier, [classes], [[key, value]]]`.
fn encode_attr(attr: &Attr) -> Value {
    Value::Array(vec![
        Value::String(attr.identifier.clone()),
        Value::Array(
            attr.classes
                .iter()
                .map(|class| Value::String(class.clone()))
                .collect(),
        ),
        Value::Array(
            attr.attributes
                .iter()
                .map(|(key, value)| {
                    Value::Array(vec![
                        Value::String(key.clone()),
                        Value::String(value.clone()),
                    ])
                })
                .collect(),
        ),
    ])
}

fn encode_target(target: &Target) -> Value {
    Value::Array(vec![
        Value::String(target.url.clone()),
        Value::String(target.title.clone()),
    ])
}

/// The numbering descriptor `[start, style, delimiter]`.
fn encode_list_attributes(attrs: &ListAttributes) -> Value {
    Value::Array(vec![
        Value::from(attrs.start),
        tagged_empty(attrs.style.tag()),
        tagged_empty(attrs.delim.tag()),
    ])
}

/// Table content `[caption, alignments, widths, header, rows]`.
fn encode_table(table: &Table) -> Value {
    Value::Array(vec![
        encode_inlines(table.caption()),
        Value::Array(
            table
                .alignment()
                .iter()
                .map(|align| tagged_empty(align.tag()))
                .collect(),
        ),
        Value::Array(
            table
                .widths()
                .iter()
                .map(|width| encode_col_width(*width))
                .collect(),
        ),
        Value::Array(
            table
                .header()
                .iter()
                .map(|cell| encode_blocks(cell))
                .collect(),
        ),
        Value::Array(
            table
                .rows()
                .iter()
                .map(|row| Value::Array(row.iter().map(|cell| encode_blocks(cell)).collect()))
                .collect(),
        ),
    ])
}

/// Citation object in pandoc's key order, suffix first.
fn encode_citation(citation: &Citation) -> Value {
    let mut obj = Map::new();
    obj.insert("citationSuffix".to_owned(), encode_inlines(&citation.suffix));
    obj.insert(
        "citationNoteNum".to_owned(),
        encode_citation_scalar(&citation.note_num),
    );
    obj.insert("citationMode".to_owned(), tagged_empty(citation.mode.tag()));
    obj.insert("citationPrefix".to_owned(), encode_inlines(&citation.prefix));
    obj.insert("citationId".to_owned(), Value::String(citation.id.clone()));
    obj.insert(
        "citationHash".to_owned(),
        encode_citation_scalar(&citation.hash),
    );
    Value::Object(obj)
}

fn encode_citation_scalar(scalar: &CitationScalar) -> Value {
    match scalar {
        CitationScalar::Int(n) => Value::from(*n),
        CitationScalar::Str(s) => Value::String(s.clone()),
    }
}

/// Widths re-emit as spelled on the wire: `Int(0)` as `0`, never `0.0`.
fn encode_col_width(width: ColWidth) -> Value {
    match width {
        ColWidth::Int(n) => Value::from(n),
        ColWidth::Float(x) => Value::from(x),
    }
}

fn encode_meta_map(map: &MetaMap) -> Value {
    let mut obj = Map::new();
    for (key, value) in map {
        obj.insert(key.clone(), encode_meta(value));
    }
    Value::Object(obj)
}
