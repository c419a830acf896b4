//! Wire to tree decoding.
//!
//! The inverse of [`encode`](super::encode): a dispatch over the `"t"` tag
//! string that unpacks each kind's positional content back into typed
//! fields. The wire is untrusted, so everything the type system guarantees
//! for directly-built trees is checked here instead: child capability,
//! vocabulary membership, primitive field types, and compound shapes.
//! Decoding fails fast on the first violation and never produces a partial
//! document.

use indexmap::IndexMap;
use serde_json::Value;

use crate::ast::tags;
use crate::ast::{
    Alignment, Attr, Block, Citation, CitationMode, CitationScalar, ColWidth, DefinitionItem, Doc,
    HeaderLevel, Inline, ListAttributes, ListNumberDelim, ListNumberStyle, MathType, MetaMap,
    MetaValue, QuoteType, RawFormat, Table, Target,
};
use crate::error::{Error, Result};

/// Decode a whole document from `[{"unMeta": meta}, blocks]`.
///
/// `format` is the out-of-band output format to record on the document; it
/// is not read from the wire.
pub fn decode_doc(wire: &Value, format: impl Into<String>) -> Result<Doc> {
    let parts = sized_array("document", wire, 2)?;
    let meta = unmeta_from(&parts[0])?;
    let blocks = blocks_from(&parts[1], "document")?;
    Ok(Doc {
        meta,
        blocks,
        format: format.into(),
    })
}

/// Decode one block-tagged value.
pub fn decode_block(wire: &Value) -> Result<Block> {
    block_from(wire, "document")
}

/// Decode one inline-tagged value.
pub fn decode_inline(wire: &Value) -> Result<Inline> {
    inline_from(wire, "inline sequence")
}

/// Decode one metadata value.
///
/// Bare strings, booleans, arrays, and untagged objects are accepted as
/// written; `Meta*`-tagged values unwrap to the same representations, so a
/// wire `MetaString` and a bare string decode identically.
pub fn decode_meta(wire: &Value) -> Result<MetaValue> {
    match wire {
        Value::String(s) => Ok(MetaValue::String(s.clone())),
        Value::Bool(b) => Ok(MetaValue::Bool(*b)),
        Value::Array(items) => items
            .iter()
            .map(decode_meta)
            .collect::<Result<Vec<_>>>()
            .map(MetaValue::List),
        Value::Object(_) => match split_tagged(wire)? {
            Some((tag, content)) => meta_from_tagged(tag, content, wire),
            None => meta_map_from(wire).map(MetaValue::Map),
        },
        _ => Err(Error::InvalidFieldType {
            what: "metadata value",
            expected: "a string, boolean, array, or object",
            found: render(wire),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tagged-value plumbing
// ---------------------------------------------------------------------------

/// Split `{"t": tag, "c": content}`.
///
/// Returns `Ok(None)` when the value is not tagged at all (not an object,
/// or its first key is not `"t"`), and an error when it starts with `"t"`
/// but the `"c"` marker does not follow as the second key.
fn split_tagged(value: &Value) -> Result<Option<(&str, &Value)>> {
    let Some(obj) = value.as_object() else {
        return Ok(None);
    };
    let mut entries = obj.iter();
    let Some((first_key, first_value)) = entries.next() else {
        return Ok(None);
    };
    if first_key != "t" {
        return Ok(None);
    }
    let Some(tag) = first_value.as_str() else {
        return Err(Error::ShapeMismatch(format!(
            "wire tag must be a string, got {}",
            type_name(first_value)
        )));
    };
    match entries.next() {
        Some((key, content)) if key == "c" => Ok(Some((tag, content))),
        _ => Err(Error::ShapeMismatch(format!(
            "tagged value {tag} is missing its \"c\" content"
        ))),
    }
}

fn capability_error(
    parent: &'static str,
    expected: &'static str,
    child: &str,
    value: &Value,
) -> Error {
    Error::CapabilityMismatch {
        parent,
        expected,
        child: child.to_owned(),
        rendering: render(value),
    }
}

/// Compact JSON rendering for diagnostics.
fn render(value: &Value) -> String {
    value.to_string()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

fn block_from(value: &Value, parent: &'static str) -> Result<Block> {
    let Some((tag, content)) = split_tagged(value)? else {
        return Err(capability_error(parent, "Block", type_name(value), value));
    };
    match tag {
        "Plain" => Ok(Block::Plain(inlines_from(content, "Plain")?)),
        "Para" => Ok(Block::Para(inlines_from(content, "Para")?)),
        "BlockQuote" => Ok(Block::BlockQuote(blocks_from(content, "BlockQuote")?)),
        "CodeBlock" => {
            let parts = sized_array("CodeBlock content", content, 2)?;
            Ok(Block::CodeBlock(
                attr_from(&parts[0])?,
                string_field("CodeBlock text", &parts[1])?,
            ))
        }
        "RawBlock" => {
            let parts = sized_array("RawBlock content", content, 2)?;
            Ok(Block::RawBlock(
                raw_format_from(&parts[0])?,
                string_field("RawBlock text", &parts[1])?,
            ))
        }
        "OrderedList" => {
            let parts = sized_array("OrderedList content", content, 2)?;
            Ok(Block::OrderedList(
                list_attributes_from(&parts[0])?,
                list_items_from(&parts[1], "OrderedList")?,
            ))
        }
        "BulletList" => Ok(Block::BulletList(list_items_from(content, "BulletList")?)),
        "DefinitionList" => {
            let mut items = Vec::new();
            for entry in array("DefinitionList content", content)? {
                let pair = sized_array("definition item", entry, 2)?;
                let term = inlines_from(&pair[0], "DefinitionList")?;
                let mut definitions = Vec::new();
                for definition in array("definitions", &pair[1])? {
                    definitions.push(blocks_from(definition, "DefinitionList")?);
                }
                items.push(DefinitionItem { term, definitions });
            }
            Ok(Block::DefinitionList(items))
        }
        "Header" => {
            let parts = sized_array("Header content", content, 3)?;
            let level = parts[0].as_i64().ok_or_else(|| Error::InvalidFieldType {
                what: "header level",
                expected: "an integer",
                found: render(&parts[0]),
            })?;
            Ok(Block::Header(
                HeaderLevel::new(level)?,
                attr_from(&parts[1])?,
                inlines_from(&parts[2], "Header")?,
            ))
        }
        // Leaves take no content; whatever is there is ignored.
        "HorizontalRule" => Ok(Block::HorizontalRule),
        "Null" => Ok(Block::Null),
        "Table" => {
            let parts = sized_array("Table content", content, 5)?;
            let caption = inlines_from(&parts[0], "Table")?;

            let mut alignment = Vec::new();
            for item in array("table alignment", &parts[1])? {
                alignment.push(alignment_from(item)?);
            }

            let mut widths = Vec::new();
            for item in array("table widths", &parts[2])? {
                widths.push(col_width_from(item)?);
            }

            let mut header = Vec::new();
            for cell in array("table header", &parts[3])? {
                header.push(blocks_from(cell, "Table")?);
            }

            let mut rows = Vec::new();
            for row in array("table rows", &parts[4])? {
                let mut cells = Vec::new();
                for cell in array("table row", row)? {
                    cells.push(blocks_from(cell, "Table")?);
                }
                rows.push(cells);
            }

            Ok(Block::Table(Table::new(
                caption, alignment, widths, header, rows,
            )?))
        }
        "Div" => {
            let parts = sized_array("Div content", content, 2)?;
            Ok(Block::Div(
                attr_from(&parts[0])?,
                blocks_from(&parts[1], "Div")?,
            ))
        }
        _ if tags::is_known_tag(tag) => Err(capability_error(parent, "Block", tag, value)),
        _ => Err(Error::UnknownTag(tag.to_owned())),
    }
}

fn blocks_from(value: &Value, parent: &'static str) -> Result<Vec<Block>> {
    let Some(items) = value.as_array() else {
        return Err(Error::ShapeMismatch(format!(
            "{parent} block content must be an array, got {}",
            type_name(value)
        )));
    };
    items.iter().map(|item| block_from(item, parent)).collect()
}

/// List items, each an array of blocks.
fn list_items_from(value: &Value, parent: &'static str) -> Result<Vec<Vec<Block>>> {
    array(parent, value)?
        .iter()
        .map(|item| blocks_from(item, parent))
        .collect()
}

// ---------------------------------------------------------------------------
// Inlines
// ---------------------------------------------------------------------------

fn inline_from(value: &Value, parent: &'static str) -> Result<Inline> {
    let Some((tag, content)) = split_tagged(value)? else {
        return Err(capability_error(parent, "Inline", type_name(value), value));
    };
    match tag {
        "Str" => Ok(Inline::Str(string_field("Str text", content)?)),
        "Emph" => Ok(Inline::Emph(inlines_from(content, "Emph")?)),
        "Strong" => Ok(Inline::Strong(inlines_from(content, "Strong")?)),
        "Strikeout" => Ok(Inline::Strikeout(inlines_from(content, "Strikeout")?)),
        "Superscript" => Ok(Inline::Superscript(inlines_from(content, "Superscript")?)),
        "Subscript" => Ok(Inline::Subscript(inlines_from(content, "Subscript")?)),
        "SmallCaps" => Ok(Inline::SmallCaps(inlines_from(content, "SmallCaps")?)),
        "Quoted" => {
            let parts = sized_array("Quoted content", content, 2)?;
            Ok(Inline::Quoted(
                quote_type_from(&parts[0])?,
                inlines_from(&parts[1], "Quoted")?,
            ))
        }
        "Cite" => {
            let parts = sized_array("Cite content", content, 2)?;
            let mut citations = Vec::new();
            for citation in array("citations", &parts[0])? {
                citations.push(citation_from(citation)?);
            }
            Ok(Inline::Cite(citations, inlines_from(&parts[1], "Cite")?))
        }
        "Code" => {
            let parts = sized_array("Code content", content, 2)?;
            Ok(Inline::Code(
                attr_from(&parts[0])?,
                string_field("Code text", &parts[1])?,
            ))
        }
        // Leaves take no content; whatever is there is ignored.
        "Space" => Ok(Inline::Space),
        "SoftBreak" => Ok(Inline::SoftBreak),
        "LineBreak" => Ok(Inline::LineBreak),
        "Math" => {
            let parts = sized_array("Math content", content, 2)?;
            Ok(Inline::Math(
                math_type_from(&parts[0])?,
                string_field("Math text", &parts[1])?,
            ))
        }
        "RawInline" => {
            let parts = sized_array("RawInline content", content, 2)?;
            Ok(Inline::RawInline(
                raw_format_from(&parts[0])?,
                string_field("RawInline text", &parts[1])?,
            ))
        }
        "Link" => {
            let parts = sized_array("Link content", content, 3)?;
            Ok(Inline::Link(
                attr_from(&parts[0])?,
                inlines_from(&parts[1], "Link")?,
                target_from(&parts[2])?,
            ))
        }
        "Image" => {
            let parts = sized_array("Image content", content, 3)?;
            Ok(Inline::Image(
                attr_from(&parts[0])?,
                inlines_from(&parts[1], "Image")?,
                target_from(&parts[2])?,
            ))
        }
        "Note" => Ok(Inline::Note(blocks_from(content, "Note")?)),
        "Span" => {
            let parts = sized_array("Span content", content, 2)?;
            Ok(Inline::Span(
                attr_from(&parts[0])?,
                inlines_from(&parts[1], "Span")?,
            ))
        }
        _ if tags::is_known_tag(tag) => Err(capability_error(parent, "Inline", tag, value)),
        _ => Err(Error::UnknownTag(tag.to_owned())),
    }
}

fn inlines_from(value: &Value, parent: &'static str) -> Result<Vec<Inline>> {
    let Some(items) = value.as_array() else {
        return Err(Error::ShapeMismatch(format!(
            "{parent} inline content must be an array, got {}",
            type_name(value)
        )));
    };
    items.iter().map(|item| inline_from(item, parent)).collect()
}

// ---------------------------------------------------------------------------
// Field types
// ---------------------------------------------------------------------------

fn string_field(what: &'static str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| Error::InvalidFieldType {
            what,
            expected: "a string",
            found: render(value),
        })
}

fn array<'a>(what: &str, value: &'a Value) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| Error::ShapeMismatch(format!(
            "{what} must be an array, got {}",
            type_name(value)
        )))
}

fn sized_array<'a>(what: &str, value: &'a Value, n: usize) -> Result<&'a [Value]> {
    let parts = array(what, value)?;
    if parts.len() != n {
        return Err(Error::ShapeMismatch(format!(
            "{what} must have {n} elements, got {}",
            parts.len()
        )));
    }
    Ok(parts)
}

/// A vocabulary member: `{"t": name, "c": []}`, or the bare name string.
fn vocab_name<'a>(what: &'static str, value: &'a Value) -> Result<&'a str> {
    if let Some(name) = value.as_str() {
        return Ok(name);
    }
    match split_tagged(value)? {
        Some((tag, _)) => Ok(tag),
        None => Err(Error::InvalidFieldType {
            what,
            expected: "a tagged name",
            found: render(value),
        }),
    }
}

fn alignment_from(value: &Value) -> Result<Alignment> {
    let name = vocab_name("table alignment", value)?;
    Alignment::from_tag(name).ok_or_else(|| Error::InvalidEnumValue {
        field: "table alignment",
        value: name.to_owned(),
    })
}

fn quote_type_from(value: &Value) -> Result<QuoteType> {
    let name = vocab_name("quote type", value)?;
    QuoteType::from_tag(name).ok_or_else(|| Error::InvalidEnumValue {
        field: "quote type",
        value: name.to_owned(),
    })
}

fn math_type_from(value: &Value) -> Result<MathType> {
    let name = vocab_name("math mode", value)?;
    MathType::from_tag(name).ok_or_else(|| Error::InvalidEnumValue {
        field: "math mode",
        value: name.to_owned(),
    })
}

fn citation_mode_from(value: &Value) -> Result<CitationMode> {
    let name = vocab_name("citation mode", value)?;
    CitationMode::from_tag(name).ok_or_else(|| Error::InvalidEnumValue {
        field: "citation mode",
        value: name.to_owned(),
    })
}

fn raw_format_from(value: &Value) -> Result<RawFormat> {
    let name = string_field("raw format", value)?;
    RawFormat::from_name(&name).ok_or_else(|| Error::InvalidEnumValue {
        field: "raw format",
        value: name,
    })
}

/// The attribute triple `[identifier, [classes], [[key, value]]]`.
fn attr_from(value: &Value) -> Result<Attr> {
    let parts = sized_array("attribute bundle", value, 3)?;
    let identifier = string_field("identifier", &parts[0])?;

    let mut classes = Vec::new();
    for class in array("classes", &parts[1])? {
        classes.push(string_field("class", class)?);
    }

    let mut attributes = IndexMap::new();
    for pair in array("attribute pairs", &parts[2])? {
        let kv = sized_array("attribute pair", pair, 2)?;
        attributes.insert(
            string_field("attribute key", &kv[0])?,
            string_field("attribute value", &kv[1])?,
        );
    }

    Ok(Attr {
        identifier,
        classes,
        attributes,
    })
}

/// The link target pair `[url, title]`.
fn target_from(value: &Value) -> Result<Target> {
    let parts = sized_array("link target", value, 2)?;
    Ok(Target {
        url: string_field("target url", &parts[0])?,
        title: string_field("target title", &parts[1])?,
    })
}

/// The numbering descriptor `[start, style, delimiter]`.
fn list_attributes_from(value: &Value) -> Result<ListAttributes> {
    let parts = sized_array("numbering descriptor", value, 3)?;
    let start = parts[0].as_u64().ok_or_else(|| Error::InvalidFieldType {
        what: "list start",
        expected: "a non-negative integer",
        found: render(&parts[0]),
    })?;

    let style_name = vocab_name("list numbering style", &parts[1])?;
    let style = ListNumberStyle::from_tag(style_name).ok_or_else(|| Error::InvalidEnumValue {
        field: "list numbering style",
        value: style_name.to_owned(),
    })?;

    let delim_name = vocab_name("list numbering delimiter", &parts[2])?;
    let delim = ListNumberDelim::from_tag(delim_name).ok_or_else(|| Error::InvalidEnumValue {
        field: "list numbering delimiter",
        value: delim_name.to_owned(),
    })?;

    Ok(ListAttributes { start, style, delim })
}

// ---------------------------------------------------------------------------
// Citations
// ---------------------------------------------------------------------------

const CITATION_KEYS: [&str; 6] = [
    "citationId",
    "citationPrefix",
    "citationSuffix",
    "citationMode",
    "citationNoteNum",
    "citationHash",
];

/// A citation record: an object keyed by the six citation field names, in
/// any order, with no extras.
fn citation_from(value: &Value) -> Result<Citation> {
    let Some(obj) = value.as_object() else {
        return Err(Error::ShapeMismatch(format!(
            "citation record must be an object, got {}",
            type_name(value)
        )));
    };
    for key in obj.keys() {
        if !CITATION_KEYS.contains(&key.as_str()) {
            return Err(Error::ShapeMismatch(format!(
                "citation record has unexpected key {key:?}"
            )));
        }
    }
    let field = |key: &'static str| {
        obj.get(key).ok_or_else(|| {
            Error::ShapeMismatch(format!("citation record is missing key {key:?}"))
        })
    };

    Ok(Citation {
        id: string_field("citation id", field("citationId")?)?,
        prefix: inlines_from(field("citationPrefix")?, "Citation")?,
        suffix: inlines_from(field("citationSuffix")?, "Citation")?,
        mode: citation_mode_from(field("citationMode")?)?,
        note_num: citation_scalar_from("citation note number", field("citationNoteNum")?)?,
        hash: citation_scalar_from("citation hash", field("citationHash")?)?,
    })
}

/// Column widths keep their wire spelling: integer stays integer, float
/// stays float, so re-encoding reproduces the bytes. Validation happens in
/// the table constructor, on the numeric value.
fn col_width_from(value: &Value) -> Result<ColWidth> {
    if let Some(n) = value.as_u64() {
        Ok(ColWidth::Int(n))
    } else if let Some(x) = value.as_f64() {
        Ok(ColWidth::Float(x))
    } else {
        Err(Error::InvalidFieldType {
            what: "table column width",
            expected: "a number",
            found: render(value),
        })
    }
}

/// Opaque citation counters pass through as the integer or string found.
fn citation_scalar_from(what: &'static str, value: &Value) -> Result<CitationScalar> {
    if let Some(n) = value.as_i64() {
        Ok(CitationScalar::Int(n))
    } else if let Some(s) = value.as_str() {
        Ok(CitationScalar::Str(s.to_owned()))
    } else {
        Err(Error::InvalidFieldType {
            what,
            expected: "an integer or string",
            found: render(value),
        })
    }
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

/// The document's metadata wrapper: an object with the single key `unMeta`.
fn unmeta_from(value: &Value) -> Result<MetaMap> {
    let Some(obj) = value.as_object() else {
        return Err(Error::ShapeMismatch(format!(
            "document metadata must be an object with the single key \"unMeta\", got {}",
            type_name(value)
        )));
    };
    match obj.iter().next() {
        Some((key, meta)) if key == "unMeta" && obj.len() == 1 => meta_map_from(meta),
        _ => Err(Error::ShapeMismatch(
            "document metadata must be an object with the single key \"unMeta\"".to_owned(),
        )),
    }
}

fn meta_map_from(value: &Value) -> Result<MetaMap> {
    match value {
        // Some emitters spell an empty map as an empty pair list.
        Value::Array(items) if items.is_empty() => Ok(MetaMap::new()),
        Value::Object(obj) => {
            let mut map = MetaMap::new();
            for (key, item) in obj {
                map.insert(key.clone(), decode_meta(item)?);
            }
            Ok(map)
        }
        _ => Err(Error::ShapeMismatch(format!(
            "metadata map must be an object, got {}",
            type_name(value)
        ))),
    }
}

fn meta_from_tagged(tag: &str, content: &Value, whole: &Value) -> Result<MetaValue> {
    match tag {
        "MetaString" => Ok(MetaValue::String(string_field(
            "MetaString content",
            content,
        )?)),
        "MetaBool" => match content {
            Value::Bool(b) => Ok(MetaValue::Bool(*b)),
            _ => Err(Error::InvalidFieldType {
                what: "MetaBool content",
                expected: "a boolean",
                found: render(content),
            }),
        },
        "MetaList" => array("MetaList content", content)?
            .iter()
            .map(decode_meta)
            .collect::<Result<Vec<_>>>()
            .map(MetaValue::List),
        "MetaMap" => meta_map_from(content).map(MetaValue::Map),
        "MetaInlines" => inlines_from(content, "MetaInlines").map(MetaValue::Inlines),
        "MetaBlocks" => blocks_from(content, "MetaBlocks").map(MetaValue::Blocks),
        // A vocabulary tag in metadata position reduces to its bare name.
        _ if tags::is_vocabulary_tag(tag) => Ok(MetaValue::String(tag.to_owned())),
        _ if tags::is_known_tag(tag) => Err(capability_error("metadata", "metadata", tag, whole)),
        _ => Err(Error::UnknownTag(tag.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_str_roundtrip() {
        let wire = json!({"t": "Str", "c": "hello"});
        assert_eq!(decode_inline(&wire).unwrap(), Inline::Str("hello".into()));
    }

    #[test]
    fn test_para_with_mixed_inlines() {
        let wire = json!({"t": "Para", "c": [
            {"t": "Str", "c": "a"},
            {"t": "Space", "c": []},
            {"t": "Emph", "c": [{"t": "Str", "c": "b"}]}
        ]});
        let block = decode_block(&wire).unwrap();
        assert_eq!(
            block,
            Block::Para(vec![
                Inline::Str("a".into()),
                Inline::Space,
                Inline::Emph(vec![Inline::Str("b".into())]),
            ])
        );
    }

    #[test]
    fn test_leaves_ignore_content() {
        assert_eq!(
            decode_inline(&json!({"t": "Space", "c": "ignored"})).unwrap(),
            Inline::Space
        );
        assert_eq!(
            decode_block(&json!({"t": "Null", "c": [1, 2, 3]})).unwrap(),
            Block::Null
        );
    }

    #[test]
    fn test_header_decodes_level_attr_inlines() {
        let wire = json!({"t": "Header", "c": [
            2,
            ["sec1", ["wide"], [["lang", "en"]]],
            [{"t": "Str", "c": "Title"}]
        ]});
        let Block::Header(level, attr, inlines) = decode_block(&wire).unwrap() else {
            panic!("expected a Header");
        };
        assert_eq!(level.get(), 2);
        assert_eq!(attr.identifier, "sec1");
        assert_eq!(attr.classes, vec!["wide"]);
        assert_eq!(attr.get("lang"), Some("en"));
        assert_eq!(inlines, vec![Inline::Str("Title".into())]);
    }

    #[test]
    fn test_header_level_out_of_range() {
        for level in [0, 7] {
            let wire = json!({"t": "Header", "c": [level, ["", [], []], []]});
            let err = decode_block(&wire).unwrap_err();
            assert!(matches!(err, Error::InvalidEnumValue { field: "header level", .. }));
        }
    }

    #[test]
    fn test_header_level_wrong_type() {
        let wire = json!({"t": "Header", "c": ["3", ["", [], []], []]});
        let err = decode_block(&wire).unwrap_err();
        assert!(matches!(err, Error::InvalidFieldType { what: "header level", .. }));
    }

    #[test]
    fn test_unknown_tag_is_fatal() {
        let err = decode_block(&json!({"t": "FutureBlock", "c": []})).unwrap_err();
        assert!(matches!(err, Error::UnknownTag(tag) if tag == "FutureBlock"));
    }

    #[test]
    fn test_block_in_inline_position() {
        let wire = json!({"t": "Para", "c": [{"t": "Div", "c": [["", [], []], []]}]});
        let err = decode_block(&wire).unwrap_err();
        match err {
            Error::CapabilityMismatch {
                parent,
                expected,
                child,
                ..
            } => {
                assert_eq!(parent, "Para");
                assert_eq!(expected, "Inline");
                assert_eq!(child, "Div");
            }
            other => panic!("wrong error: {other:?}"),
        }
    }

    #[test]
    fn test_inline_in_block_position() {
        let wire = json!({"t": "BlockQuote", "c": [{"t": "Emph", "c": []}]});
        let err = decode_block(&wire).unwrap_err();
        match err {
            Error::CapabilityMismatch {
                parent, expected, child, ..
            } => {
                assert_eq!(parent, "BlockQuote");
                assert_eq!(expected, "Block");
                assert_eq!(child, "Emph");
            }
            other => panic!("wrong error: {other:?}"),
        }
    }

    #[test]
    fn test_bare_value_in_element_position() {
        let wire = json!({"t": "Para", "c": ["just a string"]});
        let err = decode_block(&wire).unwrap_err();
        match err {
            Error::CapabilityMismatch { child, rendering, .. } => {
                assert_eq!(child, "a string");
                assert_eq!(rendering, "\"just a string\"");
            }
            other => panic!("wrong error: {other:?}"),
        }
    }

    #[test]
    fn test_tag_must_come_first() {
        // "c" before "t" is not a tagged value at all.
        let mut obj = serde_json::Map::new();
        obj.insert("c".to_owned(), json!([]));
        obj.insert("t".to_owned(), json!("Para"));
        let err = decode_block(&Value::Object(obj)).unwrap_err();
        assert!(matches!(err, Error::CapabilityMismatch { .. }));
    }

    #[test]
    fn test_missing_content_marker() {
        let err = decode_block(&json!({"t": "Para"})).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(_)));
    }

    #[test]
    fn test_quote_type_enum_enforced() {
        let wire = json!({"t": "Quoted", "c": [{"t": "TripleQuote", "c": []}, []]});
        let err = decode_inline(&wire).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEnumValue { field: "quote type", value } if value == "TripleQuote"
        ));
    }

    #[test]
    fn test_raw_format_enum_enforced() {
        let ok = decode_block(&json!({"t": "RawBlock", "c": ["html", "<hr>"]})).unwrap();
        assert_eq!(ok, Block::RawBlock(RawFormat::Html, "<hr>".into()));

        let err = decode_block(&json!({"t": "RawBlock", "c": ["markdown", "*"]})).unwrap_err();
        assert!(matches!(err, Error::InvalidEnumValue { field: "raw format", .. }));
    }

    #[test]
    fn test_ordered_list_descriptor() {
        let wire = json!({"t": "OrderedList", "c": [
            [3, {"t": "LowerAlpha", "c": []}, {"t": "TwoParens", "c": []}],
            [[{"t": "Plain", "c": [{"t": "Str", "c": "x"}]}]]
        ]});
        let Block::OrderedList(attrs, items) = decode_block(&wire).unwrap() else {
            panic!("expected an OrderedList");
        };
        assert_eq!(attrs.start, 3);
        assert_eq!(attrs.style, ListNumberStyle::LowerAlpha);
        assert_eq!(attrs.delim, ListNumberDelim::TwoParens);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_list_start_must_be_integral() {
        let bad = json!({"t": "OrderedList", "c": [
            [1.5, {"t": "Decimal", "c": []}, {"t": "Period", "c": []}], []
        ]});
        let err = decode_block(&bad).unwrap_err();
        assert!(matches!(err, Error::InvalidFieldType { what: "list start", .. }));

        let negative = json!({"t": "OrderedList", "c": [
            [-1, {"t": "Decimal", "c": []}, {"t": "Period", "c": []}], []
        ]});
        let err = decode_block(&negative).unwrap_err();
        assert!(matches!(err, Error::InvalidFieldType { what: "list start", .. }));
    }

    #[test]
    fn test_table_geometry_checked_from_wire() {
        // Header has 2 cells, the single body row has 3.
        let wire = json!({"t": "Table", "c": [
            [],
            [{"t": "AlignDefault", "c": []}, {"t": "AlignDefault", "c": []}, {"t": "AlignDefault", "c": []}],
            [0.0, 0.0, 0.0],
            [[], []],
            [[[], [], []]]
        ]});
        let err = decode_block(&wire).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(_)));
    }

    #[test]
    fn test_table_alignment_count_checked_from_wire() {
        // One alignment for a two-column table.
        let wire = json!({"t": "Table", "c": [
            [],
            [{"t": "AlignLeft", "c": []}],
            [0.5, 0.5],
            [[], []],
            [[[], []]]
        ]});
        let err = decode_block(&wire).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(_)));
    }

    #[test]
    fn test_table_integer_widths_keep_their_spelling() {
        let wire = json!({"t": "Table", "c": [
            [{"t": "Str", "c": "cap"}],
            [{"t": "AlignLeft", "c": []}],
            [0],
            [[{"t": "Plain", "c": [{"t": "Str", "c": "h"}]}]],
            [[[{"t": "Plain", "c": [{"t": "Str", "c": "b"}]}]]]
        ]});
        let Block::Table(table) = decode_block(&wire).unwrap() else {
            panic!("expected a Table");
        };
        // Integer-spelled, so it must not come back as Float(0.0).
        assert_eq!(table.widths(), &[ColWidth::Int(0)]);
        assert_eq!(table.alignment(), &[Alignment::AlignLeft]);
        assert_eq!(table.caption(), &[Inline::Str("cap".into())]);
    }

    #[test]
    fn test_citation_decodes_by_key_in_any_order() {
        let wire = json!({"t": "Cite", "c": [
            [{
                "citationId": "knuth1984",
                "citationHash": 0,
                "citationNoteNum": 1,
                "citationMode": {"t": "SuppressAuthor", "c": []},
                "citationPrefix": [{"t": "Str", "c": "see"}],
                "citationSuffix": []
            }],
            [{"t": "Str", "c": "[1]"}]
        ]});
        let Inline::Cite(citations, inlines) = decode_inline(&wire).unwrap() else {
            panic!("expected a Cite");
        };
        assert_eq!(citations.len(), 1);
        let citation = &citations[0];
        assert_eq!(citation.id, "knuth1984");
        assert_eq!(citation.mode, CitationMode::SuppressAuthor);
        assert_eq!(citation.note_num, CitationScalar::Int(1));
        assert_eq!(citation.prefix, vec![Inline::Str("see".into())]);
        assert_eq!(inlines, vec![Inline::Str("[1]".into())]);
    }

    #[test]
    fn test_citation_missing_key() {
        let wire = json!({"t": "Cite", "c": [[{"citationId": "x"}], []]});
        let err = decode_inline(&wire).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(msg) if msg.contains("missing key")));
    }

    #[test]
    fn test_citation_unexpected_key() {
        let wire = json!({"t": "Cite", "c": [
            [{
                "citationId": "x",
                "citationHash": 0,
                "citationNoteNum": 0,
                "citationMode": "NormalCitation",
                "citationPrefix": [],
                "citationSuffix": [],
                "citationColor": "red"
            }],
            []
        ]});
        let err = decode_inline(&wire).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(msg) if msg.contains("unexpected key")));
    }

    #[test]
    fn test_citation_mode_accepts_bare_name() {
        let wire = json!({"t": "Cite", "c": [
            [{
                "citationId": "x",
                "citationHash": "opaque",
                "citationNoteNum": 0,
                "citationMode": "AuthorInText",
                "citationPrefix": [],
                "citationSuffix": []
            }],
            []
        ]});
        let Inline::Cite(citations, _) = decode_inline(&wire).unwrap() else {
            panic!("expected a Cite");
        };
        assert_eq!(citations[0].mode, CitationMode::AuthorInText);
        assert_eq!(citations[0].hash, CitationScalar::Str("opaque".into()));
    }

    #[test]
    fn test_meta_bare_and_tagged_strings_agree() {
        assert_eq!(
            decode_meta(&json!("plain")).unwrap(),
            MetaValue::String("plain".into())
        );
        assert_eq!(
            decode_meta(&json!({"t": "MetaString", "c": "plain"})).unwrap(),
            MetaValue::String("plain".into())
        );
    }

    #[test]
    fn test_meta_bool_content_checked() {
        assert_eq!(
            decode_meta(&json!({"t": "MetaBool", "c": false})).unwrap(),
            MetaValue::Bool(false)
        );
        let err = decode_meta(&json!({"t": "MetaBool", "c": "yes"})).unwrap_err();
        assert!(matches!(err, Error::InvalidFieldType { what: "MetaBool content", .. }));
    }

    #[test]
    fn test_meta_map_and_list() {
        let wire = json!({"t": "MetaMap", "c": {
            "authors": {"t": "MetaList", "c": ["a", "b"]},
            "draft": {"t": "MetaBool", "c": true}
        }});
        let MetaValue::Map(map) = decode_meta(&wire).unwrap() else {
            panic!("expected a map");
        };
        assert_eq!(
            map.get("authors"),
            Some(&MetaValue::List(vec![
                MetaValue::String("a".into()),
                MetaValue::String("b".into()),
            ]))
        );
        assert_eq!(map.get("draft"), Some(&MetaValue::Bool(true)));
    }

    #[test]
    fn test_meta_inlines() {
        let wire = json!({"t": "MetaInlines", "c": [{"t": "Str", "c": "T"}]});
        assert_eq!(
            decode_meta(&wire).unwrap(),
            MetaValue::Inlines(vec![Inline::Str("T".into())])
        );
    }

    #[test]
    fn test_vocabulary_tag_in_meta_reduces_to_name() {
        assert_eq!(
            decode_meta(&json!({"t": "Decimal", "c": []})).unwrap(),
            MetaValue::String("Decimal".into())
        );
    }

    #[test]
    fn test_element_tag_in_meta_rejected() {
        let err = decode_meta(&json!({"t": "Para", "c": []})).unwrap_err();
        assert!(matches!(err, Error::CapabilityMismatch { .. }));
    }

    #[test]
    fn test_doc_minimal() {
        let doc = decode_doc(&json!([{"unMeta": {}}, []]), "html").unwrap();
        assert!(doc.meta.is_empty());
        assert!(doc.blocks.is_empty());
        assert_eq!(doc.format, "html");
    }

    #[test]
    fn test_doc_empty_meta_as_pair_list() {
        let doc = decode_doc(&json!([{"unMeta": []}, []]), "html").unwrap();
        assert!(doc.meta.is_empty());
    }

    #[test]
    fn test_doc_shape_enforced() {
        assert!(matches!(
            decode_doc(&json!([{"unMeta": {}}]), "html").unwrap_err(),
            Error::ShapeMismatch(_)
        ));
        assert!(matches!(
            decode_doc(&json!([{"notMeta": {}}, []]), "html").unwrap_err(),
            Error::ShapeMismatch(_)
        ));
        assert!(matches!(
            decode_doc(&json!([{"unMeta": {}, "extra": 1}, []]), "html").unwrap_err(),
            Error::ShapeMismatch(_)
        ));
    }
}
