//! Reading and writing wire documents.
//!
//! Thin wrappers over the [`json`](crate::json) codec for the places
//! documents actually live: files, strings, and the stdin/stdout pipe of a
//! pandoc filter.

use std::io::{Read, Write};

use serde_json::Value;

use crate::ast::Doc;
use crate::error::Result;
use crate::json::{decode_doc, encode_doc};

/// Read a wire document from `reader`.
///
/// `format` is the output format the document is headed for; the wire does
/// not carry it, so it is supplied here (a pandoc filter receives it as its
/// first argument).
pub fn read_doc<R: Read>(reader: R, format: &str) -> Result<Doc> {
    let wire: Value = serde_json::from_reader(reader)?;
    decode_doc(&wire, format)
}

/// Read a wire document from a string.
pub fn read_doc_str(wire: &str, format: &str) -> Result<Doc> {
    let wire: Value = serde_json::from_str(wire)?;
    decode_doc(&wire, format)
}

/// Write `doc` to `writer` as compact wire JSON.
pub fn write_doc<W: Write>(doc: &Doc, mut writer: W) -> Result<()> {
    serde_json::to_writer(&mut writer, &encode_doc(doc))?;
    Ok(())
}

/// Render `doc` as a compact wire JSON string.
pub fn write_doc_string(doc: &Doc) -> String {
    encode_doc(doc).to_string()
}

/// Read a document from `reader`, apply `f`, and write the result to
/// `writer`.
///
/// This is the core of a pandoc filter with the pipe ends made explicit,
/// which keeps it testable against in-memory buffers.
pub fn filter<R, W, F>(reader: R, writer: W, format: &str, f: F) -> Result<()>
where
    R: Read,
    W: Write,
    F: FnOnce(&mut Doc),
{
    let mut doc = read_doc(reader, format)?;
    f(&mut doc);
    write_doc(&doc, writer)
}

/// Run `f` as a pandoc filter over stdin/stdout.
///
/// Pandoc invokes filters as `filter FORMAT` with the document on stdin and
/// expects the transformed document on stdout; the format defaults to
/// `html` when no argument is given.
pub fn run_filter<F>(f: F) -> Result<()>
where
    F: FnOnce(&mut Doc),
{
    let format = std::env::args().nth(1).unwrap_or_else(|| "html".to_owned());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    filter(stdin.lock(), stdout.lock(), &format, f)
}
