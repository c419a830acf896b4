//! # panpipe
//!
//! A typed document tree for pandoc's JSON interface, with a lossless codec
//! to and from the tagged wire format pandoc pipes through its filters.
//!
//! ## Features
//!
//! - Full block and inline vocabulary: headings, lists, tables, quotes,
//!   code, math, links, images, footnotes, citations
//! - Typed metadata with dotted-path lookup via [`Doc::get_metadata`]
//! - Exact wire fidelity: re-encoding a decoded document reproduces the
//!   original JSON
//! - Visitor-based tree walking, read-only or in place, for filter-style
//!   transformations
//!
//! ## Quick Start
//!
//! ```
//! use panpipe::{Block, Doc, Inline};
//!
//! let doc = Doc::new(vec![Block::Para(vec![
//!     Inline::Str("Hello".into()),
//!     Inline::Space,
//!     Inline::Strong(vec![Inline::Str("world".into())]),
//! ])]);
//!
//! let wire = panpipe::write_doc_string(&doc);
//! let back = panpipe::read_doc_str(&wire, "html").unwrap();
//! assert_eq!(back, doc);
//! ```
//!
//! ## Writing a Filter
//!
//! A pandoc filter reads a document on stdin, rewrites it, and writes it
//! back on stdout:
//!
//! ```no_run
//! use panpipe::{Block, Doc};
//!
//! fn main() -> panpipe::Result<()> {
//!     panpipe::run_filter(|doc: &mut Doc| {
//!         doc.blocks.retain(|block| !matches!(block, Block::HorizontalRule));
//!     })
//! }
//! ```

pub mod ast;
pub mod error;
pub mod io;
pub mod json;

pub use ast::{
    Alignment, Attr, Block, Citation, CitationMode, CitationScalar, ColWidth, DefinitionItem, Doc,
    HeaderLevel, Inline, ListAttributes, ListItem, ListNumberDelim, ListNumberStyle, MathType,
    MetaMap, MetaValue, MutVisitor, QuoteType, RawFormat, Table, TableCell, TableRow, Target,
    Visitor, walk_block, walk_block_mut, walk_citation, walk_citation_mut, walk_doc, walk_doc_mut,
    walk_inline, walk_inline_mut, walk_meta_value, walk_meta_value_mut,
};
pub use error::{Error, Result};
pub use io::{filter, read_doc, read_doc_str, run_filter, write_doc, write_doc_string};
pub use json::{
    decode_block, decode_doc, decode_inline, decode_meta, encode_block, encode_doc, encode_inline,
    encode_meta,
};
