//! The typed document tree.
//!
//! This module contains:
//! - Block and inline element enums with their field types
//! - Attribute bundles, link targets, citations
//! - Table geometry with construction-time validation
//! - Metadata values and the document root
//! - Visitors for read-only and in-place traversal

mod attr;
mod block;
mod citation;
mod doc;
mod inline;
mod meta;
mod table;
pub mod tags;
pub mod walk;

// Re-export element types
pub use attr::Attr;
pub use block::{Block, DefinitionItem, HeaderLevel, ListAttributes, ListItem};
pub use citation::{Citation, CitationScalar};
pub use inline::{Inline, Target};
pub use table::{ColWidth, Table, TableCell, TableRow};

// Re-export metadata and the document root
pub use doc::Doc;
pub use meta::{MetaMap, MetaValue};

// Re-export the closed vocabularies
pub use tags::{
    Alignment, CitationMode, ListNumberDelim, ListNumberStyle, MathType, QuoteType, RawFormat,
};

// Re-export the visitors
pub use walk::{
    MutVisitor, Visitor, walk_block, walk_block_mut, walk_citation, walk_citation_mut, walk_doc,
    walk_doc_mut, walk_inline, walk_inline_mut, walk_meta_value, walk_meta_value_mut,
};
