//! Traversal over a document tree.
//!
//! The [`Visitor`] trait visits every element in document order, including
//! the corners that are easy to forget: table captions and cells, footnote
//! bodies, citation prefixes and suffixes, and inline or block snippets
//! stored in metadata. [`MutVisitor`] is its counterpart for in-place
//! transformation, which is how a filter rewrites a document.

use super::block::Block;
use super::citation::Citation;
use super::doc::Doc;
use super::inline::Inline;
use super::meta::MetaValue;

/// A document visitor.
///
/// Every `visit_*` method defaults to recursing into children via the
/// matching `walk_*` function, so an implementation overrides only the
/// hooks it cares about, calling the `walk_*` itself if it still wants
/// the recursion underneath.
pub trait Visitor {
    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_inline(&mut self, inline: &Inline) {
        walk_inline(self, inline);
    }

    fn visit_citation(&mut self, citation: &Citation) {
        walk_citation(self, citation);
    }

    fn visit_meta_value(&mut self, value: &MetaValue) {
        walk_meta_value(self, value);
    }
}

/// Walk a whole document: metadata values first, then the block sequence.
pub fn walk_doc<V: Visitor + ?Sized>(visitor: &mut V, doc: &Doc) {
    for value in doc.meta.values() {
        visitor.visit_meta_value(value);
    }
    for block in &doc.blocks {
        visitor.visit_block(block);
    }
}

/// Recurse into the children of one block.
pub fn walk_block<V: Visitor + ?Sized>(visitor: &mut V, block: &Block) {
    match block {
        Block::Plain(inlines) | Block::Para(inlines) | Block::Header(_, _, inlines) => {
            visit_inlines(visitor, inlines);
        }
        Block::BlockQuote(blocks) | Block::Div(_, blocks) => {
            visit_blocks(visitor, blocks);
        }
        Block::OrderedList(_, items) => {
            for item in items {
                visit_blocks(visitor, item);
            }
        }
        Block::BulletList(items) => {
            for item in items {
                visit_blocks(visitor, item);
            }
        }
        Block::DefinitionList(items) => {
            for item in items {
                visit_inlines(visitor, &item.term);
                for definition in &item.definitions {
                    visit_blocks(visitor, definition);
                }
            }
        }
        Block::Table(table) => {
            visit_inlines(visitor, table.caption());
            for cell in table.header() {
                visit_blocks(visitor, cell);
            }
            for row in table.rows() {
                for cell in row {
                    visit_blocks(visitor, cell);
                }
            }
        }
        Block::CodeBlock(_, _) | Block::RawBlock(_, _) | Block::HorizontalRule | Block::Null => {}
    }
}

/// Recurse into the children of one inline.
pub fn walk_inline<V: Visitor + ?Sized>(visitor: &mut V, inline: &Inline) {
    match inline {
        Inline::Emph(inlines)
        | Inline::Strong(inlines)
        | Inline::Strikeout(inlines)
        | Inline::Superscript(inlines)
        | Inline::Subscript(inlines)
        | Inline::SmallCaps(inlines)
        | Inline::Quoted(_, inlines)
        | Inline::Span(_, inlines)
        | Inline::Link(_, inlines, _)
        | Inline::Image(_, inlines, _) => {
            visit_inlines(visitor, inlines);
        }
        Inline::Cite(citations, inlines) => {
            for citation in citations {
                visitor.visit_citation(citation);
            }
            visit_inlines(visitor, inlines);
        }
        Inline::Note(blocks) => {
            visit_blocks(visitor, blocks);
        }
        Inline::Str(_)
        | Inline::Code(_, _)
        | Inline::Math(_, _)
        | Inline::RawInline(_, _)
        | Inline::Space
        | Inline::SoftBreak
        | Inline::LineBreak => {}
    }
}

/// Recurse into a citation's prefix and suffix inlines.
pub fn walk_citation<V: Visitor + ?Sized>(visitor: &mut V, citation: &Citation) {
    visit_inlines(visitor, &citation.prefix);
    visit_inlines(visitor, &citation.suffix);
}

/// Recurse into the children of one metadata value.
pub fn walk_meta_value<V: Visitor + ?Sized>(visitor: &mut V, value: &MetaValue) {
    match value {
        MetaValue::List(items) => {
            for item in items {
                visitor.visit_meta_value(item);
            }
        }
        MetaValue::Map(map) => {
            for item in map.values() {
                visitor.visit_meta_value(item);
            }
        }
        MetaValue::Inlines(inlines) => visit_inlines(visitor, inlines),
        MetaValue::Blocks(blocks) => visit_blocks(visitor, blocks),
        MetaValue::String(_) | MetaValue::Bool(_) => {}
    }
}

fn visit_blocks<V: Visitor + ?Sized>(visitor: &mut V, blocks: &[Block]) {
    for block in blocks {
        visitor.visit_block(block);
    }
}

fn visit_inlines<V: Visitor + ?Sized>(visitor: &mut V, inlines: &[Inline]) {
    for inline in inlines {
        visitor.visit_inline(inline);
    }
}

/// A document visitor with mutable access, for in-place transformation.
///
/// Mirror of [`Visitor`]: every `visit_*_mut` hook defaults to recursing via
/// the matching `walk_*_mut` function. A hook may rewrite the element it
/// receives, including replacing it with a different kind; deleting an
/// element outright is spelled by replacing it with [`Block::Null`] or by
/// editing the owning sequence where the hook matches the container.
pub trait MutVisitor {
    fn visit_block_mut(&mut self, block: &mut Block) {
        walk_block_mut(self, block);
    }

    fn visit_inline_mut(&mut self, inline: &mut Inline) {
        walk_inline_mut(self, inline);
    }

    fn visit_citation_mut(&mut self, citation: &mut Citation) {
        walk_citation_mut(self, citation);
    }

    fn visit_meta_value_mut(&mut self, value: &mut MetaValue) {
        walk_meta_value_mut(self, value);
    }
}

/// Mutably walk a whole document: metadata values first, then the blocks.
pub fn walk_doc_mut<V: MutVisitor + ?Sized>(visitor: &mut V, doc: &mut Doc) {
    for value in doc.meta.values_mut() {
        visitor.visit_meta_value_mut(value);
    }
    for block in &mut doc.blocks {
        visitor.visit_block_mut(block);
    }
}

/// Mutably recurse into the children of one block.
pub fn walk_block_mut<V: MutVisitor + ?Sized>(visitor: &mut V, block: &mut Block) {
    match block {
        Block::Plain(inlines) | Block::Para(inlines) | Block::Header(_, _, inlines) => {
            visit_inlines_mut(visitor, inlines);
        }
        Block::BlockQuote(blocks) | Block::Div(_, blocks) => {
            visit_blocks_mut(visitor, blocks);
        }
        Block::OrderedList(_, items) => {
            for item in items {
                visit_blocks_mut(visitor, item);
            }
        }
        Block::BulletList(items) => {
            for item in items {
                visit_blocks_mut(visitor, item);
            }
        }
        Block::DefinitionList(items) => {
            for item in items {
                visit_inlines_mut(visitor, &mut item.term);
                for definition in &mut item.definitions {
                    visit_blocks_mut(visitor, definition);
                }
            }
        }
        Block::Table(table) => {
            visit_inlines_mut(visitor, table.caption_mut());
            for cell in table.cells_mut() {
                visit_blocks_mut(visitor, cell);
            }
        }
        Block::CodeBlock(_, _) | Block::RawBlock(_, _) | Block::HorizontalRule | Block::Null => {}
    }
}

/// Mutably recurse into the children of one inline.
pub fn walk_inline_mut<V: MutVisitor + ?Sized>(visitor: &mut V, inline: &mut Inline) {
    match inline {
        Inline::Emph(inlines)
        | Inline::Strong(inlines)
        | Inline::Strikeout(inlines)
        | Inline::Superscript(inlines)
        | Inline::Subscript(inlines)
        | Inline::SmallCaps(inlines)
        | Inline::Quoted(_, inlines)
        | Inline::Span(_, inlines)
        | Inline::Link(_, inlines, _)
        | Inline::Image(_, inlines, _) => {
            visit_inlines_mut(visitor, inlines);
        }
        Inline::Cite(citations, inlines) => {
            for citation in citations {
                visitor.visit_citation_mut(citation);
            }
            visit_inlines_mut(visitor, inlines);
        }
        Inline::Note(blocks) => {
            visit_blocks_mut(visitor, blocks);
        }
        Inline::Str(_)
        | Inline::Code(_, _)
        | Inline::Math(_, _)
        | Inline::RawInline(_, _)
        | Inline::Space
        | Inline::SoftBreak
        | Inline::LineBreak => {}
    }
}

/// Mutably recurse into a citation's prefix and suffix inlines.
pub fn walk_citation_mut<V: MutVisitor + ?Sized>(visitor: &mut V, citation: &mut Citation) {
    visit_inlines_mut(visitor, &mut citation.prefix);
    visit_inlines_mut(visitor, &mut citation.suffix);
}

/// Mutably recurse into the children of one metadata value.
pub fn walk_meta_value_mut<V: MutVisitor + ?Sized>(visitor: &mut V, value: &mut MetaValue) {
    match value {
        MetaValue::List(items) => {
            for item in items {
                visitor.visit_meta_value_mut(item);
            }
        }
        MetaValue::Map(map) => {
            for item in map.values_mut() {
                visitor.visit_meta_value_mut(item);
            }
        }
        MetaValue::Inlines(inlines) => visit_inlines_mut(visitor, inlines),
        MetaValue::Blocks(blocks) => visit_blocks_mut(visitor, blocks),
        MetaValue::String(_) | MetaValue::Bool(_) => {}
    }
}

fn visit_blocks_mut<V: MutVisitor + ?Sized>(visitor: &mut V, blocks: &mut [Block]) {
    for block in blocks {
        visitor.visit_block_mut(block);
    }
}

fn visit_inlines_mut<V: MutVisitor + ?Sized>(visitor: &mut V, inlines: &mut [Inline]) {
    for inline in inlines {
        visitor.visit_inline_mut(inline);
    }
}
