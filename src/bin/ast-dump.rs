//! ast-dump - Inspect pandoc wire documents

use std::collections::HashMap;
use std::fs::File;
use std::process::ExitCode;

use clap::Parser;

use panpipe::{Block, Doc, Inline, MetaValue, Visitor, read_doc, walk_block, walk_doc, walk_inline};

#[derive(Parser)]
#[command(name = "ast-dump")]
#[command(version, about = "Inspect pandoc JSON documents", long_about = None)]
#[command(after_help = "EXAMPLES:
    pandoc -t json doc.md | ast-dump    Show the heading outline
    ast-dump --stat doc.json            Count elements by kind
    ast-dump --meta doc.json            Show document metadata")]
struct Cli {
    /// Wire JSON file to inspect (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Count elements by kind instead of printing the outline
    #[arg(short, long)]
    stat: bool,

    /// Show document metadata
    #[arg(short, long)]
    meta: bool,

    /// Output format to record on the document
    #[arg(short, long, default_value = "html")]
    format: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> panpipe::Result<()> {
    let doc = match &cli.file {
        Some(path) => read_doc(File::open(path)?, &cli.format)?,
        None => read_doc(std::io::stdin().lock(), &cli.format)?,
    };

    if cli.stat {
        show_stats(&doc);
    } else if cli.meta {
        show_meta(&doc);
    } else {
        show_outline(&doc);
    }
    Ok(())
}

/// Print the heading outline of the document body, indented by level.
fn show_outline(doc: &Doc) {
    let mut outline = OutlineCollector::default();
    for block in &doc.blocks {
        outline.visit_block(block);
    }

    if outline.entries.is_empty() {
        println!("(no headings)");
        return;
    }
    for (level, text) in &outline.entries {
        println!("{}{}", "  ".repeat(level - 1), text);
    }
}

/// Print element counts by kind, body and metadata included.
fn show_stats(doc: &Doc) {
    let mut counter = KindCounter::default();
    walk_doc(&mut counter, doc);

    let mut sorted: Vec<_> = counter.counts.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    println!("{:<20} {:>8}", "Kind", "Count");
    println!("{}", "-".repeat(29));
    for (kind, count) in sorted {
        println!("{:<20} {:>8}", kind, count);
    }
    println!("{}", "-".repeat(29));
    let total: usize = counter.counts.values().sum();
    println!("{:<20} {:>8}", "TOTAL", total);
}

fn show_meta(doc: &Doc) {
    if doc.meta.is_empty() {
        println!("(no metadata)");
        return;
    }
    for (key, value) in &doc.meta {
        println!("{key}: {}", render_meta(value));
    }
}

fn render_meta(value: &MetaValue) -> String {
    match value {
        MetaValue::String(s) => s.clone(),
        MetaValue::Bool(b) => b.to_string(),
        MetaValue::List(items) => {
            let rendered: Vec<_> = items.iter().map(render_meta).collect();
            format!("[{}]", rendered.join(", "))
        }
        MetaValue::Map(map) => {
            let rendered: Vec<_> = map
                .iter()
                .map(|(key, item)| format!("{key}: {}", render_meta(item)))
                .collect();
            format!("{{{}}}", rendered.join(", "))
        }
        MetaValue::Inlines(inlines) => plain_text(inlines),
        MetaValue::Blocks(blocks) => format!("({} blocks)", blocks.len()),
    }
}

/// Flatten inlines to the text a reader would see.
fn plain_text(inlines: &[Inline]) -> String {
    let mut collector = TextCollector::default();
    for inline in inlines {
        collector.visit_inline(inline);
    }
    collector.text
}

#[derive(Default)]
struct OutlineCollector {
    entries: Vec<(usize, String)>,
}

impl Visitor for OutlineCollector {
    fn visit_block(&mut self, block: &Block) {
        if let Block::Header(level, _, inlines) = block {
            self.entries
                .push((level.get() as usize, plain_text(inlines)));
        }
        walk_block(self, block);
    }
}

#[derive(Default)]
struct KindCounter {
    counts: HashMap<&'static str, usize>,
}

impl Visitor for KindCounter {
    fn visit_block(&mut self, block: &Block) {
        *self.counts.entry(block.tag()).or_insert(0) += 1;
        walk_block(self, block);
    }

    fn visit_inline(&mut self, inline: &Inline) {
        *self.counts.entry(inline.tag()).or_insert(0) += 1;
        walk_inline(self, inline);
    }
}

#[derive(Default)]
struct TextCollector {
    text: String,
}

impl Visitor for TextCollector {
    fn visit_inline(&mut self, inline: &Inline) {
        match inline {
            Inline::Str(s) => self.text.push_str(s),
            Inline::Space | Inline::SoftBreak | Inline::LineBreak => self.text.push(' '),
            Inline::Code(_, s) | Inline::Math(_, s) => self.text.push_str(s),
            _ => {}
        }
        walk_inline(self, inline);
    }
}
