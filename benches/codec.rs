//! Benchmarks for the wire codec.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::Value;

use panpipe::{
    Attr, Block, Doc, HeaderLevel, Inline, decode_doc, encode_doc, read_doc_str, write_doc_string,
};

const KITCHEN_SINK: &str = include_str!("../tests/fixtures/kitchen_sink.json");

/// A plain prose document, larger than the fixture, for throughput numbers.
fn build_large_doc() -> Doc {
    let mut blocks = Vec::new();
    for section in 0..50 {
        blocks.push(Block::Header(
            HeaderLevel::new(2).unwrap(),
            Attr::from_identifier(format!("sec-{section}")),
            vec![Inline::Str(format!("Section {section}"))],
        ));
        for para in 0..4 {
            let mut inlines = Vec::new();
            for word in 0..25 {
                if word > 0 {
                    inlines.push(Inline::Space);
                }
                inlines.push(Inline::Str(format!("w{section}{para}{word}")));
            }
            inlines.push(Inline::Space);
            inlines.push(Inline::Emph(vec![Inline::Str("closing".into())]));
            blocks.push(Block::Para(inlines));
        }
    }
    Doc::new(blocks)
}

// ============================================================================
// Fixture Codec Benchmarks
// ============================================================================

fn bench_decode_fixture(c: &mut Criterion) {
    let wire: Value = serde_json::from_str(KITCHEN_SINK).unwrap();

    c.bench_function("decode_fixture", |b| {
        b.iter(|| decode_doc(&wire, "html").unwrap());
    });
}

fn bench_encode_fixture(c: &mut Criterion) {
    let wire: Value = serde_json::from_str(KITCHEN_SINK).unwrap();
    let doc = decode_doc(&wire, "html").unwrap();

    c.bench_function("encode_fixture", |b| {
        b.iter(|| encode_doc(&doc));
    });
}

fn bench_roundtrip_fixture(c: &mut Criterion) {
    let wire: Value = serde_json::from_str(KITCHEN_SINK).unwrap();

    c.bench_function("roundtrip_fixture", |b| {
        b.iter(|| encode_doc(&decode_doc(&wire, "html").unwrap()));
    });
}

// ============================================================================
// Large Document Benchmarks
// ============================================================================

fn bench_write_large(c: &mut Criterion) {
    let doc = build_large_doc();

    c.bench_function("write_large", |b| {
        b.iter(|| write_doc_string(&doc));
    });
}

fn bench_read_large(c: &mut Criterion) {
    let text = write_doc_string(&build_large_doc());

    c.bench_function("read_large", |b| {
        b.iter(|| read_doc_str(&text, "html").unwrap());
    });
}

criterion_group!(
    benches,
    // Fixture codec
    bench_decode_fixture,
    bench_encode_fixture,
    bench_roundtrip_fixture,
    // Large documents
    bench_write_large,
    bench_read_large,
);
criterion_main!(benches);
