//! Lexer Benchmarks
//!
//! Measures throughput of the default and C-like chains.
//! Run with: `cargo bench --package lexkit-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lexkit_lex::{Lexer, ParserChain, Utf8Reader};

fn token_count(source: &str, chain: ParserChain) -> usize {
    Lexer::with_chain(source.chars(), chain).count()
}

fn bench_default_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("default_chain");

    let source = "name = \"lexkit\"\nversion = 3\n# comment line\nauthors = 'someone'\n";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("config_file", |b| {
        b.iter(|| token_count(black_box(source), ParserChain::default()))
    });

    group.bench_function("long_identifiers", |b| {
        let source = "a_very_long_identifier_name another_quite_long_name_here ".repeat(32);
        b.iter(|| token_count(black_box(&source), ParserChain::default()))
    });

    group.finish();
}

fn bench_c_like_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("c_like_chain");

    let source = r#"
        int mask = 0xFFFF; # low half
        int mode = 0755;
        float ratio = 1.5e-3;
        string label = "benchmark";
    "#
    .repeat(16);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("mixed_source", |b| {
        b.iter(|| token_count(black_box(&source), ParserChain::c_like()))
    });

    group.bench_function("numbers_only", |b| {
        let numbers = "123456 0xDEADBEEF 0777 3.14159 2.5e10 ".repeat(32);
        b.iter(|| token_count(black_box(&numbers), ParserChain::c_like()))
    });

    group.finish();
}

fn bench_reader_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("reader_source");

    let source = "größe = 'wert' # kommentar\nλ = 42\n".repeat(64);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("utf8_reader", |b| {
        b.iter(|| Lexer::new(Utf8Reader::new(black_box(source.as_bytes()))).count())
    });

    group.finish();
}

criterion_group!(benches, bench_default_chain, bench_c_like_chain, bench_reader_source);
criterion_main!(benches);
