//! Benchmarks for syntax highlighting.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use quill::editor::Document;
use quill::highlight::syntax::C;

fn c_source(lines: usize) -> Vec<Vec<u8>> {
    (0..lines)
        .map(|i| match i % 4 {
            0 => format!("/* block {i}").into_bytes(),
            1 => b"   still inside */ int x = 42;".to_vec(),
            2 => format!("    if (x > {i}) return \"done\"; // tail").into_bytes(),
            _ => b"    char c = '\\n';".to_vec(),
        })
        .collect()
}

fn bench_rehighlight_all(c: &mut Criterion) {
    let mut doc = Document::from_lines(c_source(2_000));
    doc.set_syntax(Some(&C));
    c.bench_function("rehighlight_all", |b| b.iter(|| black_box(&mut doc).rehighlight_all()));
}

fn bench_open_comment_propagation(c: &mut Criterion) {
    let mut doc = Document::from_lines(c_source(2_000));
    doc.set_syntax(Some(&C));
    // An unclosed comment on row 2 reflows rows until the next close.
    c.bench_function("open_comment_propagation", |b| {
        b.iter(|| {
            doc.insert_char(2, 0, b'/');
            doc.insert_char(2, 1, b'*');
            doc.delete_char(2, 1);
            doc.delete_char(2, 0);
        });
    });
}

fn bench_insert_char(c: &mut Criterion) {
    let mut doc = Document::from_lines(c_source(2_000));
    doc.set_syntax(Some(&C));
    c.bench_function("insert_char_mid_document", |b| {
        b.iter(|| {
            doc.insert_char(black_box(1_001), 4, b'y');
            doc.delete_char(1_001, 4);
        });
    });
}

criterion_group!(
    benches,
    bench_rehighlight_all,
    bench_open_comment_propagation,
    bench_insert_char
);
criterion_main!(benches);
