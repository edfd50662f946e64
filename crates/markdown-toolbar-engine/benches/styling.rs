use criterion::{Criterion, criterion_group, criterion_main};
use markdown_toolbar_engine::{RopeHost, StyleRegistry, TextBuffer, TextHost, Toolbar, style_selected_text};
mod common;

fn bench_block_styles(c: &mut Criterion) {
    let mut group = c.benchmark_group("block");
    group.sample_size(10);

    let registry = StyleRegistry::builtin();
    let content = common::generate_markdown_content(100);
    let middle = content.len() / 2;

    for name in ["bold", "link", "table"] {
        let spec = registry.get(name).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut buffer = TextBuffer::with_caret(content.as_str(), std::hint::black_box(middle));
                let result = style_selected_text(&mut buffer, spec).unwrap();
                std::hint::black_box(result);
            });
        });
    }

    group.finish();
}

fn bench_line_styles(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");
    group.sample_size(10);

    let registry = StyleRegistry::builtin();
    let lines = common::generate_lines(500);
    let bulleted = style_selected_text(
        &mut TextBuffer::new(lines.as_str(), 0..lines.len()),
        registry.get("unordered-list").unwrap(),
    )
    .unwrap()
    .text;

    for (name, text) in [
        ("ordered-list", &lines),
        ("quote", &lines),
        ("ordered-list-convert", &bulleted),
    ] {
        let style = name.trim_end_matches("-convert");
        let spec = registry.get(style).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut buffer = TextBuffer::new(text.as_str(), 0..text.len());
                let result = style_selected_text(&mut buffer, spec).unwrap();
                std::hint::black_box(result);
            });
        });
    }

    group.finish();
}

fn bench_toolbar_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("toolbar");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);

    group.bench_function("bold_toggle_on_rope_host", |b| {
        let mut host = RopeHost::new(&content).with_max_len(None);
        host.set_selection(10..10);
        let mut toolbar = Toolbar::new(host);
        b.iter(|| {
            let result = toolbar.apply_style("bold").unwrap();
            std::hint::black_box(result);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_block_styles, bench_line_styles, bench_toolbar_commit);
criterion_main!(benches);
