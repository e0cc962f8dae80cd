//! Performance benchmarks for Block Kit tree building and serialization
//!
//! Run with: `cargo bench -p blockkit-core`
//!
//! These benchmarks measure critical path performance:
//! - Building and appending a realistic 50-block message
//! - Null-stripped JSON serialization of that tree
//! - Preview URL encoding

use blockkit_core::{Block, BlockKit, Collect, Element, MarkdownToken};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Build a builder holding `sections` section/actions/divider triples
fn build_kit(sections: usize) -> BlockKit {
    let mut kit = BlockKit::new();
    kit.push(kit.header("Daily digest").unwrap()).unwrap();

    for i in 0..sections {
        let button = kit
            .button(format!("Open {}", i))
            .unwrap()
            .with_value(i.to_string())
            .unwrap();
        let section = kit
            .section(MarkdownToken::bold(format!("Item {} needs review", i)))
            .unwrap()
            .with_accessory(button)
            .unwrap();

        let options = (0..5)
            .map(|n| kit.option(format!("Choice {}", n), n.to_string()).unwrap())
            .collect();
        let actions = kit
            .actions()
            .with_children(vec![
                Element::from(kit.static_select(options).unwrap()),
                Element::from(kit.datepicker()),
            ])
            .unwrap();

        kit.append([Block::from(section), Block::from(actions), Block::from(kit.divider())])
            .unwrap();
    }

    kit
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(20);

    group.bench_function("50_sections", |b| {
        b.iter(|| black_box(build_kit(black_box(50))));
    });

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let kit = build_kit(50);
    let mut group = c.benchmark_group("serialize");

    group.bench_function("to_json", |b| {
        b.iter(|| black_box(kit.to_json().unwrap()));
    });

    group.bench_function("to_wire", |b| {
        b.iter(|| black_box(kit.to_wire().unwrap()));
    });

    group.bench_function("to_preview_url", |b| {
        b.iter(|| black_box(kit.to_preview_url().unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_serialize);
criterion_main!(benches);
