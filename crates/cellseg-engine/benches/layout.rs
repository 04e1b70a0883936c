use cellseg_engine::{IndentOptions, LeafBuilder, RopeDocument, compute_indent};
use cellseg_syntax::lex;
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    group.sample_size(20);

    let text = common::generate_source(200);
    let doc = RopeDocument::from(text.as_str());
    let tokens = lex(&text);
    let builder = LeafBuilder::new(&doc, IndentOptions::default());

    group.bench_function("build_chain", |b| {
        b.iter(|| std::hint::black_box(builder.build(&tokens)));
    });

    let chain = builder.build(&tokens);
    group.bench_function("indent_all_leaves", |b| {
        b.iter(|| {
            let total: usize = chain
                .ids()
                .filter_map(|id| compute_indent(&chain, id))
                .map(|i| i.total())
                .sum();
            std::hint::black_box(total)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
