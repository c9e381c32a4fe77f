// ===== fiesta-tally/benches/scoring_bench.rs =====
use criterion::{criterion_group, criterion_main, Criterion};
use fiesta_tally::criteria::Category;
use fiesta_tally::export;
use fiesta_tally::registry::Registry;
use std::hint::black_box;
use strum::IntoEnumIterator;

fn marks_for(seed: usize, round: usize) -> [f64; 4] {
    let mut marks = [0.0; 4];
    for (slot, value) in marks.iter_mut().enumerate() {
        *value = ((seed * 7 + round * 13 + slot * 29) % 101) as f64;
    }
    marks
}

fn setup_registry(count: usize) -> Registry {
    let mut registry = Registry::new();
    for i in 0..count {
        let name = format!("Contestant {:03}", i);
        for (round, category) in Category::iter().enumerate() {
            registry.submit(&name, category, marks_for(i, round));
        }
    }
    registry
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("full tabulation (100 contestants x 6 rounds)", |b| {
        b.iter(|| setup_registry(black_box(100)))
    });

    let registry = setup_registry(100);

    c.bench_function("ranked_list (100 contestants)", |b| {
        b.iter(|| black_box(&registry).ranked_list())
    });

    c.bench_function("csv export (100 contestants)", |b| {
        b.iter(|| {
            let mut buffer = Vec::new();
            export::write_csv(black_box(&registry), &mut buffer)
                .expect("export should succeed");
            buffer
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
