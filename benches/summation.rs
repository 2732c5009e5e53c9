use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sumbench::{InputSequence, Strategy};

fn bench(c: &mut Criterion) {
    let seq = InputSequence::arange(312500);

    Strategy::ALL.into_iter().for_each(|strategy| {
        c.bench_function(strategy.name(), |b| {
            b.iter(|| strategy.sum(seq.len(), black_box(seq.as_slice())))
        });
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
