use criterion::{Criterion, criterion_group, criterion_main};
use fogsweep_core::*;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    group.bench_function("reference", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            RandomLayoutGenerator::new(black_box(seed)).generate(GameConfig::REFERENCE)
        })
    });

    // nearly full boards are where rejection sampling has to retry the most
    let crowded = GameConfig::new_unchecked((16, 16), 250);
    group.bench_function("crowded", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            RandomLayoutGenerator::new(black_box(seed)).generate(crowded)
        })
    });

    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    // a single corner mine turns the first reveal into a near full-board cascade
    let layout = MineLayout::from_mine_coords((64, 64), &[(63, 63)]).expect("valid layout");

    c.bench_function("cascade_64x64", |b| {
        b.iter(|| {
            let mut engine = RevealEngine::new(layout.clone());
            engine.resolve_move(black_box((0, 0)))
        })
    });
}

criterion_group!(benches, bench_generate, bench_cascade);
criterion_main!(benches);
