use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orbsample::{kepler::solve_kepler_equation, OrbitCatalog, OrbitSampler};

/// Typical regime: e ∈ [0.0, 0.7]
fn bench_typical(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("solve_kepler_equation/typical_e<=0.7", |b| {
        b.iter_batched(
            || {
                // Pre-generate inputs to avoid RNG cost in the timed section
                (0..samples)
                    .map(|_| {
                        let e = rng.random_range(0.0..=0.7);
                        let m = rng.random::<f64>() * std::f64::consts::TAU;
                        (m, e)
                    })
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (m, e) in cases {
                    let f = solve_kepler_equation(black_box(m), black_box(e)).unwrap();
                    black_box(f);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Near-parabolic regime: e ∈ [0.95, 0.999]
fn bench_high_e(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("solve_kepler_equation/high_e_0.95..0.999", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| {
                        let e = rng.random_range(0.95..0.999);
                        let m = rng.random::<f64>() * std::f64::consts::TAU;
                        (m, e)
                    })
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (m, e) in cases {
                    let _ = solve_kepler_equation(black_box(m), black_box(e));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// One full verification export of 1996 PW, in memory.
fn bench_sample_1996_pw(c: &mut Criterion) {
    let catalog = OrbitCatalog::verification();
    let def = catalog.get("1996 PW").unwrap();
    let orbit = def.to_orbit().unwrap();
    let sampler = OrbitSampler::default();

    c.bench_function("sampler/1996_PW_366_rows", |b| {
        b.iter(|| black_box(sampler.sample(&def.name, &orbit).unwrap()))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_typical, bench_high_e, bench_sample_1996_pw
);
criterion_main!(benches);
