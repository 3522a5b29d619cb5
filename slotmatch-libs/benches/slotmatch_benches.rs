use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slotmatch_libs::{compute_overlap, OverlapMode, TimeRange};

fn slots(count: i64, step: i64, width: i64) -> Vec<TimeRange<i64>> {
    (0..count)
        .map(|i| TimeRange(i * step, i * step + width))
        .collect()
}

fn find_overlap(c: &mut Criterion) {
    let a = slots(300, 30, 60);
    let b = slots(300, 25, 10);

    c.bench_function("containment", |bench| {
        bench.iter(|| black_box(compute_overlap(&a, &b, OverlapMode::Containment)))
    });

    c.bench_function("intersection", |bench| {
        bench.iter(|| black_box(compute_overlap(&a, &b, OverlapMode::Intersection)))
    });

    #[cfg(feature = "rayon")]
    c.bench_function("parallel intersection", |bench| {
        bench.iter(|| {
            black_box(slotmatch_libs::par_compute_overlap(
                &a,
                &b,
                OverlapMode::Intersection,
            ))
        })
    });
}

criterion_group!(benches, find_overlap);
criterion_main!(benches);
