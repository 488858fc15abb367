//! Benchmark offset matching performance.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use bindu_align::{MatcherConfig, OffsetMatcher, Transform, Vec3};

/// Create a set of transforms scattered on a grid with varied rotations.
fn scattered_set(n: usize) -> Vec<Transform> {
    (0..n)
        .map(|i| {
            let x = (i % 16) as f32 * 1.5;
            let y = (i / 16) as f32 * 1.5;
            let z = (i % 3) as f32 * 0.5;
            Transform::from_rotation_z(i as f32 * 0.37).translated(Vec3::new(x, y, z))
        })
        .collect()
}

fn bench_find_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_matches");

    for &n in &[16usize, 64, 256] {
        let model = scattered_set(n);
        // Shift the whole space set so every entry matches at the same offset
        let offset = Vec3::new(3.0, -2.0, 1.0);
        let space: Vec<Transform> = model.iter().map(|t| t.translated(offset)).collect();
        let matcher = OffsetMatcher::new(MatcherConfig::default());

        group.bench_with_input(BenchmarkId::new("all_match", n), &n, |b, _| {
            b.iter(|| matcher.find_matches(black_box(&model), black_box(&space)))
        });
    }

    // Worst case: nothing matches, full |model| x |space| scan
    let model = scattered_set(128);
    let space = scattered_set(128)
        .iter()
        .map(|t| Transform::from_rotation_z(2.0) * *t)
        .collect::<Vec<_>>();
    let matcher = OffsetMatcher::new(MatcherConfig::default());

    group.bench_function("none_match_128", |b| {
        b.iter(|| matcher.find_matches(black_box(&model), black_box(&space)))
    });

    group.finish();
}

criterion_group!(benches, bench_find_matches);
criterion_main!(benches);
