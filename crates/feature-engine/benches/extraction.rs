//! Feature extraction benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use feature_engine::FeatureExtractor;

fn bench_extract(c: &mut Criterion) {
    let extractor = FeatureExtractor::default();
    let n = 200; // one 0.2 s window at 1 kHz

    let ia: Vec<f64> = (0..n)
        .map(|k| (2.0 * std::f64::consts::PI * k as f64 / 20.0).sin())
        .collect();
    let ib: Vec<f64> = ia.iter().map(|x| x * 0.95).collect();
    let ic: Vec<f64> = ia.iter().map(|x| x * 1.05).collect();
    let speed = vec![0.98; n];
    let torque = vec![1.0; n];
    let slip = vec![0.02; n];

    c.bench_function("extract_200_sample_window", |b| {
        b.iter(|| {
            extractor.extract(
                black_box(&ia),
                black_box(&ib),
                black_box(&ic),
                black_box(&speed),
                black_box(&torque),
                black_box(&slip),
            )
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
