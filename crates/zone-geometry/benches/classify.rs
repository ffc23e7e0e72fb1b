use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zone_geometry::{ScreenPoint, ScreenSize, ZoneClassifier};

fn bench_classify(c: &mut Criterion) {
    let classifier = ZoneClassifier::default();
    let screen = ScreenSize::new(1080.0, 1920.0).unwrap();
    let points: Vec<ScreenPoint> = (0..64)
        .map(|i| ScreenPoint::new((i * 17 % 1080) as f32, (i * 31 % 1920) as f32))
        .collect();

    c.bench_function("classify_64_points", |b| {
        b.iter(|| {
            for point in &points {
                black_box(classifier.classify(black_box(*point), screen));
            }
        })
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
