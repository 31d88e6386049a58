use criterion::{Criterion, criterion_group, criterion_main};
use geopoint::{BoundingOptions, DistanceUnit, GeoPoint};
use std::hint::black_box;

fn geopoint_benchmark(c: &mut Criterion) {
    let new_york = GeoPoint::from_degrees(40.689604, -74.04455).unwrap();
    let washington = GeoPoint::from_degrees(38.890298, -77.035238).unwrap();

    c.bench_function("distance_to", |b| {
        b.iter(|| black_box(new_york).distance_to(black_box(&washington), DistanceUnit::Miles));
    });

    c.bench_function("bounding_coordinates", |b| {
        b.iter(|| {
            black_box(new_york)
                .bounding_coordinates(black_box(20.0), BoundingOptions::default())
                .unwrap()
        });
    });
}

criterion_group!(benches, geopoint_benchmark);
criterion_main!(benches);
