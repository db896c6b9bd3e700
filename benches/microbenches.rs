//! Criterion microbenches for textquad projection and shape building.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the performance of:
//! - observations JSON parsing
//! - point projection (normalized -> pixel)
//! - the four overlay shape builders

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use textquad::geom::{Coord, Projection, Quad, Rect};
use textquad::overlay::{axis_aligned_box, expanded_quad, rounded_quad, straight_quad};
use textquad::session::io_json::from_json_str;
use textquad::session::Observation;

// Include the test fixture at compile time (no file I/O during benchmark)
const OBSERVATIONS_FIXTURE: &str = include_str!("../tests/fixtures/sample_observations.json");

fn fixture_observations() -> Vec<Observation> {
    from_json_str(OBSERVATIONS_FIXTURE).expect("Failed to parse observations fixture")
}

fn phone_screen() -> Projection {
    Projection::new(Rect::from_xywh(0.0, 0.0, 1170.0, 2532.0))
}

/// Benchmark observations JSON parsing.
fn bench_observations_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("observations_parse");
    group.throughput(Throughput::Bytes(OBSERVATIONS_FIXTURE.len() as u64));

    group.bench_function("from_json_str", |b| {
        b.iter(|| {
            let observations = from_json_str(black_box(OBSERVATIONS_FIXTURE)).unwrap();
            black_box(observations)
        })
    });

    group.finish();
}

/// Benchmark the single-point projection formula.
fn bench_point_projection(c: &mut Criterion) {
    let projection = phone_screen();
    let points: Vec<Coord<_>> = (0..256)
        .map(|i| Coord::new((i % 16) as f64 / 16.0, (i / 16) as f64 / 16.0))
        .collect();

    let mut group = c.benchmark_group("projection");
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("to_pixel", |b| {
        b.iter(|| {
            for p in &points {
                black_box(projection.to_pixel(black_box(*p)));
            }
        })
    });

    group.finish();
}

/// Benchmark the four shape builders over the fixture observations.
fn bench_shape_builders(c: &mut Criterion) {
    let observations = fixture_observations();
    let quads: Vec<Quad<_>> = observations.iter().map(Observation::quad_or_bounds).collect();
    let projection = phone_screen();

    let mut group = c.benchmark_group("builders");
    group.throughput(Throughput::Elements(quads.len() as u64));

    group.bench_function("axis_aligned_box", |b| {
        b.iter(|| {
            for obs in &observations {
                black_box(axis_aligned_box(black_box(&obs.bounds), &projection));
            }
        })
    });

    group.bench_function("straight_quad", |b| {
        b.iter(|| {
            for quad in &quads {
                black_box(straight_quad(black_box(quad), &projection));
            }
        })
    });

    group.bench_function("rounded_quad", |b| {
        b.iter(|| {
            for quad in &quads {
                black_box(rounded_quad(black_box(quad), &projection, 10.0));
            }
        })
    });

    group.bench_function("expanded_quad", |b| {
        b.iter(|| {
            for quad in &quads {
                black_box(expanded_quad(black_box(quad), &projection, 1.1));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_observations_parse,
    bench_point_projection,
    bench_shape_builders,
);
criterion_main!(benches);
