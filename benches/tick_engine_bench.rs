use criterion::{Criterion, criterion_group, criterion_main};
use diagram_rs::api::{SceneContent, render_plane_diagram};
use diagram_rs::core::{PlaneAxisSpec, PlaneSpec, build_ticks};
use std::hint::black_box;

fn bench_decimal_ticks(c: &mut Criterion) {
    c.bench_function("decimal_ticks_0_to_100_by_0_25", |b| {
        b.iter(|| {
            build_ticks(black_box(0.0), black_box(100.0), black_box(0.25))
                .expect("valid tick request")
        })
    });
}

fn bench_rational_ticks(c: &mut Criterion) {
    c.bench_function("rational_ticks_0_to_10_by_sixths", |b| {
        b.iter(|| {
            build_ticks(black_box(0.0), black_box(10.0), black_box(1.0 / 6.0))
                .expect("valid tick request")
        })
    });
}

fn bench_pi_ticks(c: &mut Criterion) {
    let two_pi = 2.0 * std::f64::consts::PI;
    c.bench_function("pi_ticks_four_periods_by_half_pi", |b| {
        b.iter(|| {
            build_ticks(
                black_box(-2.0 * two_pi),
                black_box(2.0 * two_pi),
                black_box(std::f64::consts::PI / 2.0),
            )
            .expect("valid tick request")
        })
    });
}

fn bench_plane_diagram_render(c: &mut Criterion) {
    let spec = PlaneSpec {
        width: 500.0,
        height: 400.0,
        x_axis: PlaneAxisSpec::new("x", -10.0, 10.0, 1.0),
        y_axis: PlaneAxisSpec::new("y", -10.0, 10.0, 1.0),
        show_quadrant_labels: true,
    };
    let content = SceneContent::default();

    c.bench_function("plane_diagram_render_500x400", |b| {
        b.iter(|| {
            render_plane_diagram(black_box(&spec), black_box(&content))
                .expect("diagram should render")
        })
    });
}

criterion_group!(
    benches,
    bench_decimal_ticks,
    bench_rational_ticks,
    bench_pi_ticks,
    bench_plane_diagram_render
);
criterion_main!(benches);
