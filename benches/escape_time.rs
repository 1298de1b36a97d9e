use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mandelbrot_zoom::{
    colourize, compute_escape_times, compute_image, ModularShadeColourMap, QuadraticMandelbrot,
    Viewport,
};
use std::hint::black_box;

fn default_viewport(resolution: u32) -> Viewport {
    Viewport::new(-2.0, 0.5, -1.25, 1.25, resolution, 150).expect("default viewport is valid")
}

fn bench_escape_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_times");

    for resolution in [150u32, 300, 600] {
        let viewport = default_viewport(resolution);

        group.bench_with_input(
            BenchmarkId::from_parameter(resolution),
            &viewport,
            |b, viewport| b.iter(|| compute_escape_times(black_box(viewport), &QuadraticMandelbrot)),
        );
    }

    group.finish();
}

fn bench_colourize(c: &mut Criterion) {
    let grid = compute_escape_times(&default_viewport(600), &QuadraticMandelbrot);

    c.bench_function("colourize_600", |b| {
        b.iter(|| colourize(black_box(&grid), &ModularShadeColourMap))
    });
}

fn bench_zoomed_pipeline(c: &mut Criterion) {
    // deep in the seahorse valley, where few points escape early
    let viewport = Viewport::new(-0.7536, -0.7436, 0.0936, 0.1036, 600, 300)
        .expect("zoomed viewport is valid");

    c.bench_function("compute_image_zoomed_600", |b| {
        b.iter(|| compute_image(black_box(&viewport)))
    });
}

criterion_group!(benches, bench_escape_times, bench_colourize, bench_zoomed_pipeline);
criterion_main!(benches);
