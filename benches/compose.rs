use criterion::{Criterion, black_box, criterion_group, criterion_main};
use squircle_qr::{ErrorCorrection, RenderParams, encode_grid, render_rounded, render_square};

fn bench_compose_square(c: &mut Criterion) {
    let grid = encode_grid(&[b'a'; 300], ErrorCorrection::H).unwrap();
    let params = RenderParams::new().with_module_size(10);
    c.bench_function("compose_square_10px", |b| {
        b.iter(|| render_square(black_box(&grid), black_box(&params)))
    });
}

fn bench_compose_rounded(c: &mut Criterion) {
    let grid = encode_grid(&[b'a'; 300], ErrorCorrection::H).unwrap();
    let params = RenderParams::new()
        .with_module_size(10)
        .with_radius_percent(50);
    c.bench_function("compose_rounded_10px", |b| {
        b.iter(|| render_rounded(black_box(&grid), black_box(&params)))
    });
}

fn bench_compose_rounded_parallel(c: &mut Criterion) {
    let grid = encode_grid(&[b'a'; 300], ErrorCorrection::H).unwrap();
    let params = RenderParams::new()
        .with_module_size(10)
        .with_radius_percent(50)
        .with_parallel(true);
    c.bench_function("compose_rounded_10px_parallel", |b| {
        b.iter(|| render_rounded(black_box(&grid), black_box(&params)))
    });
}

fn bench_compose_rounded_large(c: &mut Criterion) {
    let grid = encode_grid(&[b'a'; 1000], ErrorCorrection::L).unwrap();
    let params = RenderParams::new()
        .with_module_size(32)
        .with_radius_percent(50);
    c.bench_function("compose_rounded_32px", |b| {
        b.iter(|| render_rounded(black_box(&grid), black_box(&params)))
    });
    let params = params.with_parallel(true);
    c.bench_function("compose_rounded_32px_parallel", |b| {
        b.iter(|| render_rounded(black_box(&grid), black_box(&params)))
    });
}

criterion_group!(
    benches,
    bench_compose_square,
    bench_compose_rounded,
    bench_compose_rounded_parallel,
    bench_compose_rounded_large
);
criterion_main!(benches);
