use criterion::{Criterion, black_box, criterion_group, criterion_main};
use squircle_qr::{
    ErrorCorrection, GridExtractor, RenderParams, SamplePoint, encode_grid, render_square,
};

fn bench_extract(c: &mut Criterion) {
    let grid = encode_grid(&[b'a'; 300], ErrorCorrection::H).unwrap();
    let params = RenderParams::new().with_module_size(10);
    let bitmap = render_square(&grid, &params).unwrap();

    let top_left = GridExtractor::from_params(&params);
    c.bench_function("extract_top_left", |b| {
        b.iter(|| top_left.extract(black_box(&bitmap)))
    });

    let center = GridExtractor::from_params(&params).with_sample_point(SamplePoint::Center);
    c.bench_function("extract_center", |b| {
        b.iter(|| center.extract(black_box(&bitmap)))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
