use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sentinel_chart::{Chart, HLineAnnotation, RenderOptions, Series};

fn build_chart(n: usize) -> Chart {
    let values: Vec<Option<f64>> = (0..n).map(|i| Some(30.0 + (i as f64 * 0.01).sin() * 3.0)).collect();
    let mut ch = Chart::new();
    ch.x_labels = (0..n).map(|i| format!("{:02}:{:02}:{:02}", i / 3600 % 24, i / 60 % 60, i % 60)).collect();
    ch.add_series(Series::from_values("Temperature", &values));
    ch.add_annotation(HLineAnnotation::new("minLine", 27.0).dashed([6.0, 6.0]));
    ch.add_annotation(HLineAnnotation::new("maxLine", 33.0).dashed([6.0, 6.0]));
    ch.autoscale_axes(Some(26.4), Some(33.6));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[300usize, 10_000usize] {
        group.bench_function(format!("temperature_{n}"), |b| {
            let ch = build_chart(n);
            let opts = RenderOptions { width: 800, height: 500, draw_labels: false, max_points: Some(800), ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
