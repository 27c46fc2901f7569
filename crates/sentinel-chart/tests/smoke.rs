// File: crates/sentinel-chart/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use sentinel_chart::{AnnotationLabel, Chart, HLineAnnotation, RenderOptions, Rgba, Series};

fn threshold_chart() -> Chart {
    let mut chart = Chart::new();
    chart.x_labels = (0..6).map(|i| format!("10:00:0{i}")).collect();
    chart.add_series(Series::from_values("Temperature", &[Some(28.0), Some(29.5), None, Some(31.0), Some(30.2), Some(34.0)]));
    chart.add_annotation(HLineAnnotation::new("minLine", 27.0).dashed([6.0, 6.0]).label(AnnotationLabel::new("Min", Rgba::RED)));
    chart.add_annotation(HLineAnnotation::new("maxLine", 33.0).dashed([6.0, 6.0]).label(AnnotationLabel::new("Max", Rgba::RED)));
    chart.autoscale_axes(Some(26.4), Some(33.6));
    chart
}

#[test]
fn render_smoke_png() {
    let chart = threshold_chart();
    let opts = RenderOptions { title: Some("Temperature".into()), tooltip_at: Some(3), ..RenderOptions::default() };

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (opts.width as u32, opts.height as u32));
}

#[test]
fn tooltip_lines_follow_label_and_value() {
    let chart = threshold_chart();
    assert_eq!(chart.tooltip_lines(3), Some(("10:00:03".to_string(), "Temperature: 31".to_string())));
    assert_eq!(chart.tooltip_lines(2), None);
    assert_eq!(chart.tooltip_lines(99), None);
}
