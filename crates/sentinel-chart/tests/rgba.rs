// File: crates/sentinel-chart/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use sentinel_chart::{AnnotationLabel, Chart, HLineAnnotation, RenderOptions, Rgba, Series};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_values("v", &[Some(1.0), Some(2.0), Some(1.5)]));
    chart.add_annotation(HLineAnnotation::new("maxLine", 3.0).dashed([6.0, 6.0]).label(AnnotationLabel::new("Max", Rgba::RED)));
    chart.autoscale_axes(Some(0.0), Some(4.0));

    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Light theme background in the top-left corner.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // The annotation line and its label box put solid red pixels around y = 3.
    let plot_top = opts.insets.top as f32;
    let plot_bottom = (opts.height as u32 - opts.insets.bottom) as f32;
    let y = plot_bottom - (3.0 / 4.0) * (plot_bottom - plot_top);
    let row = y.round() as usize;
    let reddish = (row - 2..=row + 2).any(|r| {
        (opts.insets.left as usize..opts.insets.left as usize + 40).any(|c| {
            let i = r * stride + c * 4;
            px[i] > 200 && px[i + 1] < 60 && px[i + 2] < 60
        })
    });
    assert!(reddish, "expected red annotation pixels near row {row}");
}
