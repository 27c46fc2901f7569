// File: crates/sentinel-chart/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG / RGBA) using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use crate::annotation::{HLineAnnotation, LabelPosition};
use crate::geometry::PlotRect;
use crate::grid::{category_ticks, nice_ticks};
use crate::scale::{CategoryScale, ValueScale};
use crate::series::Series;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, Rgba, HEIGHT, WIDTH};
use crate::{Axis, ViewState};

const TICK_FONT: f32 = 12.0;
const TITLE_FONT: f32 = 18.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, tick labels and annotation text. Off gives font-independent output.
    pub draw_labels: bool,
    /// Heading drawn above the plot area.
    pub title: Option<String>,
    /// Category index to highlight with a hover point and tooltip.
    pub tooltip_at: Option<usize>,
    /// Downsample series longer than this before drawing.
    pub max_points: Option<usize>,
    pub max_x_ticks: usize,
    pub max_y_ticks: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            title: None,
            tooltip_at: None,
            max_points: None,
            max_x_ticks: 10,
            max_y_ticks: 7,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Category labels for the X axis, one per index.
    pub x_labels: Vec<String>,
    pub annotations: Vec<HLineAnnotation>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            x_labels: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_annotation(&mut self, annotation: HLineAnnotation) {
        self.annotations.push(annotation);
    }

    /// Number of X categories: the label count or the widest series, whichever is larger.
    pub fn category_count(&self) -> usize {
        let from_series = self
            .series
            .iter()
            .flat_map(|s| s.data.iter().map(|(x, _)| *x))
            .fold(None, |acc: Option<f64>, x| Some(acc.map_or(x, |a| a.max(x))))
            .map_or(0, |x| x.max(0.0) as usize + 1);
        self.x_labels.len().max(from_series)
    }

    /// Fit both axes to the data, widening Y to the suggested bounds when given.
    pub fn autoscale_axes(&mut self, suggested_min: Option<f64>, suggested_max: Option<f64>) {
        ViewState::resolve(self, suggested_min, suggested_max).apply_to_chart(self);
    }

    /// Tooltip lines (title, body) for a category index, when the first series has a value there.
    pub fn tooltip_lines(&self, index: usize) -> Option<(String, String)> {
        let series = self.series.first()?;
        let value = series.value_at(index as f64)?;
        let title = self.x_labels.get(index).cloned().unwrap_or_default();
        Some((title, format!("{}: {}", series.name, value)))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width.max(1), opts.height.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    /// Render to encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), "wrote chart png");
        Ok(())
    }

    /// Render to straight RGBA8 pixels. Returns `(pixels, width, height, row_stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Draw onto any Skia canvas (raster, GPU, picture recorder).
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(to_sk(theme.background));

        let plot = PlotRect::from_surface(opts.width, opts.height, &opts.insets);
        let xs = CategoryScale::new(&plot, &self.x_axis);
        let ys = ValueScale::new(&plot, &self.y_axis);
        let text = opts.draw_labels.then(TextShaper::new);

        if let (Some(text), Some(title)) = (&text, &opts.title) {
            text.draw(canvas, title, plot.left, TITLE_FONT + 8.0, TITLE_FONT, theme.title, Anchor::Left, true);
        }

        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, opts.max_y_ticks);
        let x_ticks = category_ticks(self.category_count(), opts.max_x_ticks);
        draw_grid(canvas, &plot, &xs, &ys, &x_ticks, &y_ticks, theme);
        if let Some(text) = &text {
            draw_tick_labels(canvas, text, &plot, &xs, &ys, &x_ticks, &y_ticks, &self.x_labels, theme);
            draw_axis_titles(canvas, text, &plot, &self.x_axis, &self.y_axis, theme);
        }

        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(plot.left, plot.top - 6.0, plot.right, plot.bottom + 6.0), skia::ClipOp::Intersect, true);
        for s in &self.series {
            let drawn = match opts.max_points {
                Some(max) if s.len() > max => s.downsample_lttb(max),
                _ => s.clone(),
            };
            draw_line_series(canvas, &xs, &ys, &drawn, theme);
        }
        for a in &self.annotations {
            draw_hline(canvas, text.as_ref(), &plot, &ys, a);
        }
        canvas.restore();

        if let Some(index) = opts.tooltip_at {
            self.draw_tooltip(canvas, text.as_ref(), &plot, &xs, &ys, index, theme);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tooltip(
        &self,
        canvas: &skia::Canvas,
        text: Option<&TextShaper>,
        plot: &PlotRect,
        xs: &CategoryScale,
        ys: &ValueScale,
        index: usize,
        theme: &Theme,
    ) {
        let Some(series) = self.series.first() else { return };
        let Some(value) = series.value_at(index as f64) else { return };
        let (px, py) = (xs.to_px(index as f64), ys.to_px(value));

        let mut dot = fill_paint(series.style.point_color.or(series.style.color).unwrap_or(theme.line_stroke));
        canvas.draw_circle((px, py), series.style.point_hover_radius, &dot);
        dot.set_style(skia::paint::Style::Stroke);
        dot.set_color(to_sk(theme.background));
        canvas.draw_circle((px, py), series.style.point_hover_radius, &dot);

        let Some((title, body)) = self.tooltip_lines(index) else { return };
        let (box_w, box_h) = match text {
            Some(t) => (t.measure_width(&title, TICK_FONT).max(t.measure_width(&body, TICK_FONT)) + 12.0, 40.0),
            None => (96.0, 40.0),
        };
        let mut left = px + 10.0;
        if left + box_w > plot.right {
            left = px - 10.0 - box_w;
        }
        let top = (py - box_h * 0.5).clamp(plot.top, (plot.bottom - box_h).max(plot.top));
        let rect = skia::Rect::from_xywh(left, top, box_w, box_h);
        canvas.draw_round_rect(rect, 6.0, 6.0, &fill_paint(theme.tooltip_background));
        if let Some(t) = text {
            t.draw(canvas, &title, left + 6.0, top + 16.0, TICK_FONT, theme.tooltip_text, Anchor::Left, true);
            t.draw(canvas, &body, left + 6.0, top + 33.0, TICK_FONT, theme.tooltip_text, Anchor::Left, false);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

pub(crate) fn to_sk(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(color: Rgba, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(to_sk(color));
    p
}

fn fill_paint(color: Rgba) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(to_sk(color));
    p
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    xs: &CategoryScale,
    ys: &ValueScale,
    x_ticks: &[usize],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let grid = stroke_paint(theme.grid, 1.0);
    for &i in x_ticks {
        let x = xs.to_px(i as f64);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &grid);
    }
    for &v in y_ticks {
        let y = ys.to_px(v);
        canvas.draw_line((plot.left, y), (plot.right, y), &grid);
    }

    let axis = stroke_paint(theme.axis_line, 1.0);
    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &axis);
    canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &axis);
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    text: &TextShaper,
    plot: &PlotRect,
    xs: &CategoryScale,
    ys: &ValueScale,
    x_ticks: &[usize],
    y_ticks: &[f64],
    labels: &[String],
    theme: &Theme,
) {
    for &v in y_ticks {
        let y = ys.to_px(v);
        text.draw(canvas, &format!("{v}"), plot.left - 8.0, y + TICK_FONT * 0.35, TICK_FONT, theme.tick, Anchor::Right, false);
    }
    for &i in x_ticks {
        let Some(label) = labels.get(i) else { continue };
        let x = xs.to_px(i as f64);
        text.draw(canvas, label, x, plot.bottom + TICK_FONT + 8.0, TICK_FONT, theme.tick, Anchor::Center, false);
    }
}

fn draw_axis_titles(canvas: &skia::Canvas, text: &TextShaper, plot: &PlotRect, x: &Axis, y: &Axis, theme: &Theme) {
    if !x.label.is_empty() {
        let cx = (plot.left + plot.right) * 0.5;
        text.draw(canvas, &x.label, cx, plot.bottom + 2.0 * TICK_FONT + 14.0, TICK_FONT, theme.tick, Anchor::Center, false);
    }
    if !y.label.is_empty() {
        text.draw(canvas, &y.label, plot.left, plot.top - 8.0, TICK_FONT, theme.tick, Anchor::Left, false);
    }
}

fn draw_line_series(canvas: &skia::Canvas, xs: &CategoryScale, ys: &ValueScale, series: &Series, theme: &Theme) {
    let color = series.style.color.unwrap_or(theme.line_stroke);
    let stroke = stroke_paint(color, series.style.width);
    let dot = fill_paint(series.style.point_color.unwrap_or(color));

    for run in series.runs() {
        if run.len() >= 2 {
            let mut path = skia::Path::new();
            let (x0, y0) = run[0];
            path.move_to((xs.to_px(x0), ys.to_px(y0)));
            for &(x, y) in run.iter().skip(1) {
                path.line_to((xs.to_px(x), ys.to_px(y)));
            }
            canvas.draw_path(&path, &stroke);
        }
        if series.style.point_radius > 0.0 {
            for &(x, y) in &run {
                canvas.draw_circle((xs.to_px(x), ys.to_px(y)), series.style.point_radius, &dot);
            }
        }
    }
}

fn draw_hline(canvas: &skia::Canvas, text: Option<&TextShaper>, plot: &PlotRect, ys: &ValueScale, a: &HLineAnnotation) {
    let y = ys.to_px(a.y);
    let mut paint = stroke_paint(a.color, a.width);
    if let Some(intervals) = a.dash_intervals() {
        paint.set_path_effect(skia::PathEffect::dash(intervals, 0.0));
    }
    canvas.draw_line((plot.left, y), (plot.right, y), &paint);

    let Some(label) = &a.label else { return };
    let text_w = text.map_or(label.content.len() as f32 * 7.0, |t| t.measure_width(&label.content, TICK_FONT));
    let (box_w, box_h) = (text_w + 12.0, TICK_FONT + 10.0);
    let left = match label.position {
        LabelPosition::Start => plot.left + 6.0,
        LabelPosition::Center => (plot.left + plot.right - box_w) * 0.5,
        LabelPosition::End => plot.right - 6.0 - box_w,
    };
    let rect = skia::Rect::from_xywh(left, y - box_h * 0.5, box_w, box_h);
    canvas.draw_round_rect(rect, 6.0, 6.0, &fill_paint(label.background));
    if let Some(t) = text {
        t.draw(canvas, &label.content, left + 6.0, y + TICK_FONT * 0.35, TICK_FONT, label.color, Anchor::Left, false);
    }
}
