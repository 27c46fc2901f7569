// File: crates/sentinel-panel/src/card.rs
// Summary: View binding: a titled card that hands a ChartConfig to the sentinel-chart renderer.

use std::path::Path;

use sentinel_chart::{Chart, LineStyle, RenderOptions, Series, Theme};

use crate::config::{build_chart_config, ChartConfig};
use crate::error::{PanelError, Result};
use crate::sample::Sample;

/// Line width for panel series, in pixels.
const LINE_WIDTH: f32 = 3.0;

#[derive(Clone, Debug)]
pub struct CardOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    /// Point to highlight with the hover marker and tooltip.
    pub hovered: Option<usize>,
    /// Downsample before drawing when a series is longer than this.
    pub max_points: Option<usize>,
    /// Disable for font-independent output (snapshots).
    pub draw_labels: bool,
}

impl Default for CardOptions {
    fn default() -> Self {
        let base = RenderOptions::default();
        Self {
            width: base.width,
            height: base.height,
            theme: base.theme,
            hovered: None,
            max_points: None,
            draw_labels: true,
        }
    }
}

/// One parameter panel: title, chart and threshold lines.
#[derive(Clone, Debug)]
pub struct ChartCard {
    config: ChartConfig,
    options: CardOptions,
}

impl ChartCard {
    pub fn new(config: ChartConfig) -> Self {
        Self { config, options: CardOptions::default() }
    }

    /// Shorthand for `ChartCard::new(build_chart_config(parameter, samples))`.
    pub fn from_samples(parameter: &str, samples: &[Sample]) -> Self {
        Self::new(build_chart_config(parameter, samples))
    }

    pub fn with_options(mut self, options: CardOptions) -> Self {
        self.options = options;
        self
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn options(&self) -> &CardOptions {
        &self.options
    }

    /// Renderer model for this card with axes already resolved.
    pub fn to_chart(&self) -> Chart {
        let cfg = &self.config;
        let ds = &cfg.dataset;

        let mut chart = Chart::new();
        chart.x_labels = cfg.labels.clone();
        let style = LineStyle {
            color: ds.border_color,
            point_color: ds.point_background_color,
            width: LINE_WIDTH,
            point_radius: ds.point_radius,
            point_hover_radius: ds.point_hover_radius,
        };
        chart.add_series(Series::from_values(ds.label.clone(), &ds.data).with_style(style));
        for a in &cfg.options.annotations {
            chart.add_annotation(a.clone());
        }

        let y = cfg.options.y;
        chart.autoscale_axes(y.suggested_min, y.suggested_max);
        if y.begin_at_zero {
            chart.y_axis.min = chart.y_axis.min.min(0.0);
            chart.y_axis.max = chart.y_axis.max.max(0.0);
        }
        chart
    }

    pub fn render_options(&self) -> RenderOptions {
        let o = &self.options;
        RenderOptions {
            width: o.width,
            height: o.height,
            theme: o.theme,
            draw_labels: o.draw_labels,
            title: Some(self.config.title.clone()),
            tooltip_at: o.hovered,
            max_points: o.max_points,
            ..RenderOptions::default()
        }
    }

    pub fn render_png_bytes(&self) -> Result<Vec<u8>> {
        self.to_chart().render_to_png_bytes(&self.render_options()).map_err(PanelError::Render)
    }

    pub fn render_png(&self, path: impl AsRef<Path>) -> Result<()> {
        self.to_chart().render_to_png(&self.render_options(), path).map_err(PanelError::Render)
    }

    /// `(pixels, width, height, row_stride)` in straight RGBA8.
    pub fn render_rgba8(&self) -> Result<(Vec<u8>, u32, u32, usize)> {
        self.to_chart().render_to_rgba8(&self.render_options()).map_err(PanelError::Render)
    }
}
