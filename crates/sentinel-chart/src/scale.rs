// File: crates/sentinel-chart/src/scale.rs
// Summary: Category (X) and value (Y) scale transforms between data and pixels.

use crate::axis::Axis;
use crate::geometry::PlotRect;

/// Horizontal scale over category indices; index `min` sits on the left edge.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub min: f64,
    pub max: f64,
}

impl CategoryScale {
    pub fn new(plot: &PlotRect, axis: &Axis) -> Self {
        Self { left_px: plot.left, right_px: plot.right, min: axis.min, max: axis.max }
    }
    #[inline]
    pub fn to_px(&self, x: f64) -> f32 {
        let span = (self.max - self.min).max(1e-12);
        self.left_px + ((x - self.min) / span) as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical linear value scale mapping `[vmin, vmax]` to `[bottom, top]` pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new(plot: &PlotRect, axis: &Axis) -> Self {
        let mut s = Self { top_px: plot.top, bottom_px: plot.bottom, vmin: axis.min, vmax: axis.max };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
