// File: crates/sentinel-chart/src/view.rs
// Visible data ranges: category X extent plus a Y range resolved from data and suggested bounds.

use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Data-driven view: Y extent of all series padded by 2 %.
    pub fn from_chart(chart: &Chart) -> Self {
        Self::resolve(chart, None, None)
    }

    /// Like [`ViewState::from_chart`] but honoring suggested Y bounds: a suggested
    /// bound widens the range, never narrows it, and disables padding on its side.
    pub fn resolve(chart: &Chart, suggested_min: Option<f64>, suggested_max: Option<f64>) -> Self {
        let n = chart.category_count();
        let (x_min, x_max) = if n <= 1 { (-0.5, 0.5) } else { (0.0, (n - 1) as f64) };

        let extent = chart
            .series
            .iter()
            .filter_map(|s| s.y_extent())
            .fold(None, |acc: Option<(f64, f64)>, (lo, hi)| match acc {
                None => Some((lo, hi)),
                Some((a, b)) => Some((a.min(lo), b.max(hi))),
            });

        let (mut y_min, mut y_max) = match (extent, suggested_min, suggested_max) {
            (Some((lo, hi)), None, None) => {
                let (lo, hi) = if (hi - lo).abs() < 1e-9 { (lo, lo + 1.0) } else { (lo, hi) };
                let m = (hi - lo) * 0.02;
                (lo - m, hi + m)
            }
            (Some((lo, hi)), smin, smax) => (
                smin.map_or(lo, |s| s.min(lo)),
                smax.map_or(hi, |s| s.max(hi)),
            ),
            (None, Some(a), Some(b)) => (a, b),
            (None, Some(a), None) => (a, a + 1.0),
            (None, None, Some(b)) => (b - 1.0, b),
            (None, None, None) => (0.0, 1.0),
        };
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        if y_max < y_min {
            std::mem::swap(&mut y_min, &mut y_max);
        }
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
