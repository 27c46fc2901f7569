// File: crates/sentinel-chart/src/series.rs
// Summary: Line series over category indices, with gaps for missing readings.

use crate::types::Rgba;

/// Stroke and point styling for a line series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    /// `None` falls back to the theme's line color.
    pub color: Option<Rgba>,
    pub point_color: Option<Rgba>,
    pub width: f32,
    pub point_radius: f32,
    pub point_hover_radius: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { color: None, point_color: None, width: 2.0, point_radius: 1.0, point_hover_radius: 5.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    /// `(x, y)` pairs; `y == None` breaks the line.
    pub data: Vec<(f64, Option<f64>)>,
    pub style: LineStyle,
}

impl Series {
    pub fn new(name: impl Into<String>, data: Vec<(f64, Option<f64>)>) -> Self {
        Self { name: name.into(), data, style: LineStyle::default() }
    }

    /// One point per value, x = position in the slice.
    pub fn from_values(name: impl Into<String>, values: &[Option<f64>]) -> Self {
        let data = values.iter().enumerate().map(|(i, v)| (i as f64, *v)).collect();
        Self::new(name, data)
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Value at category index `x`, if the point exists and is present.
    pub fn value_at(&self, x: f64) -> Option<f64> {
        self.data.iter().find(|(px, _)| (*px - x).abs() < 1e-9).and_then(|(_, y)| *y)
    }

    /// Maximal stretches of consecutive present, finite points.
    pub fn runs(&self) -> Vec<Vec<(f64, f64)>> {
        let mut out = Vec::new();
        let mut cur: Vec<(f64, f64)> = Vec::new();
        for &(x, y) in &self.data {
            match y {
                Some(v) if v.is_finite() => cur.push((x, v)),
                _ => {
                    if !cur.is_empty() { out.push(std::mem::take(&mut cur)); }
                }
            }
        }
        if !cur.is_empty() { out.push(cur); }
        out
    }

    /// Min/max over present values.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .filter_map(|(_, y)| y.filter(|v| v.is_finite()))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Downsample with LTTB to roughly `max_points` present points. Each run keeps
    /// a share of the budget proportional to its length, so gaps survive.
    pub fn downsample_lttb(&self, max_points: usize) -> Self {
        use crate::downsample::lttb;
        let runs = self.runs();
        let present: usize = runs.iter().map(Vec::len).sum();
        if max_points < 2 || present <= max_points {
            return self.clone();
        }
        let mut data = Vec::with_capacity(max_points + runs.len());
        for (i, run) in runs.iter().enumerate() {
            if i > 0 {
                // Re-insert a gap marker between runs.
                let gap_x = (runs[i - 1].last().map(|p| p.0).unwrap_or(0.0) + run[0].0) * 0.5;
                data.push((gap_x, None));
            }
            let budget = ((run.len() * max_points) / present).max(2);
            data.extend(lttb(run, budget).into_iter().map(|(x, y)| (x, Some(y))));
        }
        Self { name: self.name.clone(), data, style: self.style }
    }
}
