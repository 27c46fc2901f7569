// File: crates/sentinel-chart/src/axis.rs
// Summary: Axis model with optional title and visible range.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// Axis title; empty titles are not drawn.
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Untitled category axis over sample indices.
    pub fn default_x() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("", 0.0, 1.0)
    }
}
