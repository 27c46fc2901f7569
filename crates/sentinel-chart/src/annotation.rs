// File: crates/sentinel-chart/src/annotation.rs
// Summary: Horizontal reference-line annotations (e.g. safe-range bounds) drawn over the plot.

use serde::Serialize;

use crate::types::Rgba;

/// Where a label sits along its line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationLabel {
    pub content: String,
    pub position: LabelPosition,
    #[serde(rename = "backgroundColor")]
    pub background: Rgba,
    pub color: Rgba,
}

impl AnnotationLabel {
    pub fn new(content: impl Into<String>, background: Rgba) -> Self {
        Self { content: content.into(), position: LabelPosition::Start, background, color: Rgba::WHITE }
    }

    pub fn at(mut self, position: LabelPosition) -> Self {
        self.position = position;
        self
    }
}

/// Full-width horizontal line at value `y`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HLineAnnotation {
    pub id: String,
    pub y: f64,
    #[serde(rename = "borderColor")]
    pub color: Rgba,
    #[serde(rename = "borderWidth")]
    pub width: f32,
    /// On/off dash intervals in pixels; empty draws a solid line.
    #[serde(rename = "borderDash")]
    pub dash: Vec<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<AnnotationLabel>,
}

impl HLineAnnotation {
    pub fn new(id: impl Into<String>, y: f64) -> Self {
        Self { id: id.into(), y, color: Rgba::RED, width: 1.0, dash: Vec::new(), label: None }
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn dashed(mut self, dash: impl Into<Vec<f32>>) -> Self {
        self.dash = dash.into();
        self
    }

    pub fn label(mut self, label: AnnotationLabel) -> Self {
        self.label = Some(label);
        self
    }

    /// Dash pattern usable by Skia: needs an even count of positive intervals.
    pub(crate) fn dash_intervals(&self) -> Option<&[f32]> {
        let ok = !self.dash.is_empty() && self.dash.len() % 2 == 0 && self.dash.iter().all(|d| *d > 0.0);
        ok.then_some(self.dash.as_slice())
    }
}
