// File: crates/sentinel-panel/src/config.rs
// Summary: Pure derivation of a declarative chart configuration from a parameter name and samples.

use sentinel_chart::{AnnotationLabel, HLineAnnotation, LabelPosition, Rgba};
use serde::Serialize;
use tracing::debug;

use crate::parameter::{ParameterConfig, Threshold};
use crate::sample::Sample;
use crate::timefmt::LabelOptions;

/// Everything needed to draw one parameter card. Serializes to a Chart.js-shaped object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Card heading; the parameter name exactly as requested.
    pub title: String,
    /// Container style class; `None` for unknown parameters.
    pub class: Option<&'static str>,
    pub threshold: Option<Threshold>,
    pub labels: Vec<String>,
    pub dataset: Dataset,
    pub options: ChartOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    /// One entry per sample; `None` where the reading is missing.
    pub data: Vec<Option<f64>>,
    pub fill: bool,
    pub border_color: Option<Rgba>,
    pub point_background_color: Option<Rgba>,
    pub tension: f32,
    pub point_radius: f32,
    pub point_hover_radius: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub legend_display: bool,
    /// `minLine` / `maxLine` when the parameter has a threshold, else empty.
    pub annotations: Vec<HLineAnnotation>,
    pub y: YScaleOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YScaleOptions {
    pub begin_at_zero: bool,
    pub suggested_min: Option<f64>,
    pub suggested_max: Option<f64>,
}

const THRESHOLD_DASH: [f32; 2] = [6.0, 6.0];

impl ChartConfig {
    /// `"<label>: <value>"` for the point at `index`, if it has a value.
    pub fn tooltip_text(&self, index: usize) -> Option<String> {
        let value = (*self.dataset.data.get(index)?)?;
        Some(format!("{}: {}", self.dataset.label, value))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Build the chart configuration for `parameter` using default label options (WIB clock).
pub fn build_chart_config(parameter: &str, samples: &[Sample]) -> ChartConfig {
    build_chart_config_with(parameter, samples, &LabelOptions::default())
}

/// Unknown parameters are not an error: key, threshold, color and class stay unset,
/// every value is `None` and no threshold lines are produced.
pub fn build_chart_config_with(parameter: &str, samples: &[Sample], label_opts: &LabelOptions) -> ChartConfig {
    let selected = ParameterConfig::lookup(parameter);
    if selected.is_none() {
        debug!(parameter, "no display configuration for parameter; rendering unstyled");
    }

    let key = selected.map(|c| c.key);
    let threshold = selected.map(|c| c.threshold);
    let color = selected.map(|c| c.color);

    let labels: Vec<String> = samples.iter().map(|s| s.label(label_opts)).collect();
    let values: Vec<Option<f64>> = samples
        .iter()
        .map(|s| key.and_then(|k| s.reading(k)))
        .collect();
    debug!(parameter, samples = samples.len(), present = values.iter().flatten().count(), "derived series");

    let (suggested_min, suggested_max) = match threshold {
        Some(t) => {
            let (lo, hi) = t.suggested_bounds();
            (Some(lo), Some(hi))
        }
        None => (None, None),
    };

    ChartConfig {
        title: parameter.to_string(),
        class: selected.map(|c| c.class),
        threshold,
        labels,
        dataset: Dataset {
            label: parameter.to_string(),
            data: values,
            fill: false,
            border_color: color,
            point_background_color: color,
            tension: 0.0,
            point_radius: 1.0,
            point_hover_radius: 5.0,
        },
        options: ChartOptions {
            responsive: true,
            legend_display: false,
            annotations: threshold.map(threshold_lines).unwrap_or_default(),
            y: YScaleOptions { begin_at_zero: false, suggested_min, suggested_max },
        },
    }
}

fn threshold_lines(t: Threshold) -> Vec<HLineAnnotation> {
    let line = |id: &str, y: f64, content: &str| {
        HLineAnnotation::new(id, y)
            .color(Rgba::RED)
            .width(1.0)
            .dashed(THRESHOLD_DASH)
            .label(AnnotationLabel::new(content, Rgba::RED).at(LabelPosition::Start))
    };
    vec![line("minLine", t.min, "Min"), line("maxLine", t.max, "Max")]
}
