// File: crates/sentinel-panel/src/sample.rs
// Summary: One timestamped telemetry reading and the upstream payload envelope carrying a batch of them.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{PanelError, Result};
use crate::timefmt::{format_timestamp, LabelOptions, MISSING_LABEL};

/// One reading of all measured parameters. Any field may be absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Preformatted `HH:MM:SS` label, preferred over `timestamp` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    #[serde(default, deserialize_with = "opt_reading")]
    pub ph: Option<f64>,
    #[serde(default, deserialize_with = "opt_reading")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "opt_reading")]
    pub tds: Option<f64>,
    #[serde(default, deserialize_with = "opt_reading")]
    pub turbidity: Option<f64>,
}

impl Sample {
    pub fn at(timestamp_ms: i64) -> Self {
        Self { timestamp: Some(timestamp_ms), ..Self::default() }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Set the reading stored under `key`; unknown keys are ignored.
    pub fn with_reading(mut self, key: &str, value: f64) -> Self {
        if let Some(slot) = self.reading_mut(key) {
            *slot = Some(value);
        }
        self
    }

    /// Reading for a data key (`ph`, `temperature`, `tds`, `turbidity`).
    pub fn reading(&self, key: &str) -> Option<f64> {
        match key {
            "ph" => self.ph,
            "temperature" => self.temperature,
            "tds" => self.tds,
            "turbidity" => self.turbidity,
            _ => None,
        }
    }

    fn reading_mut(&mut self, key: &str) -> Option<&mut Option<f64>> {
        match key {
            "ph" => Some(&mut self.ph),
            "temperature" => Some(&mut self.temperature),
            "tds" => Some(&mut self.tds),
            "turbidity" => Some(&mut self.turbidity),
            _ => None,
        }
    }

    /// X-axis label: `time`, else the formatted timestamp, else `-`.
    pub fn label(&self, opts: &LabelOptions) -> String {
        if let Some(t) = &self.time {
            return t.clone();
        }
        self.timestamp
            .and_then(|ms| format_timestamp(ms, opts.offset))
            .map(|f| f.time)
            .unwrap_or_else(|| MISSING_LABEL.to_string())
    }
}

/// Response envelope of the telemetry API: `{ "status", "message", "data": [...] }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<Sample>,
}

/// A batch of samples, either wrapped in an [`ApiEnvelope`] or as a bare array.
#[derive(Clone, Debug, PartialEq)]
pub enum SamplePayload {
    Samples(Vec<Sample>),
    Envelope(ApiEnvelope),
}

impl SamplePayload {
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        if value.is_array() {
            Ok(SamplePayload::Samples(serde_json::from_value(value)?))
        } else {
            Ok(SamplePayload::Envelope(serde_json::from_value(value)?))
        }
    }

    /// Samples in payload order; an envelope with `status: "error"` becomes [`PanelError::Upstream`].
    pub fn into_samples(self) -> Result<Vec<Sample>> {
        match self {
            SamplePayload::Samples(samples) => Ok(samples),
            SamplePayload::Envelope(env) => {
                if env.status.as_deref().is_some_and(|s| s.eq_ignore_ascii_case("error")) {
                    return Err(PanelError::Upstream(env.message.unwrap_or_else(|| "no message".to_string())));
                }
                Ok(env.data)
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Str(String),
}

/// Numbers, numeric strings (the store hands decimals back as strings) and null.
fn opt_reading<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<f64>, D::Error> {
    match Option::<Scalar>::deserialize(d)? {
        None => Ok(None),
        Some(Scalar::Int(v)) => Ok(Some(v as f64)),
        Some(Scalar::Float(v)) => Ok(Some(v)),
        Some(Scalar::Str(s)) if s.trim().is_empty() => Ok(None),
        // "NaN" / "inf" parse as f64 but are not readings.
        Some(Scalar::Str(s)) => s
            .trim()
            .parse::<f64>()
            .map(|v| Some(v).filter(|v| v.is_finite()))
            .map_err(|_| de::Error::custom(format!("invalid reading `{s}`"))),
    }
}

fn opt_timestamp<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<i64>, D::Error> {
    match Option::<Scalar>::deserialize(d)? {
        None => Ok(None),
        Some(Scalar::Int(v)) => Ok(Some(v)),
        Some(Scalar::Float(v)) if v.is_finite() => Ok(Some(v as i64)),
        Some(Scalar::Float(v)) => Err(de::Error::custom(format!("invalid timestamp `{v}`"))),
        Some(Scalar::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(Scalar::Str(s)) => {
            let t = s.trim();
            t.parse::<i64>()
                .ok()
                .or_else(|| t.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v as i64))
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp `{s}`")))
        }
    }
}
