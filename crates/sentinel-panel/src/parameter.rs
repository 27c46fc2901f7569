// File: crates/sentinel-panel/src/parameter.rs
// Summary: Fixed lookup table from parameter display name to data key, safe range and color.

use std::fmt;
use std::str::FromStr;

use sentinel_chart::Rgba;
use serde::Serialize;

use crate::error::PanelError;

/// A measured water-quality quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    Ph,
    Temperature,
    Tds,
    Turbidity,
}

/// Safe range; drawn as reference lines and used to pad the value axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Threshold {
    pub min: f64,
    pub max: f64,
}

impl Threshold {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Axis hints: the range widened by 10 % of its span on each side.
    pub fn suggested_bounds(&self) -> (f64, f64) {
        let pad = self.span() * 0.1;
        (self.min - pad, self.max + pad)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterConfig {
    pub parameter: Parameter,
    /// Field name of the reading inside a sample.
    pub key: &'static str,
    pub threshold: Threshold,
    pub color: Rgba,
    /// Style class of the card container.
    pub class: &'static str,
}

static PARAMETERS: [ParameterConfig; 4] = [
    ParameterConfig {
        parameter: Parameter::Ph,
        key: "ph",
        threshold: Threshold::new(6.5, 8.5),
        color: Rgba::rgb(0xca, 0x01, 0xe2),
        class: "ph",
    },
    ParameterConfig {
        parameter: Parameter::Temperature,
        key: "temperature",
        threshold: Threshold::new(27.0, 33.0),
        color: Rgba::rgb(0xff, 0x96, 0x01),
        class: "temperature",
    },
    ParameterConfig {
        parameter: Parameter::Tds,
        key: "tds",
        threshold: Threshold::new(0.0, 300.0),
        color: Rgba::rgb(0x81, 0x81, 0x81),
        class: "tds",
    },
    ParameterConfig {
        parameter: Parameter::Turbidity,
        key: "turbidity",
        threshold: Threshold::new(0.0, 3.0),
        color: Rgba::rgb(0xc8, 0x74, 0x00),
        class: "turbidity",
    },
];

impl ParameterConfig {
    /// Exact, case-sensitive match on the display name.
    pub fn lookup(name: &str) -> Option<&'static ParameterConfig> {
        PARAMETERS.iter().find(|c| c.parameter.name() == name)
    }

    pub fn all() -> &'static [ParameterConfig] {
        &PARAMETERS
    }
}

impl Parameter {
    pub const ALL: [Parameter; 4] = [Parameter::Ph, Parameter::Temperature, Parameter::Tds, Parameter::Turbidity];

    pub const fn name(self) -> &'static str {
        match self {
            Parameter::Ph => "pH Level",
            Parameter::Temperature => "Temperature",
            Parameter::Tds => "TDS",
            Parameter::Turbidity => "Turbidity",
        }
    }

    pub fn config(self) -> &'static ParameterConfig {
        match self {
            Parameter::Ph => &PARAMETERS[0],
            Parameter::Temperature => &PARAMETERS[1],
            Parameter::Tds => &PARAMETERS[2],
            Parameter::Turbidity => &PARAMETERS[3],
        }
    }

    pub fn key(self) -> &'static str {
        self.config().key
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the display name, or the data key in any case (`ph`, `TDS`, ...).
impl FromStr for Parameter {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Parameter::ALL
            .into_iter()
            .find(|p| p.name() == s || p.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| PanelError::UnknownParameter(s.to_string()))
    }
}
