// File: crates/sentinel-panel/src/lib.rs
// Summary: Panel library entry point; turns telemetry samples into a rendered parameter chart card.

pub mod card;
pub mod config;
pub mod error;
pub mod load;
pub mod parameter;
pub mod sample;
pub mod timefmt;

pub use card::{CardOptions, ChartCard};
pub use config::{build_chart_config, build_chart_config_with, ChartConfig, ChartOptions, Dataset, YScaleOptions};
pub use error::{PanelError, Result};
pub use load::{load_samples_csv, load_samples_json, load_samples_path, sort_chronological};
pub use parameter::{Parameter, ParameterConfig, Threshold};
pub use sample::{ApiEnvelope, Sample, SamplePayload};
pub use timefmt::{format_timestamp, parse_utc_offset, FormattedTimestamp, LabelOptions};
