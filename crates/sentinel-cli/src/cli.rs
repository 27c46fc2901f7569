// File: crates/sentinel-cli/src/cli.rs
// Summary: Command-line arguments for the panel renderer.

use std::path::PathBuf;

use clap::Parser;

/// Render water-quality chart panels (pH, temperature, TDS, turbidity) to PNG.
#[derive(Parser, Debug)]
#[command(name = "sentinel-chart")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Sample file: API JSON envelope, bare JSON array, or CSV export
    #[arg(value_name = "SAMPLES")]
    pub input: PathBuf,

    /// Parameter to render, by display name or data key; repeatable. Defaults to all four
    #[arg(long, short, value_name = "NAME")]
    pub parameter: Vec<String>,

    /// Output directory for PNG (and JSON config) files
    #[arg(long, short, default_value = "target/out", env = "SENTINEL_OUT_DIR")]
    pub out_dir: PathBuf,

    /// Theme preset (light, dark)
    #[arg(long, default_value = "light", env = "SENTINEL_THEME")]
    pub theme: String,

    #[arg(long, default_value_t = 720)]
    pub width: i32,

    #[arg(long, default_value_t = 400)]
    pub height: i32,

    /// Offset used to label samples that only carry a timestamp
    #[arg(long, default_value = "+07:00", env = "SENTINEL_UTC_OFFSET")]
    pub utc_offset: String,

    /// Sort samples oldest first (the telemetry API returns newest first)
    #[arg(long)]
    pub chronological: bool,

    /// Downsample series longer than this many points before drawing
    #[arg(long, value_name = "N")]
    pub max_points: Option<usize>,

    /// Highlight the sample at this index with a tooltip
    #[arg(long, value_name = "INDEX")]
    pub hover: Option<usize>,

    /// Skip text (title, ticks, labels)
    #[arg(long)]
    pub no_labels: bool,

    /// Also write each chart configuration as JSON
    #[arg(long)]
    pub emit_config: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
