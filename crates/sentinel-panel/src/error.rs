// File: crates/sentinel-panel/src/error.rs
// Summary: Error type for panel construction, sample loading and rendering.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("unknown parameter `{0}` (expected one of: pH Level, Temperature, TDS, Turbidity)")]
    UnknownParameter(String),

    #[error("invalid sample payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid sample csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("upstream reported an error: {0}")]
    Upstream(String),

    #[error("unsupported sample file {} (expected .json or .csv)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid UTC offset `{0}`")]
    InvalidOffset(String),

    #[error("render failed: {0:#}")]
    Render(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PanelError>;
