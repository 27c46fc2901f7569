// File: crates/sentinel-panel/src/load.rs
// Summary: Load sample batches from JSON payloads or CSV exports.

use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{PanelError, Result};
use crate::sample::{Sample, SamplePayload};

/// Read an API envelope or a bare JSON array of samples.
pub fn load_samples_json<R: Read>(reader: R) -> Result<Vec<Sample>> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    SamplePayload::from_json_value(value)?.into_samples()
}

/// Read a CSV export. Headers are matched case-insensitively against common aliases;
/// cells that do not parse (or parse to NaN/inf) become missing readings, malformed rows are skipped.
pub fn load_samples_csv<R: Read>(reader: R) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    debug!(?headers, "sample csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_ts = idx(&["timestamp", "ts", "time_ms"]);
    let i_time = idx(&["time"]);
    let i_date = idx(&["date"]);
    let i_datetime = idx(&["datetime"]);
    let i_ph = idx(&["ph", "ph_level"]);
    let i_temp = idx(&["temperature", "temp"]);
    let i_tds = idx(&["tds"]);
    let i_turb = idx(&["turbidity", "ntu"]);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = match rec {
            Ok(rec) => rec,
            Err(e) => {
                warn!(row = row + 1, error = %e, "skipping malformed csv row");
                continue;
            }
        };
        let text = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).filter(|s| !s.is_empty());
        let num = |i: Option<usize>| text(i).and_then(|s| s.parse::<f64>().ok()).filter(|v| v.is_finite());

        out.push(Sample {
            timestamp: text(i_ts).and_then(|s| {
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v as i64))
            }),
            time: text(i_time).map(str::to_string),
            date: text(i_date).map(str::to_string),
            datetime: text(i_datetime).map(str::to_string),
            ph: num(i_ph),
            temperature: num(i_temp),
            tds: num(i_tds),
            turbidity: num(i_turb),
        });
    }
    Ok(out)
}

/// Load by file extension (`.json` or `.csv`).
pub fn load_samples_path(path: impl AsRef<Path>) -> Result<Vec<Sample>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let open = || {
        std::fs::File::open(path).map_err(|source| PanelError::Io { path: path.to_path_buf(), source })
    };
    let samples = match ext.as_str() {
        "json" => load_samples_json(std::io::BufReader::new(open()?))?,
        "csv" => load_samples_csv(open()?)?,
        _ => return Err(PanelError::UnsupportedFormat(path.to_path_buf())),
    };
    debug!(path = %path.display(), count = samples.len(), "loaded samples");
    Ok(samples)
}

/// Oldest first. The telemetry API returns newest first; samples without a
/// timestamp keep their relative order at the end.
pub fn sort_chronological(samples: &mut [Sample]) {
    samples.sort_by_key(|s| (s.timestamp.is_none(), s.timestamp));
}
