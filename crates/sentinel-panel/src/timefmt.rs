// File: crates/sentinel-panel/src/timefmt.rs
// Summary: Epoch-millisecond timestamps to Indonesian date/time strings used as chart labels.

use chrono::{DateTime, Datelike, FixedOffset, Offset, Utc};
use serde::Serialize;

use crate::error::{PanelError, Result};

/// Western Indonesia Time (UTC+07:00), the dashboard's display zone.
pub const WIB_OFFSET_SECS: i32 = 7 * 3600;

/// Label used when a sample has neither a `time` nor a usable timestamp.
pub const MISSING_LABEL: &str = "-";

const DAYS: [&str; 7] = ["Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu"];
const MONTHS: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormattedTimestamp {
    /// `Kamis, 01 Januari 1970 - 07:00:00`
    pub datetime: String,
    /// `Kamis, 01 Januari 1970`
    pub date: String,
    /// `07:00:00`
    pub time: String,
}

/// How sample labels are derived when a sample carries no preformatted `time`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelOptions {
    pub offset: FixedOffset,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self { offset: wib() }
    }
}

pub fn wib() -> FixedOffset {
    FixedOffset::east_opt(WIB_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Format `ms` (milliseconds since the Unix epoch) in `offset`. `None` when out of range.
pub fn format_timestamp(ms: i64, offset: FixedOffset) -> Option<FormattedTimestamp> {
    let dt = DateTime::<Utc>::from_timestamp_millis(ms)?.with_timezone(&offset);
    let day = DAYS[dt.weekday().num_days_from_sunday() as usize];
    let month = MONTHS[dt.month0() as usize];
    let time = dt.format("%H:%M:%S").to_string();
    let date = format!("{day}, {:02} {month} {}", dt.day(), dt.year());
    Some(FormattedTimestamp { datetime: format!("{date} - {time}"), date, time })
}

/// Parse `+07:00`, `-0330`, `+7`, `7`, `UTC` or `Z` into a fixed offset.
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset> {
    let raw = s.trim();
    let invalid = || PanelError::InvalidOffset(s.to_string());
    if raw.eq_ignore_ascii_case("utc") || raw.eq_ignore_ascii_case("z") {
        return Ok(Utc.fix());
    }
    let (sign, rest) = match raw.as_bytes().first() {
        Some(b'+') => (1, &raw[1..]),
        Some(b'-') => (-1, &raw[1..]),
        Some(_) => (1, raw),
        None => return Err(invalid()),
    };
    let (h, m) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 && rest.is_ascii() => rest.split_at(2),
        None => (rest, "0"),
    };
    let hours: i32 = h.parse().map_err(|_| invalid())?;
    let minutes: i32 = m.parse().map_err(|_| invalid())?;
    if !(0..=14).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(invalid());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
