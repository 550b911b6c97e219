//! "Years active" badge value.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{FolioError, FolioResult};

/// Average Gregorian year, in milliseconds.
const YEAR_MS: f64 = 365.25 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Whole years elapsed from midnight UTC on `since` until `now`, never
/// negative.
pub fn years_since(since: NaiveDate, now: DateTime<Utc>) -> u32 {
    let start = since.and_time(chrono::NaiveTime::MIN).and_utc();
    let elapsed_ms = (now - start).num_milliseconds();
    if elapsed_ms <= 0 {
        return 0;
    }
    (elapsed_ms as f64 / YEAR_MS).floor() as u32
}

/// Badge text, e.g. `5+`.
pub fn years_label(years: u32) -> String {
    format!("{years}+")
}

/// Convert a JavaScript-style epoch millisecond timestamp.
pub fn from_epoch_millis(ms: f64) -> FolioResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms as i64)
        .ok_or_else(|| FolioError::InvalidDate(format!("timestamp {ms} out of range")))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> FolioResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| FolioError::InvalidDate(format!("{s}: {e}")))
}
