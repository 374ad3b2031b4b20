//! Time utilities: timestamp parsing/serialization, elapsed-time formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone};

/// Serialize a timestamp for storage.
/// Fixed microsecond precision so that equality lookups (the commit
/// idempotency guard matches on start_time) compare the same text the
/// writer produced.
pub fn to_db_ts(t: DateTime<Local>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Parse a timestamp read back from storage.
pub fn parse_db_ts(s: &str) -> AppResult<DateTime<Local>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Local))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Parse a user-supplied timestamp: RFC3339, or a local
/// "YYYY-MM-DD HH:MM[:SS]".
pub fn parse_user_ts(s: &str) -> AppResult<DateTime<Local>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t.with_timezone(&Local));
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))
}

/// Format elapsed seconds as HH:MM:SS for the live display.
pub fn format_hms(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Render fractional minutes as "HHh MMm" for list output.
pub fn mins2readable(mins: f64) -> String {
    let total = mins.round().max(0.0) as i64;
    format!("{:02}h {:02}m", total / 60, total % 60)
}
