//! Cross-day normalization: an entry always belongs to the calendar date
//! its start falls on, even when it ends after midnight.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBucket {
    /// Local calendar date of the start instant. Reports group by this.
    pub date: NaiveDate,
    /// True when start and end fall on different calendar dates.
    /// Display-only (a "+1d" marker); never affects grouping.
    pub crosses_day: bool,
}

pub fn normalize(start: DateTime<Local>, end: DateTime<Local>) -> DayBucket {
    let date = start.date_naive();
    DayBucket {
        date,
        crosses_day: date != end.date_naive(),
    }
}

/// An entry's end must be strictly after its start. Checked before any
/// record is written, for timer commits and manual entries alike.
pub fn validate_range(start: DateTime<Local>, end: DateTime<Local>) -> AppResult<()> {
    if end <= start {
        return Err(AppError::Validation(format!(
            "end time {} is not after start time {}",
            end.format("%Y-%m-%d %H:%M:%S"),
            start.format("%Y-%m-%d %H:%M:%S")
        )));
    }
    Ok(())
}
