use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// A committed work period.
///
/// `duration` is fractional minutes and must always agree with
/// `end_time - start_time` within the reconciliation epsilon; the
/// reconciliation engine rewrites it when it does not. `date` is the
/// calendar date of `start_time` in the local zone, even when the entry
/// ends on the next day.
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub id: i64,                       // ⇔ time_entries.id (INTEGER PK)
    pub user_id: String,               // ⇔ time_entries.user_id (TEXT)
    pub project_id: String,            // ⇔ time_entries.project_id (TEXT)
    pub task_id: Option<String>,       // ⇔ time_entries.task_id (TEXT NULL)
    pub description: String,           // ⇔ time_entries.description (TEXT)
    pub start_time: DateTime<Local>,   // ⇔ time_entries.start_time (TEXT RFC3339)
    pub end_time: DateTime<Local>,     // ⇔ time_entries.end_time (TEXT RFC3339)
    pub duration: f64,                 // ⇔ time_entries.duration (REAL, minutes)
    pub date: NaiveDate,               // ⇔ time_entries.date (TEXT "YYYY-MM-DD")
}

impl TimeEntry {
    /// True when the entry ends on a later calendar day than it starts.
    /// Informational only; grouping always follows `date`.
    pub fn crosses_day(&self) -> bool {
        self.start_time.date_naive() != self.end_time.date_naive()
    }
}
