//! Record-store seam.
//!
//! The timer core never talks to SQLite directly: it goes through the
//! `RecordStore` trait, which exposes exactly the operations the commit
//! resolver and the reconciliation engine need. `DbPool` implements it
//! over `db::queries`; tests substitute failing or counting stores.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use chrono::{DateTime, Local, NaiveDate};

/// Fields for a brand-new entry; `id` is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewTimeEntry {
    pub user_id: String,
    pub project_id: String,
    pub task_id: Option<String>,
    pub description: String,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub duration: f64,
    pub date: NaiveDate,
}

/// Partial update; None leaves the stored field unchanged.
#[derive(Debug, Clone, Default)]
pub struct TimeEntryPatch {
    pub project_id: Option<String>,
    pub task_id: Option<Option<String>>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Local>>,
    pub end_time: Option<DateTime<Local>>,
    pub duration: Option<f64>,
    pub date: Option<NaiveDate>,
}

pub trait RecordStore {
    fn create_time_entry(&mut self, entry: &NewTimeEntry) -> AppResult<TimeEntry>;

    fn update_time_entry(&mut self, id: i64, patch: &TimeEntryPatch) -> AppResult<TimeEntry>;

    /// Exact-match lookup on start time, scoped to one user.
    fn find_time_entry_by_start_time(
        &mut self,
        user_id: &str,
        start: DateTime<Local>,
    ) -> AppResult<Option<TimeEntry>>;

    fn get_time_entry(&mut self, id: i64) -> AppResult<Option<TimeEntry>>;

    fn list_time_entries(&mut self, user_id: &str) -> AppResult<Vec<TimeEntry>>;

    fn delete_time_entry(&mut self, id: i64) -> AppResult<()>;
}

impl RecordStore for DbPool {
    fn create_time_entry(&mut self, entry: &NewTimeEntry) -> AppResult<TimeEntry> {
        let mut row = TimeEntry {
            id: 0,
            user_id: entry.user_id.clone(),
            project_id: entry.project_id.clone(),
            task_id: entry.task_id.clone(),
            description: entry.description.clone(),
            start_time: entry.start_time,
            end_time: entry.end_time,
            duration: entry.duration,
            date: entry.date,
        };
        row.id = queries::insert_entry(&self.conn, &row)
            .map_err(|e| AppError::Write(format!("create entry: {}", e)))?;
        Ok(row)
    }

    fn update_time_entry(&mut self, id: i64, patch: &TimeEntryPatch) -> AppResult<TimeEntry> {
        let existing = queries::load_entry_by_id(&self.conn, id)?
            .ok_or_else(|| AppError::NotFound(format!("time entry {}", id)))?;

        let merged = TimeEntry {
            id,
            user_id: existing.user_id,
            project_id: patch.project_id.clone().unwrap_or(existing.project_id),
            task_id: patch.task_id.clone().unwrap_or(existing.task_id),
            description: patch.description.clone().unwrap_or(existing.description),
            start_time: patch.start_time.unwrap_or(existing.start_time),
            end_time: patch.end_time.unwrap_or(existing.end_time),
            duration: patch.duration.unwrap_or(existing.duration),
            date: patch.date.unwrap_or(existing.date),
        };

        let changed = queries::update_entry(&self.conn, &merged)
            .map_err(|e| AppError::Write(format!("update entry {}: {}", id, e)))?;
        if changed == 0 {
            return Err(AppError::NotFound(format!("time entry {}", id)));
        }
        Ok(merged)
    }

    fn find_time_entry_by_start_time(
        &mut self,
        user_id: &str,
        start: DateTime<Local>,
    ) -> AppResult<Option<TimeEntry>> {
        Ok(queries::load_entry_by_start_time(&self.conn, user_id, start)?)
    }

    fn get_time_entry(&mut self, id: i64) -> AppResult<Option<TimeEntry>> {
        Ok(queries::load_entry_by_id(&self.conn, id)?)
    }

    fn list_time_entries(&mut self, user_id: &str) -> AppResult<Vec<TimeEntry>> {
        Ok(queries::load_entries(&self.conn, user_id)?)
    }

    fn delete_time_entry(&mut self, id: i64) -> AppResult<()> {
        let deleted = queries::delete_entry(&self.conn, id)
            .map_err(|e| AppError::Write(format!("delete entry {}: {}", id, e)))?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("time entry {}", id)));
        }
        Ok(())
    }
}
