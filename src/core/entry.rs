//! Manual time-entry logic: create and edit entries outside the timer.
//! Any change to start or end re-derives duration and date bucket, so the
//! three fields stay consistent without waiting for reconciliation.

use crate::core::day;
use crate::core::duration::precise_duration_minutes;
use crate::db::store::{NewTimeEntry, RecordStore, TimeEntryPatch};
use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use chrono::{DateTime, Local};

pub struct EntryLogic;

impl EntryLogic {
    #[allow(clippy::too_many_arguments)]
    pub fn add(
        store: &mut dyn RecordStore,
        user_id: &str,
        project_id: &str,
        task_id: Option<&str>,
        description: &str,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> AppResult<TimeEntry> {
        if project_id.is_empty() {
            return Err(AppError::Validation(
                "a manual entry requires a project".to_string(),
            ));
        }
        day::validate_range(start, end)?;

        let bucket = day::normalize(start, end);
        store.create_time_entry(&NewTimeEntry {
            user_id: user_id.to_string(),
            project_id: project_id.to_string(),
            task_id: task_id.map(str::to_string),
            description: description.to_string(),
            start_time: start,
            end_time: end,
            duration: precise_duration_minutes(start, end),
            date: bucket.date,
        })
    }

    /// Edit start/end/description of an existing entry. Times not given
    /// keep their stored values; the merged range is validated and the
    /// duration and date re-derived from it.
    pub fn edit(
        store: &mut dyn RecordStore,
        id: i64,
        start: Option<DateTime<Local>>,
        end: Option<DateTime<Local>>,
        description: Option<&str>,
    ) -> AppResult<TimeEntry> {
        let existing = store
            .get_time_entry(id)?
            .ok_or_else(|| AppError::NotFound(format!("time entry {}", id)))?;

        let new_start = start.unwrap_or(existing.start_time);
        let new_end = end.unwrap_or(existing.end_time);
        day::validate_range(new_start, new_end)?;

        let bucket = day::normalize(new_start, new_end);
        let patch = TimeEntryPatch {
            description: description.map(str::to_string),
            start_time: Some(new_start),
            end_time: Some(new_end),
            duration: Some(precise_duration_minutes(new_start, new_end)),
            date: Some(bucket.date),
            ..Default::default()
        };
        store.update_time_entry(id, &patch)
    }
}
